//! # Catalog
//!
//! Products, their reviews, shop search and favorites.

use honeyzest_core::validation::{validate_price, validate_product_name, validate_rating, validate_text};
use honeyzest_core::{Category, CoreError, Money, Product, ProductId, Review, ReviewId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ids::claim_child_ids;
use super::Store;
use crate::error::StoreResult;

/// Admin product form.
///
/// With `id` set the matching product is replaced wholesale; without it a new
/// product is created. `reviews` replaces the existing reviews only when
/// supplied; a review id already held by another product, or repeated in the
/// list, is replaced with a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    /// Unit price in KES cents (KSh 800 is `80000` on the wire).
    pub price: Money,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

/// A review as submitted from a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub user: String,
    pub rating: u8,
    pub text: String,
}

impl Store {
    /// Creates or updates a product. Admin only. Returns the product id.
    pub fn save_product(&mut self, mut draft: ProductDraft) -> StoreResult<ProductId> {
        self.require_admin("save products")?;
        validate_product_name(&draft.name)?;
        validate_price(draft.price)?;
        if let Some(reviews) = &draft.reviews {
            for review in reviews {
                validate_rating(review.rating)?;
            }
        }

        let target = draft.id;
        if let Some(reviews) = draft.reviews.as_mut() {
            let products = &self.products;
            let replaced = claim_child_ids(reviews, |review_id| {
                products
                    .iter()
                    .filter(|p| Some(p.id) != target)
                    .any(|p| p.reviews.iter().any(|r| r.id == *review_id))
            });
            if replaced > 0 {
                debug!(replaced, "Reassigned duplicate review ids");
            }
        }

        match draft.id {
            Some(id) => {
                let product = self.product_mut(id).ok_or(CoreError::ProductNotFound(id))?;
                product.name = draft.name;
                product.price = draft.price;
                product.description = draft.description;
                product.image = draft.image;
                product.category = draft.category;
                if let Some(reviews) = draft.reviews {
                    product.reviews = reviews;
                }
                info!(product_id = %id, price = %draft.price, "Product updated");
                Ok(id)
            }
            None => {
                let id = self.ids.product();
                self.products.push(Product {
                    id,
                    name: draft.name,
                    price: draft.price,
                    description: draft.description,
                    image: draft.image,
                    category: draft.category,
                    reviews: draft.reviews.unwrap_or_default(),
                });
                info!(product_id = %id, price = %draft.price, "Product created");
                Ok(id)
            }
        }
    }

    /// Removes a product. Admin only.
    ///
    /// The product also leaves the cart and favorites. Placed orders keep
    /// their snapshot.
    pub fn delete_product(&mut self, id: ProductId) -> StoreResult<Product> {
        self.require_admin("delete products")?;

        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let removed = self.products.remove(index);
        self.cart.remove(id);
        self.favorites.retain(|fav| *fav != id);
        info!(product_id = %id, "Product deleted");
        Ok(removed)
    }

    /// Appends a review to a product. Open to any visitor.
    ///
    /// ## Errors
    /// - `ProductNotFound`
    /// - `OutOfRange` for ratings outside 1..=5
    /// - `Required` for an empty reviewer label or text
    pub fn add_product_review(
        &mut self,
        product_id: ProductId,
        draft: ReviewDraft,
    ) -> StoreResult<ReviewId> {
        validate_rating(draft.rating)?;
        validate_text("reviewer", &draft.user, 100)?;
        validate_text("review", &draft.text, 2000)?;

        let product = self
            .product_mut(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;

        let review = Review {
            id: ReviewId::new(),
            user: draft.user.trim().to_string(),
            rating: draft.rating,
            text: draft.text.trim().to_string(),
        };
        let review_id = review.id;
        product.reviews.push(review);

        debug!(product_id = %product_id, review_id = %review_id, "Review added");
        Ok(review_id)
    }

    /// Removes one review by id. Admin only.
    pub fn delete_review(&mut self, product_id: ProductId, review_id: ReviewId) -> StoreResult<Review> {
        self.require_admin("delete reviews")?;

        let product = self
            .product_mut(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        let index = product
            .reviews
            .iter()
            .position(|r| r.id == review_id)
            .ok_or(CoreError::ReviewNotFound {
                product: product_id,
                review: review_id,
            })?;

        let removed = product.reviews.remove(index);
        info!(product_id = %product_id, review_id = %review_id, "Review deleted");
        Ok(removed)
    }

    /// Shop search: case-insensitive name match, optionally within one
    /// category. `None` means all categories. Catalog order is kept.
    pub fn search_products(&self, term: &str, category: Option<Category>) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Pins or unpins a product. Returns `true` if it is now a favorite.
    pub fn toggle_favorite(&mut self, product_id: ProductId) -> StoreResult<bool> {
        if self.product(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id).into());
        }

        let pinned = match self.favorites.iter().position(|id| *id == product_id) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(product_id);
                true
            }
        };
        debug!(product_id = %product_id, pinned, "Favorite toggled");
        Ok(pinned)
    }

    /// Favorite products in pin order.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.favorites
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }
}
