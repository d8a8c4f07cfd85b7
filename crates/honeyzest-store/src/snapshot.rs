//! # Store Snapshot
//!
//! A serializable, read-only picture of everything a view renders, taken
//! through [`Store::snapshot`]. Prices are included both as KES cents and as
//! display strings in the selected currency.

use honeyzest_core::{
    Blog, Notification, Order, Preferences, Product, ProductId, SiteContent, User,
};
use serde::Serialize;

use crate::error::StoreResult;
use crate::store::{CartSummary, Store};

/// A catalog entry as the shop renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub display_price: String,
    pub average_rating: Option<f64>,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub user: Option<User>,
    pub preferences: Preferences,
    pub products: Vec<ProductView>,
    pub cart: CartSummary,
    pub cart_display_total: String,
    pub favorites: Vec<ProductId>,
    /// Every order for an admin, the user's own otherwise, none when
    /// signed out.
    pub orders: Vec<Order>,
    pub blogs: Vec<Blog>,
    pub content: SiteContent,
    pub notifications: Vec<Notification>,
    pub unread_notifications: usize,
}

impl Store {
    pub fn snapshot(&self) -> StoreResult<StoreSnapshot> {
        let user = self.current_user().cloned();

        let orders = match &user {
            Some(u) if u.is_admin() => self.orders().to_vec(),
            Some(u) => self.orders_for(&u.email).into_iter().cloned().collect(),
            None => Vec::new(),
        };

        let products = self
            .products()
            .iter()
            .map(|p| ProductView {
                display_price: self.format_price(p.price),
                average_rating: p.average_rating(),
                favorite: self.favorites().contains(&p.id),
                product: p.clone(),
            })
            .collect();

        let cart = self.cart_summary()?;
        Ok(StoreSnapshot {
            user,
            preferences: self.preferences(),
            products,
            cart_display_total: self.format_price(cart.subtotal),
            cart,
            favorites: self.favorites().to_vec(),
            orders,
            blogs: self.blogs().to_vec(),
            content: self.content().clone(),
            notifications: self.notifications().to_vec(),
            unread_notifications: self.unread_notification_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyzest_core::Currency;

    #[test]
    fn test_orders_visible_by_role() {
        let mut store = Store::seeded();
        assert!(store.snapshot().unwrap().orders.is_empty());

        store.login("sarah@gmail.com", "123").unwrap();
        let orders = store.snapshot().unwrap().orders;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].email, "sarah@gmail.com");

        store.logout();
        store.login("admin@honeyzest.com", "123").unwrap();
        assert_eq!(store.snapshot().unwrap().orders.len(), 2);
    }

    #[test]
    fn test_display_prices_follow_currency() {
        let mut store = Store::seeded();
        store.set_currency(Currency::Usd);
        store.add_to_cart(ProductId::new(1)).unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.products[0].display_price, "$ 6.08");
        assert_eq!(snapshot.cart_display_total, "$ 6.08");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut store = Store::seeded();
        store.login("john@gmail.com", "123").unwrap();
        store.toggle_favorite(ProductId::new(3)).unwrap();

        let json = serde_json::to_value(store.snapshot().unwrap()).unwrap();
        assert_eq!(json["user"]["email"], "john@gmail.com");
        assert!(json["user"].get("password").is_none());
        assert_eq!(json["products"][0]["name"], "Acacia Gold");
        assert_eq!(json["products"][0]["displayPrice"], "KSh 800");
        assert_eq!(json["products"][0]["price"], 80_000);
        assert_eq!(json["products"][2]["favorite"], true);
        assert_eq!(json["preferences"]["currency"], "KES");
        assert_eq!(json["unreadNotifications"], 2);
    }
}
