//! # Cart
//!
//! The shopper's cart: product id → quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Shop "Add to Cart" ─────► add_to_cart(id) ──────► qty + 1             │
//! │                                                                         │
//! │  Cart "−" button ────────► remove_from_cart(id) ─► qty − 1, or drop    │
//! │                                                    the line at zero    │
//! │                                                                         │
//! │  Cart quantity field ────► set_cart_quantity(id, n) ─► n, 0 drops      │
//! │                                                                         │
//! │  Checkout / logout ──────► clear()                                     │
//! │                                                                         │
//! │  Cart page ──────────────► cart_summary() ─► lines priced from the     │
//! │                                              CURRENT catalog           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a till, the cart stores no prices: it is priced against the catalog
//! whenever it is read, and frozen only when an order is placed.

use std::collections::BTreeMap;

use honeyzest_core::validation::validate_quantity;
use honeyzest_core::{
    CoreError, CoreResult, Money, OrderLine, Product, ProductId, MAX_ITEM_QUANTITY,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Store;
use crate::error::StoreResult;

/// The shopping cart.
///
/// ## Invariants
/// - Every present line has quantity ≥ 1; a line reaching zero is removed
/// - Quantity never exceeds [`MAX_ITEM_QUANTITY`]
/// - Iteration is in ascending product id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: BTreeMap<ProductId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit, creating the line if needed. Returns the new quantity.
    pub fn increment(&mut self, product_id: ProductId) -> Result<u32, CoreError> {
        let current = self.quantity(product_id);
        if current >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                product: product_id,
                max: MAX_ITEM_QUANTITY,
            });
        }
        self.lines.insert(product_id, current + 1);
        Ok(current + 1)
    }

    /// Removes one unit. Returns the remaining quantity; 0 means the line is
    /// gone (or was never there).
    pub fn decrement(&mut self, product_id: ProductId) -> u32 {
        match self.lines.get(&product_id).copied() {
            Some(qty) if qty > 1 => {
                self.lines.insert(product_id, qty - 1);
                qty - 1
            }
            Some(_) => {
                self.lines.remove(&product_id);
                0
            }
            None => 0,
        }
    }

    /// Sets a line's quantity outright. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CoreError> {
        if quantity == 0 {
            self.lines.remove(&product_id);
            return Ok(());
        }
        validate_quantity(quantity)?;
        self.lines.insert(product_id, quantity);
        Ok(())
    }

    /// Drops a line whatever its quantity.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        self.lines.remove(&product_id).is_some()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.lines.get(&product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities (the badge on the cart icon).
    pub fn total_quantity(&self) -> u32 {
        self.lines.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.lines.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Prices the cart against `products`.
    ///
    /// Lines whose product no longer exists are skipped; they contribute
    /// nothing to a total.
    pub fn resolve(&self, products: &[Product]) -> Vec<OrderLine> {
        self.iter()
            .filter_map(|(product_id, quantity)| {
                products
                    .iter()
                    .find(|p| p.id == product_id)
                    .map(|p| OrderLine {
                        product_id,
                        name: p.name.clone(),
                        unit_price: p.price,
                        quantity,
                    })
            })
            .collect()
    }
}

/// A priced cart line for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl TryFrom<&OrderLine> for CartLine {
    type Error = CoreError;

    fn try_from(line: &OrderLine) -> CoreResult<Self> {
        Ok(CartLine {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total()?,
        })
    }
}

/// Cart totals for the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_quantity: u32,
    pub subtotal: Money,
}

impl CartSummary {
    fn from_lines(lines: &[OrderLine]) -> CoreResult<Self> {
        Ok(CartSummary {
            lines: lines.iter().map(CartLine::try_from).collect::<CoreResult<_>>()?,
            total_quantity: lines.iter().map(|l| l.quantity).sum(),
            subtotal: OrderLine::total(lines)?,
        })
    }
}

impl Store {
    /// Adds one unit of a catalog product. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> StoreResult<u32> {
        if self.product(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id).into());
        }
        let quantity = self.cart.increment(product_id)?;
        debug!(product_id = %product_id, quantity, "Added to cart");
        Ok(quantity)
    }

    /// Removes one unit; the line disappears at zero. Absent lines are a
    /// no-op. Returns the remaining quantity.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> u32 {
        let remaining = self.cart.decrement(product_id);
        debug!(product_id = %product_id, remaining, "Removed from cart");
        remaining
    }

    /// Sets a line's quantity. Zero removes it; the product must exist
    /// otherwise.
    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: u32) -> StoreResult<()> {
        if quantity > 0 && self.product(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id).into());
        }
        self.cart.set_quantity(product_id, quantity)?;
        debug!(product_id = %product_id, quantity, "Cart quantity set");
        Ok(())
    }

    /// Prices the cart against the current catalog.
    pub fn cart_summary(&self) -> StoreResult<CartSummary> {
        Ok(CartSummary::from_lines(&self.cart.resolve(&self.products))?)
    }
}
