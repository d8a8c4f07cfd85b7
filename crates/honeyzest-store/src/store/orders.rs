//! # Orders
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order()                                                          │
//! │       │                                                                 │
//! │       ├── no session? ─────────────────► NotAuthenticated              │
//! │       │                                                                 │
//! │       ├── price cart against catalog (unknown ids skipped)             │
//! │       │        │                                                        │
//! │       │        ├── total is zero? ─────► EmptyCart                     │
//! │       │        └── total overflows? ───► AmountOverflow                │
//! │       │                                                                 │
//! │       ├── pick next free ORD-nnnn ─────► OrderIdsExhausted             │
//! │       │                                                                 │
//! │       ▼          (nothing has changed up to here)                       │
//! │  prepend order ──► commit order number ──► clear cart ──► notify       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order Status
//! Pending ⇄ Delivered, toggled by an admin. No other states.

use honeyzest_core::{CoreError, Order, OrderId, OrderLine, OrderStatus};
use tracing::info;

use super::Store;
use crate::error::{StoreError, StoreResult};

impl Store {
    /// Turns the cart into an order for the signed-in user.
    ///
    /// The total is computed here from current catalog prices and frozen on
    /// the order. Returns a copy of the new order.
    pub fn place_order(&mut self) -> StoreResult<Order> {
        let customer = self.require_user()?.clone();

        let lines: Vec<OrderLine> = self.cart.resolve(&self.products);
        let total = OrderLine::total(&lines)?;
        if total.is_zero() {
            return Err(StoreError::EmptyCart);
        }

        let (number, order_id) = self.ids.peek_order(&self.orders)?;
        let order = Order::from_lines(order_id, &customer, lines, Store::today())?;

        self.orders.insert(0, order.clone());
        self.ids.commit_order(number);
        self.cart.clear();
        self.add_notification(format!("Order #{} placed successfully!", order.id));

        info!(
            order_id = %order.id,
            user_id = %customer.id,
            total = %order.total,
            items = %order.items,
            "Order placed"
        );
        Ok(order)
    }

    /// Flips an order between Pending and Delivered. Admin only.
    /// Returns the new status.
    pub fn toggle_order_status(&mut self, order_id: &OrderId) -> StoreResult<OrderStatus> {
        self.require_admin("update orders")?;

        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.clone()))?;

        order.status = order.status.toggled();
        info!(order_id = %order_id, status = ?order.status, "Order status changed");
        Ok(order.status)
    }

    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    /// Orders placed under `email`, most recent first.
    pub fn orders_for(&self, email: &str) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.email == email).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyzest_core::{Money, ProductId, ValidationError, MAX_ITEM_QUANTITY, MAX_PRICE};

    fn price_draft(id: u64, price: Money) -> crate::store::ProductDraft {
        crate::store::ProductDraft {
            id: Some(ProductId::new(id)),
            name: "Acacia Gold".to_string(),
            price,
            description: String::new(),
            image: String::new(),
            category: honeyzest_core::Category::Raw,
            reviews: None,
        }
    }

    #[test]
    fn test_place_order_requires_session() {
        let mut store = Store::seeded();
        store.add_to_cart(ProductId::new(1)).unwrap();
        let orders_before = store.orders().to_vec();

        assert!(matches!(store.place_order(), Err(StoreError::NotAuthenticated)));
        assert_eq!(store.orders(), orders_before.as_slice());
        assert_eq!(store.cart().quantity(ProductId::new(1)), 1);
    }

    #[test]
    fn test_place_order_with_empty_cart_fails() {
        let mut store = Store::seeded();
        store.login("john@gmail.com", "123").unwrap();
        let count = store.orders().len();

        assert!(matches!(store.place_order(), Err(StoreError::EmptyCart)));
        assert_eq!(store.orders().len(), count);
    }

    #[test]
    fn test_place_order_freezes_total_and_clears_cart() {
        let mut store = Store::seeded();
        store.login("john@gmail.com", "123").unwrap();
        store.add_to_cart(ProductId::new(3)).unwrap();
        store.add_to_cart(ProductId::new(1)).unwrap();
        store.add_to_cart(ProductId::new(1)).unwrap();

        let order = store.place_order().unwrap();
        assert_eq!(order.total, Money::from_shillings(800 * 2 + 1500));
        assert_eq!(order.items, "Acacia Gold x 2, Comb Chunk x 1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer, "John Doe");
        assert!(order.id.as_str().starts_with("ORD-"));
        assert_eq!(order.id.as_str().len(), 8);

        assert_eq!(store.orders()[0], order);
        assert!(store.cart().is_empty());
        assert_eq!(
            store.notifications()[0].message,
            format!("Order #{} placed successfully!", order.id)
        );
    }

    #[test]
    fn test_order_total_survives_price_change() {
        let mut store = Store::seeded();
        store.login("admin@honeyzest.com", "123").unwrap();
        store.add_to_cart(ProductId::new(1)).unwrap();
        let order = store.place_order().unwrap();

        let mut draft = crate::store::ProductDraft {
            id: Some(ProductId::new(1)),
            name: "Acacia Gold".to_string(),
            price: Money::from_shillings(5000),
            description: String::new(),
            image: String::new(),
            category: honeyzest_core::Category::Raw,
            reviews: None,
        };
        store.save_product(draft.clone()).unwrap();
        draft.price = Money::from_shillings(10);
        store.save_product(draft).unwrap();

        assert_eq!(store.order(&order.id).unwrap().total, Money::from_shillings(800));
    }

    #[test]
    fn test_huge_prices_never_reach_checkout() {
        let mut store = Store::seeded();
        store.login("admin@honeyzest.com", "123").unwrap();

        let err = store
            .save_product(price_draft(1, Money::from_cents(i64::MAX / 2 + 1)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(store.product(ProductId::new(1)).unwrap().price, Money::from_shillings(800));

        // the largest cart the store accepts still totals without overflow
        for id in 1..=3 {
            store.save_product(price_draft(id, MAX_PRICE)).unwrap();
            store.set_cart_quantity(ProductId::new(id), MAX_ITEM_QUANTITY).unwrap();
        }
        let order = store.place_order().unwrap();
        assert_eq!(
            order.total,
            Money::from_cents(MAX_PRICE.cents() * i64::from(MAX_ITEM_QUANTITY) * 3)
        );
    }

    #[test]
    fn test_order_ids_are_unique() {
        let mut store = Store::seeded();
        store.login("sarah@gmail.com", "123").unwrap();

        let mut ids = Vec::new();
        for _ in 0..20 {
            store.add_to_cart(ProductId::new(2)).unwrap();
            ids.push(store.place_order().unwrap().id);
        }
        let mut deduped = ids.clone();
        deduped.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_toggle_order_status_round_trip() {
        let mut store = Store::seeded();
        store.login("admin@honeyzest.com", "123").unwrap();
        let delivered = OrderId::from("ORD-002");
        assert_eq!(store.order(&delivered).unwrap().status, OrderStatus::Delivered);

        assert_eq!(store.toggle_order_status(&delivered).unwrap(), OrderStatus::Pending);
        assert_eq!(store.toggle_order_status(&delivered).unwrap(), OrderStatus::Delivered);
        assert_eq!(store.order(&delivered).unwrap().total, Money::from_shillings(1200));

        assert!(store.toggle_order_status(&OrderId::from("ORD-404")).is_err());
    }

    #[test]
    fn test_toggle_order_status_requires_admin() {
        let mut store = Store::seeded();
        store.login("john@gmail.com", "123").unwrap();
        assert!(matches!(
            store.toggle_order_status(&OrderId::from("ORD-001")),
            Err(StoreError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_orders_for_customer() {
        let store = Store::seeded();
        let johns = store.orders_for("john@gmail.com");
        assert_eq!(johns.len(), 1);
        assert_eq!(johns[0].items, "Acacia Gold x 3");
    }
}
