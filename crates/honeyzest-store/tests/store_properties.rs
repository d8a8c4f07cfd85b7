//! End-to-end behaviour of the storefront store through its public API.

use honeyzest_core::{Category, Currency, Language, Money, OrderId, OrderStatus, ProductId};
use honeyzest_store::{ErrorCode, ErrorReport, ProductDraft, Store, StoreError};

fn store_with_single_product() -> Store {
    let mut store = Store::seeded();
    store.login("admin@honeyzest.com", "123").unwrap();

    for id in [2, 3] {
        store.delete_product(ProductId::new(id)).unwrap();
    }
    let draft = ProductDraft {
        id: Some(ProductId::new(1)),
        name: "Acacia Gold".to_string(),
        price: Money::from_shillings(800),
        description: String::new(),
        image: String::new(),
        category: Category::Raw,
        reviews: None,
    };
    store.save_product(draft).unwrap();
    store
}

#[test]
fn test_cart_quantities_stay_positive() {
    let mut store = Store::seeded();
    let ids = [ProductId::new(1), ProductId::new(2), ProductId::new(3)];

    // pseudo-random but reproducible op sequence
    let mut seed: u64 = 0x5eed;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let id = ids[(seed >> 33) as usize % ids.len()];
        if (seed >> 17) & 1 == 0 {
            store.add_to_cart(id).unwrap();
        } else {
            store.remove_from_cart(id);
        }
        assert!(store.cart().iter().all(|(_, qty)| qty >= 1));
    }

    for id in ids {
        while store.cart().quantity(id) > 0 {
            store.remove_from_cart(id);
        }
        assert_eq!(store.remove_from_cart(id), 0);
    }
    assert!(store.cart().is_empty());
}

#[test]
fn test_checkout_without_session_changes_nothing() {
    let mut store = Store::seeded();
    store.add_to_cart(ProductId::new(1)).unwrap();
    let orders = store.orders().to_vec();
    let cart = store.cart().clone();

    let err = store.place_order().unwrap_err();
    assert!(matches!(err, StoreError::NotAuthenticated));
    assert_eq!(ErrorReport::from(&err).code, ErrorCode::Unauthenticated);
    assert_eq!(store.orders(), orders.as_slice());
    assert_eq!(store.cart(), &cart);
}

#[test]
fn test_checkout_of_unknown_products_fails() {
    let mut store = Store::seeded();
    store.login("admin@honeyzest.com", "123").unwrap();
    store.add_to_cart(ProductId::new(3)).unwrap();
    store.delete_product(ProductId::new(3)).unwrap();
    let count = store.orders().len();

    assert!(matches!(store.place_order(), Err(StoreError::EmptyCart)));
    assert_eq!(store.orders().len(), count);
}

#[test]
fn test_checkout_total_is_frozen() {
    let mut store = store_with_single_product();
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(1)).unwrap();

    let order = store.place_order().unwrap();
    assert_eq!(order.total, Money::from_shillings(1600));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(store.cart().is_empty());
    assert_eq!(store.orders()[0].id, order.id);
}

#[test]
fn test_login_success_and_failure() {
    let mut store = Store::seeded();
    let admin = store.login("admin@honeyzest.com", "123").unwrap().id;
    assert_eq!(store.current_user().map(|u| u.id), Some(admin));

    assert!(matches!(
        store.login("admin@honeyzest.com", "wrong"),
        Err(StoreError::InvalidCredentials)
    ));
    assert_eq!(store.current_user().map(|u| u.id), Some(admin));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut store = Store::seeded();
    let users = store.users().len();

    assert!(store.register("Admin Again", "admin@honeyzest.com", "pw").is_err());
    assert_eq!(store.users().len(), users);
}

#[test]
fn test_usd_price_formatting() {
    let mut store = Store::seeded();
    store.set_currency(Currency::Usd);
    assert_eq!(store.format_price(Money::from_shillings(800)), "$ 6.08");
}

#[test]
fn test_admin_accounts_cannot_be_deleted() {
    let mut store = Store::seeded();
    store.login("admin@honeyzest.com", "123").unwrap();
    let admins: Vec<_> = store
        .users()
        .iter()
        .filter(|u| u.is_admin())
        .map(|u| u.id)
        .collect();

    for id in &admins {
        assert!(matches!(
            store.delete_user(*id),
            Err(StoreError::AdminProtected(_))
        ));
    }
    assert_eq!(store.users().iter().filter(|u| u.is_admin()).count(), admins.len());

    // a member session can never reach an admin account either
    store.logout();
    store.login("john@gmail.com", "123").unwrap();
    assert!(store.delete_user(admins[0]).is_err());
    assert!(store.users().iter().any(|u| u.id == admins[0]));
}

#[test]
fn test_translation_lookup() {
    let mut store = Store::seeded();
    store.set_language(Language::Sw);
    assert_eq!(store.t("shop"), "Duka");

    for language in Language::ALL {
        store.set_language(language);
        assert_eq!(store.t("nonexistent_key"), "nonexistent_key");
    }
}

#[test]
fn test_delivered_order_round_trip() {
    let mut store = Store::seeded();
    store.login("admin@honeyzest.com", "123").unwrap();
    let id = OrderId::from("ORD-002");

    store.toggle_order_status(&id).unwrap();
    store.toggle_order_status(&id).unwrap();
    assert_eq!(store.order(&id).unwrap().status, OrderStatus::Delivered);
}

#[test]
fn test_shopping_session_end_to_end() {
    let mut store = Store::seeded();
    store.register("Grace W.", "grace@gmail.com", "secret").unwrap();

    store.add_to_cart(ProductId::new(2)).unwrap();
    store.set_cart_quantity(ProductId::new(3), 2).unwrap();
    store.toggle_favorite(ProductId::new(1)).unwrap();
    assert_eq!(store.cart_summary().unwrap().subtotal, Money::from_shillings(1200 + 3000));

    let order = store.place_order().unwrap();
    assert_eq!(order.items, "Highland Cream x 1, Comb Chunk x 2");
    assert_eq!(store.orders_for("grace@gmail.com").len(), 1);

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.orders.len(), 1);
    assert_eq!(snapshot.favorites, vec![ProductId::new(1)]);

    store.logout();
    assert!(store.favorites().is_empty());
    assert!(store.snapshot().unwrap().orders.is_empty());
}
