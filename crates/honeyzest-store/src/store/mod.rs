//! # Store
//!
//! The single in-memory authority for a storefront session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │   users ── session ───────────┐        products ── reviews             │
//! │                               │            ▲                            │
//! │   cart (id → qty) ────────────┼── place_order ──► orders (newest first)│
//! │   favorites                   │                                         │
//! │                               ▼                                         │
//! │   notifications (newest first)          blogs ── comments              │
//! │                                                                         │
//! │   content (contact, about, legal)       preferences + RateProvider     │
//! │                                                                         │
//! │   auth.rs  cart.rs  orders.rs  catalog.rs  content.rs                  │
//! │   notifications.rs  preferences.rs   ◄── one `impl Store` each         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! Every operation validates and looks up before it mutates, so an `Err`
//! leaves the store exactly as it was. Operations take `&mut self`; sharing a
//! store across threads goes through [`crate::SharedStore`], which serialises
//! them.
//!
//! ## Permissions
//! Admin-only operations check the session role themselves. Callers hiding a
//! button is not what keeps an admin account from being deleted.

mod auth;
mod cart;
mod catalog;
mod content;
mod ids;
mod notifications;
mod orders;
mod preferences;
mod seed;

pub use cart::{Cart, CartLine, CartSummary};
pub use catalog::{ProductDraft, ReviewDraft};
pub use content::{BlogDraft, SiteContentUpdate};

use std::fmt;

use chrono::{NaiveDate, Utc};
use honeyzest_core::{
    Blog, BlogId, Notification, Order, Preferences, Product, ProductId, RateProvider,
    SiteContent, StaticRates, User, UserId,
};
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use ids::IdAllocator;

pub struct Store {
    users: Vec<User>,
    session: Option<UserId>,
    products: Vec<Product>,
    cart: Cart,
    favorites: Vec<ProductId>,
    orders: Vec<Order>,
    blogs: Vec<Blog>,
    notifications: Vec<Notification>,
    content: SiteContent,
    preferences: Preferences,
    rates: Box<dyn RateProvider>,
    ids: IdAllocator,
}

impl Store {
    /// Creates an empty store: no accounts, no catalog, default preferences.
    pub fn empty() -> Self {
        Store {
            users: Vec::new(),
            session: None,
            products: Vec::new(),
            cart: Cart::new(),
            favorites: Vec::new(),
            orders: Vec::new(),
            blogs: Vec::new(),
            notifications: Vec::new(),
            content: SiteContent::default(),
            preferences: Preferences::default(),
            rates: Box::new(StaticRates::default()),
            ids: IdAllocator::default(),
        }
    }

    /// Creates a store with the starter catalog, accounts and content.
    pub fn seeded() -> Self {
        let mut store = Store::empty();
        store.seed();
        store
    }

    /// Creates a store from startup configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut store = if config.seed {
            Store::seeded()
        } else {
            Store::empty()
        };
        store.preferences = Preferences {
            language: config.language,
            currency: config.currency,
            theme: config.theme,
        };
        store.rates = Box::new(config.rates);

        info!(
            seeded = config.seed,
            currency = %config.currency,
            language = %config.language,
            "Store initialized"
        );
        store
    }

    /// Replaces the exchange rate source used by [`Store::format_price`].
    pub fn with_rate_provider(mut self, rates: Box<dyn RateProvider>) -> Self {
        self.rates = rates;
        self
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Favorite product ids in the order they were pinned.
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Blog posts in chronological order of publication.
    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn blog(&self, id: BlogId) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Notification feed, most recent first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    // -------------------------------------------------------------------------
    // Shared helpers
    // -------------------------------------------------------------------------

    fn require_user(&self) -> StoreResult<&User> {
        self.current_user().ok_or(StoreError::NotAuthenticated)
    }

    /// Precondition of every admin-only operation.
    fn require_admin(&self, action: &'static str) -> StoreResult<&User> {
        let user = self.require_user()?;
        if !user.is_admin() {
            warn!(user_id = %user.id, action, "Admin operation denied");
            return Err(StoreError::Forbidden { action });
        }
        Ok(user)
    }

    fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::seeded()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("users", &self.users.len())
            .field("session", &self.session)
            .field("products", &self.products.len())
            .field("cart", &self.cart)
            .field("orders", &self.orders.len())
            .field("blogs", &self.blogs.len())
            .field("notifications", &self.notifications.len())
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}
