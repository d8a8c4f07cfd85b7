//! # honeyzest-store: Application State for the HoneyZest Storefront
//!
//! Owns every piece of mutable storefront state and exposes it as typed
//! operations: sign in, fill a cart, check out, moderate the catalog and
//! blog, edit site content, and read the notification feed.
//!
//! ## Module Organization
//! ```text
//! honeyzest_store/
//! ├── lib.rs            ◄─── You are here (exports, tracing setup)
//! ├── store/
//! │   ├── mod.rs        ◄─── Store struct, read access, permission checks
//! │   ├── auth.rs       ◄─── login / register / logout / delete_user
//! │   ├── cart.rs       ◄─── Cart and cart operations
//! │   ├── orders.rs     ◄─── checkout and order status
//! │   ├── catalog.rs    ◄─── products, reviews, search, favorites
//! │   ├── content.rs    ◄─── blogs, comments, site content, FAQ
//! │   ├── notifications.rs
//! │   ├── preferences.rs◄─── currency, language, theme
//! │   ├── ids.rs        ◄─── id allocation
//! │   └── seed.rs       ◄─── starter data
//! ├── shared.rs         ◄─── SharedStore (Arc<Mutex<Store>>)
//! ├── snapshot.rs       ◄─── serializable view of the store
//! ├── config.rs         ◄─── StoreConfig from HONEYZEST_* variables
//! └── error.rs          ◄─── StoreError, ErrorReport
//! ```
//!
//! ## Example
//! ```rust
//! use honeyzest_store::Store;
//! use honeyzest_core::ProductId;
//!
//! let mut store = Store::seeded();
//! store.login("john@gmail.com", "123")?;
//! store.add_to_cart(ProductId::new(1))?;
//! let order = store.place_order()?;
//! assert_eq!(store.orders()[0].id, order.id);
//! # Ok::<(), honeyzest_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
mod shared;
mod snapshot;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::{ErrorCode, ErrorReport, StoreError, StoreResult};
pub use shared::SharedStore;
pub use snapshot::{ProductView, StoreSnapshot};
pub use store::{
    BlogDraft, Cart, CartLine, CartSummary, ProductDraft, ReviewDraft, SiteContentUpdate, Store,
};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=honeyzest_store=trace` - Trace the store only
/// - Default: `info`, with `debug` for the honeyzest crates
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,honeyzest=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
