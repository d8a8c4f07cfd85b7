//! # honeyzest-core: Pure Domain Logic for the HoneyZest Storefront
//!
//! This crate holds the data model of the storefront and every calculation
//! that does not need to own state: money arithmetic, currency conversion,
//! price formatting, translation lookup and input validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HoneyZest Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Views (shop, cart, blog, profile, admin)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads snapshots, calls operations      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  honeyzest-store (Store)                        │   │
//! │  │   auth, cart, orders, catalog, content, notifications           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ honeyzest-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ ┌──────────┐ │   │
//! │  │   │  types  │ │  money  │ │ currency │ │ locale │ │validation│ │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Product, Order, User, Blog, ...)
//! - [`money`] - Money in base-currency minor units (no floating point)
//! - [`currency`] - Display currencies, exchange rates, price formatting
//! - [`locale`] - Languages, themes and translation tables
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use honeyzest_core::currency::{format_price, Currency, StaticRates};
//! use honeyzest_core::Money;
//!
//! let price = Money::from_shillings(800);
//! assert_eq!(format_price(price, Currency::Usd, &StaticRates::default()), "$ 6.08");
//! ```

pub mod currency;
pub mod error;
pub mod locale;
pub mod money;
pub mod types;
pub mod validation;

pub use currency::{Currency, ExchangeRate, RateProvider, StaticRates};
pub use error::{CoreError, CoreResult, ValidationError};
pub use locale::{Language, Theme};
pub use money::Money;
pub use types::*;

/// Maximum quantity of a single product in the cart.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest catalog price: KSh 10,000,000.
///
/// With [`MAX_ITEM_QUANTITY`] this keeps any single line total far inside
/// the `i64` cent range.
pub const MAX_PRICE: Money = Money::from_shillings(10_000_000);

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;
