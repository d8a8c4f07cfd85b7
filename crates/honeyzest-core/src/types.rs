//! # Domain Types
//!
//! Entities held by the storefront store.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  id, name       │   │  ORD-nnnn       │   │  id, email      │       │
//! │  │  price (KES)    │   │  total (frozen) │   │  role           │       │
//! │  │  category       │   │  lines snapshot │   │  admin|member   │       │
//! │  │  reviews ──┐    │   │  status         │   └─────────────────┘       │
//! │  └────────────┼────┘   └─────────────────┘                              │
//! │               ▼                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Review      │   │      Blog       │   │  SiteContent    │       │
//! │  │  uuid id        │   │  comments ──┐   │   │  contact        │       │
//! │  │  rating 1..=5   │   └─────────────┼───┘   │  about          │       │
//! │  └─────────────────┘                 ▼       │  legal (faqs)   │       │
//! │                            ┌─────────────┐   └─────────────────┘       │
//! │                            │   Comment   │                              │
//! │                            │  uuid id    │                              │
//! │                            └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - Catalog, blog, user and notification ids are numeric and allocated by the
//!   store.
//! - Reviews, comments and FAQ entries carry UUID v4 ids so deleting one never
//!   depends on its position in a list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::currency::Currency;
use crate::error::{CoreError, CoreResult};
use crate::locale::{Language, Theme};
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(u64);

        impl $name {
            #[inline]
            pub const fn new(id: u64) -> Self {
                $name(id)
            }

            #[inline]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                $name(Uuid::new_v4())
            }

            pub const fn from_uuid(id: Uuid) -> Self {
                $name(id)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(ProductId);
numeric_id!(UserId);
numeric_id!(BlogId);
numeric_id!(NotificationId);

uuid_id!(ReviewId);
uuid_id!(CommentId);
uuid_id!(FaqId);

/// Order number shown to customers: `ORD-` followed by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OrderId(String);

impl OrderId {
    /// Formats a checkout number as `ORD-nnnn`.
    ///
    /// ```rust
    /// use honeyzest_core::OrderId;
    ///
    /// assert_eq!(OrderId::from_number(1042).as_str(), "ORD-1042");
    /// ```
    pub fn from_number(number: u16) -> Self {
        OrderId(format!("ORD-{number:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Store administrator. Never removable through member deletion.
    #[serde(alias = "Administrator")]
    Admin,
    #[default]
    Member,
}

/// A registered account.
///
/// ## Security
/// The password is kept and compared as plain text, matching the shared
/// secret behaviour the storefront shipped with. This is a known deficiency:
/// credentials should be salted and hashed before this store backs anything
/// real. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: String,
    pub role: Role,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Exact email and password match; no normalisation.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[default]
    Raw,
    Creamed,
    Infused,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Raw, Category::Creamed, Category::Infused];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Raw => "Raw",
            Category::Creamed => "Creamed",
            Category::Infused => "Infused",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownCategory(name.to_string()))
    }
}

/// A shopper's review of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Review {
    pub id: ReviewId,
    /// Display label of the reviewer (free text, not a user reference).
    pub user: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in KES cents (KSh 800 is `80000` on the wire).
    pub price: Money,
    pub description: String,
    /// Image URL.
    pub image: String,
    pub category: Category,
    pub reviews: Vec<Review>,
}

impl Product {
    /// Mean star rating rounded to one decimal, `None` for unreviewed products.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(total) / self.reviews.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
}

impl OrderStatus {
    /// Pending ⇄ Delivered. There are no other states.
    pub const fn toggled(self) -> Self {
        match self {
            OrderStatus::Pending => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Pending,
        }
    }
}

/// One product line of an order.
/// Snapshot of the product at checkout; later catalog edits do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at checkout (frozen).
    pub name: String,
    /// Unit price at checkout (frozen), in KES cents.
    pub unit_price: Money,
    pub quantity: u32,
}

impl OrderLine {
    /// Unit price times quantity. Fails with `AmountOverflow` rather than
    /// wrapping.
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_mul_quantity(self.quantity)
            .ok_or(CoreError::AmountOverflow)
    }

    /// Sum of the line totals of `lines`.
    pub fn total(lines: &[OrderLine]) -> CoreResult<Money> {
        lines.iter().try_fold(Money::zero(), |total, line| {
            total
                .checked_add(line.line_total()?)
                .ok_or(CoreError::AmountOverflow)
        })
    }

    /// `"<name> x <qty>"`, as listed on the order.
    pub fn describe(&self) -> String {
        format!("{} x {}", self.name, self.quantity)
    }
}

/// A placed order.
///
/// ## Invariants
/// - `total` is the sum of the line totals, computed once in
///   [`Order::from_lines`] and never recomputed
/// - Only `status` changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub email: String,
    /// KES cents.
    pub total: Money,
    pub status: OrderStatus,
    /// Lines joined as `"Acacia Gold x 2, Comb Chunk x 1"`.
    pub items: String,
    pub lines: Vec<OrderLine>,
    pub date: NaiveDate,
}

impl Order {
    /// Builds a pending order for `customer`, freezing the total.
    ///
    /// Fails with `AmountOverflow` if the total cannot be represented.
    pub fn from_lines(
        id: OrderId,
        customer: &User,
        lines: Vec<OrderLine>,
        date: NaiveDate,
    ) -> CoreResult<Self> {
        let total = OrderLine::total(&lines)?;
        let items = lines
            .iter()
            .map(OrderLine::describe)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Order {
            id,
            customer: customer.name.clone(),
            email: customer.email.clone(),
            total,
            status: OrderStatus::Pending,
            items,
            lines,
            date,
        })
    }
}

// =============================================================================
// Editorial Content
// =============================================================================

/// A visitor comment on a blog post. No author is captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    pub image: String,
    pub date: NaiveDate,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    /// WhatsApp number in international format without `+`.
    pub whatsapp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AboutInfo {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LegalInfo {
    pub faqs: Vec<Faq>,
    pub privacy: String,
    pub terms: String,
}

/// Site-wide editable records. Each field is replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SiteContent {
    pub contact: ContactInfo,
    pub about: AboutInfo,
    pub legal: LegalInfo,
}

// =============================================================================
// Notifications & Preferences
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Process-wide display preferences. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preferences {
    pub language: Language,
    pub currency: Currency,
    pub theme: Theme,
}
