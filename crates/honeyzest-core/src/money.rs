//! # Money Module
//!
//! Provides the `Money` type for monetary values in the base currency (KES).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer cents of a shilling                             │
//! │    KSh 800.00 is stored as 80_000                                      │
//! │    Order totals are sums of integers and never drift                   │
//! │                                                                         │
//! │  Conversion to a display currency happens once, at format time        │
//! │  (see `currency::format_price`).                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use honeyzest_core::money::Money;
//!
//! let price = Money::from_shillings(800);
//! let line_total = price.checked_mul_quantity(2);
//! assert_eq!(line_total, Some(Money::from_shillings(1600)));
//! ```
//!
//! Totals are built with checked arithmetic only; an amount that leaves the
//! `i64` range comes back as `None` instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::currency::ExchangeRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents of the base currency (Kenyan shilling).
///
/// ## Design Decisions
/// - **i64 (signed)**: a single field tuple struct over the cent count
/// - Every price in the catalog and every order total is a `Money`
///
/// ## Wire Format
/// Serialized as a bare integer count of KES **cents**: KSh 800 is `80000`.
/// Views divide by 100 before showing shillings, or go through
/// `currency::format_price`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents of a shilling.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole shillings.
    ///
    /// ```rust
    /// use honeyzest_core::money::Money;
    ///
    /// assert_eq!(Money::from_shillings(1200).cents(), 120_000);
    /// ```
    #[inline]
    pub const fn from_shillings(shillings: i64) -> Self {
        Money(shillings * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-shilling portion.
    #[inline]
    pub const fn shillings(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a cart quantity, `None` on overflow.
    #[inline]
    pub const fn checked_mul_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Converts to minor units of another currency.
    ///
    /// ## Rounding
    /// Half away from zero at the second decimal, which is what a
    /// storefront shows for `amount × rate` rounded to 2 places.
    /// Integer math on i128 so large totals cannot overflow.
    ///
    /// ```rust
    /// use honeyzest_core::currency::ExchangeRate;
    /// use honeyzest_core::money::Money;
    ///
    /// // KSh 800 at 0.0076 USD/KES = $6.08
    /// let usd = Money::from_shillings(800).convert(ExchangeRate::from_micros(7_600));
    /// assert_eq!(usd, 608);
    /// ```
    pub fn convert(&self, rate: ExchangeRate) -> i64 {
        let scaled = self.0 as i128 * rate.micros() as i128;
        let half = ExchangeRate::SCALE as i128 / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / ExchangeRate::SCALE as i128
        } else {
            (scaled - half) / ExchangeRate::SCALE as i128
        };
        rounded as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering in the base currency. Views use
/// `currency::format_price` instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}KES {}.{:02}",
            sign,
            self.shillings().abs(),
            self.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shillings() {
        let money = Money::from_shillings(1500);
        assert_eq!(money.cents(), 150_000);
        assert_eq!(money.shillings(), 1500);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_shillings(800).to_string(), "KES 800.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-KES 5.50");
        assert_eq!(Money::zero().to_string(), "KES 0.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_shillings(1000);
        let b = Money::from_shillings(500);

        assert_eq!(a.checked_add(b), Some(Money::from_shillings(1500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_shillings(3000)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_mul_quantity(2), None);
    }

    #[test]
    fn test_convert_rounds_half_away_from_zero() {
        // 1 cent at 0.5 = 0.5 minor units → 1
        assert_eq!(Money::from_cents(1).convert(ExchangeRate::from_micros(500_000)), 1);
        assert_eq!(Money::from_cents(-1).convert(ExchangeRate::from_micros(500_000)), -1);
        // KSh 1200 at 0.0070 EUR/KES = €8.40
        assert_eq!(
            Money::from_shillings(1200).convert(ExchangeRate::from_micros(7_000)),
            840
        );
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::from_cents(-1).is_positive());
    }
}
