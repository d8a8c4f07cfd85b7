//! # Currency Module
//!
//! Display currencies, exchange rates and price formatting.
//!
//! ## Conversion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Product.price (KES cents) ──► × rate (RateProvider) ──► round 2dp     │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                            "<symbol> <grouped digits>"  e.g. "$ 6.08"  │
//! │                                                                         │
//! │  KES is the storage unit. Every page formats through the same          │
//! │  provider, so one currency switch changes the whole UI consistently.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rates are fixed configuration, not fetched. A live feed would be another
//! [`RateProvider`] implementation handed to the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// Currencies a shopper can display prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    /// Kenyan shilling, the base currency prices are stored in.
    #[default]
    Kes,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Kes, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Kes => "KES",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Symbol shown before a formatted amount.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Kes => "KSh",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Units of a display currency per one KES, in millionths.
///
/// 0.0076 USD/KES is stored as `7_600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate(u32);

impl ExchangeRate {
    /// Fixed-point scale of a rate.
    pub const SCALE: u32 = 1_000_000;

    /// The identity rate (KES → KES).
    pub const ONE: ExchangeRate = ExchangeRate(Self::SCALE);

    #[inline]
    pub const fn from_micros(micros: u32) -> Self {
        ExchangeRate(micros)
    }

    #[inline]
    pub const fn micros(&self) -> u32 {
        self.0
    }

    /// Parses a decimal rate such as `"0.0076"` without going through floats.
    ///
    /// ## Rules
    /// - Digits with at most one decimal point
    /// - At most 6 fractional digits
    /// - Must be positive
    ///
    /// ```rust
    /// use honeyzest_core::currency::ExchangeRate;
    ///
    /// assert_eq!(ExchangeRate::parse_decimal("0.0076").unwrap().micros(), 7_600);
    /// assert!(ExchangeRate::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "exchange rate".to_string(),
            reason: reason.to_string(),
        };

        let (whole, frac) = input.split_once('.').unwrap_or((input, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a decimal number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must be a decimal number"));
        }
        if frac.len() > 6 {
            return Err(invalid("at most 6 decimal places"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("too large"))?
        };
        let frac_micros: u64 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<6}");
            padded.parse().map_err(|_| invalid("must be a decimal number"))?
        };

        let micros = whole
            .checked_mul(Self::SCALE as u64)
            .and_then(|w| w.checked_add(frac_micros))
            .filter(|m| *m <= u32::MAX as u64)
            .ok_or_else(|| invalid("too large"))?;

        if micros == 0 {
            return Err(ValidationError::MustBePositive {
                field: "exchange rate".to_string(),
            });
        }

        Ok(ExchangeRate(micros as u32))
    }
}

// =============================================================================
// Rate Providers
// =============================================================================

/// Source of exchange rates for price formatting.
pub trait RateProvider: Send + Sync {
    /// Rate from KES to `currency`. KES itself is always [`ExchangeRate::ONE`].
    fn rate(&self, currency: Currency) -> ExchangeRate;
}

/// The fixed rate table the storefront ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRates {
    pub usd: ExchangeRate,
    pub eur: ExchangeRate,
    pub gbp: ExchangeRate,
}

impl Default for StaticRates {
    fn default() -> Self {
        StaticRates {
            usd: ExchangeRate::from_micros(7_600),
            eur: ExchangeRate::from_micros(7_000),
            gbp: ExchangeRate::from_micros(6_000),
        }
    }
}

impl StaticRates {
    /// Returns a copy with one rate replaced. KES cannot be overridden.
    pub fn with_rate(mut self, currency: Currency, rate: ExchangeRate) -> Self {
        match currency {
            Currency::Kes => {}
            Currency::Usd => self.usd = rate,
            Currency::Eur => self.eur = rate,
            Currency::Gbp => self.gbp = rate,
        }
        self
    }
}

impl RateProvider for StaticRates {
    fn rate(&self, currency: Currency) -> ExchangeRate {
        match currency {
            Currency::Kes => ExchangeRate::ONE,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Gbp => self.gbp,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a base-currency amount for display in `currency`.
///
/// ## Format
/// `"<symbol> <amount>"` where the amount is rounded to 2 decimals, grouped
/// by thousands with commas, and printed without trailing zero decimals.
///
/// ```rust
/// use honeyzest_core::currency::{format_price, Currency, StaticRates};
/// use honeyzest_core::Money;
///
/// let rates = StaticRates::default();
/// assert_eq!(format_price(Money::from_shillings(800), Currency::Usd, &rates), "$ 6.08");
/// assert_eq!(format_price(Money::from_shillings(1500), Currency::Kes, &rates), "KSh 1,500");
/// assert_eq!(format_price(Money::from_shillings(1200), Currency::Eur, &rates), "€ 8.4");
/// ```
pub fn format_price(amount: Money, currency: Currency, rates: &dyn RateProvider) -> String {
    let minor = amount.convert(rates.rate(currency));
    format!("{} {}", currency.symbol(), format_minor_units(minor))
}

/// Renders minor units as a grouped decimal with trailing zeros trimmed.
fn format_minor_units(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let frac = abs % 100;

    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
