//! # Store Configuration
//!
//! Startup settings for a store instance.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HONEYZEST_*`)
//! 2. Defaults (this file)
//!
//! Read once at startup; the store copies what it needs.

use honeyzest_core::{Currency, ExchangeRate, Language, StaticRates, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors. Carries the offending key and raw value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub language: Language,
    pub currency: Currency,
    pub theme: Theme,

    /// Populate the store with the starter catalog, accounts and content.
    pub seed: bool,

    /// Exchange rates used for price formatting.
    pub rates: StaticRates,
}

impl Default for StoreConfig {
    /// English, KES, light theme, seeded, shipped rate table.
    fn default() -> Self {
        StoreConfig {
            language: Language::En,
            currency: Currency::Kes,
            theme: Theme::Light,
            seed: true,
            rates: StaticRates::default(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `HONEYZEST_LANGUAGE`: `en` | `sw` | `fr`
    /// - `HONEYZEST_CURRENCY`: `KES` | `USD` | `EUR` | `GBP`
    /// - `HONEYZEST_THEME`: `light` | `dark`
    /// - `HONEYZEST_SEED`: `true` | `false`
    /// - `HONEYZEST_RATE_USD` / `_EUR` / `_GBP`: decimal units per KES
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(value) = lookup("HONEYZEST_LANGUAGE") {
            config.language = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HONEYZEST_LANGUAGE",
                value,
            })?;
        }

        if let Some(value) = lookup("HONEYZEST_CURRENCY") {
            config.currency = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HONEYZEST_CURRENCY",
                value,
            })?;
        }

        if let Some(value) = lookup("HONEYZEST_THEME") {
            config.theme = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HONEYZEST_THEME",
                value,
            })?;
        }

        if let Some(value) = lookup("HONEYZEST_SEED") {
            config.seed = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "HONEYZEST_SEED",
                value,
            })?;
        }

        for (key, currency) in [
            ("HONEYZEST_RATE_USD", Currency::Usd),
            ("HONEYZEST_RATE_EUR", Currency::Eur),
            ("HONEYZEST_RATE_GBP", Currency::Gbp),
        ] {
            if let Some(value) = lookup(key) {
                let rate = ExchangeRate::parse_decimal(&value)
                    .map_err(|_| ConfigError::InvalidValue { key, value })?;
                config.rates = config.rates.with_rate(currency, rate);
            }
        }

        Ok(config)
    }
}
