//! # Display Preferences
//!
//! Currency, language and theme, and the two lookups views render with:
//! [`Store::format_price`] and [`Store::t`].

use honeyzest_core::currency::format_price;
use honeyzest_core::locale::translate;
use honeyzest_core::{Currency, Language, Money, Theme};
use tracing::debug;

use super::Store;

impl Store {
    pub fn set_currency(&mut self, currency: Currency) {
        self.preferences.currency = currency;
        debug!(currency = %currency, "Display currency changed");
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.language = language;
        debug!(language = %language, "Language changed");
    }

    /// Light ⇄ dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.theme = self.preferences.theme.toggled();
        debug!(theme = ?self.preferences.theme, "Theme toggled");
        self.preferences.theme
    }

    /// Formats a KES amount in the selected display currency.
    pub fn format_price(&self, amount: Money) -> String {
        format_price(amount, self.preferences.currency, self.rates.as_ref())
    }

    /// Translates a chrome label into the selected language, falling back to
    /// the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.preferences.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyzest_core::{ExchangeRate, StaticRates};

    #[test]
    fn test_format_price_follows_currency() {
        let mut store = Store::seeded();
        let price = Money::from_shillings(800);
        assert_eq!(store.format_price(price), "KSh 800");

        store.set_currency(Currency::Usd);
        assert_eq!(store.format_price(price), "$ 6.08");

        store.set_currency(Currency::Gbp);
        assert_eq!(store.format_price(Money::from_shillings(1500)), "£ 9");
    }

    #[test]
    fn test_custom_rate_provider() {
        let rates = StaticRates::default().with_rate(Currency::Usd, ExchangeRate::from_micros(10_000));
        let mut store = Store::seeded().with_rate_provider(Box::new(rates));
        store.set_currency(Currency::Usd);
        assert_eq!(store.format_price(Money::from_shillings(1500)), "$ 15");
    }

    #[test]
    fn test_translation_follows_language() {
        let mut store = Store::seeded();
        assert_eq!(store.t("shop"), "Shop");

        store.set_language(Language::Sw);
        assert_eq!(store.t("shop"), "Duka");
        assert_eq!(store.t("missingKey"), "missingKey");
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = Store::empty();
        assert_eq!(store.preferences().theme, Theme::Light);
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.toggle_theme(), Theme::Light);
    }
}
