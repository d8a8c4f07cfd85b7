//! # Locale Module
//!
//! Interface languages, the light/dark theme preference, and the translation
//! tables for storefront chrome (navigation labels, hero copy, buttons).
//!
//! Lookups never fail: a key missing from the active language comes back
//! unchanged, so a view renders the key itself rather than breaking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Language
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Kiswahili
    Sw,
    /// French
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Sw, Language::Fr];

    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sw => "sw",
            Language::Fr => "fr",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Sw => SW,
            Language::Fr => FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))
    }
}

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

// =============================================================================
// Translation
// =============================================================================

/// Looks up `key` in the language's table.
///
/// ```rust
/// use honeyzest_core::locale::{translate, Language};
///
/// assert_eq!(translate(Language::Sw, "shop"), "Duka");
/// assert_eq!(translate(Language::Fr, "nonexistent_key"), "nonexistent_key");
/// ```
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    language
        .table()
        .iter()
        .find(|(k, v)| *k == key && !v.is_empty())
        .map_or(key, |(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("shop", "Shop"),
    ("blog", "Blog"),
    ("contact", "Contact"),
    ("welcome", "Pure. Natural. Golden."),
    ("subtitle", "Premium organic honey from the heart of Eldoret."),
    ("addToCart", "Add to Cart"),
    ("search", "Search products..."),
    ("login", "Login"),
    ("signup", "Sign Up"),
    ("admin", "Admin"),
];

const SW: &[(&str, &str)] = &[
    ("home", "Nyumbani"),
    ("shop", "Duka"),
    ("blog", "Blogu"),
    ("contact", "Wasiliana"),
    ("welcome", "Safi. Asilia. Dhahabu."),
    ("subtitle", "Asali bora ya kienyeji kutoka nyanda za juu za Eldoret."),
    ("addToCart", "Weka Kikapuni"),
    ("search", "Tafuta bidhaa..."),
    ("login", "Ingia"),
    ("signup", "Jisajili"),
    ("admin", "Admin"),
];

const FR: &[(&str, &str)] = &[
    ("home", "Accueil"),
    ("shop", "Boutique"),
    ("blog", "Blog"),
    ("contact", "Contact"),
    ("welcome", "Pur. Naturel. Doré."),
    ("subtitle", "Miel biologique premium du cœur d'Eldoret."),
    ("addToCart", "Ajouter au panier"),
    ("search", "Rechercher..."),
    ("login", "Connexion"),
    ("signup", "S'inscrire"),
    ("admin", "Admin"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_keys() {
        assert_eq!(translate(Language::En, "shop"), "Shop");
        assert_eq!(translate(Language::Sw, "shop"), "Duka");
        assert_eq!(translate(Language::Fr, "addToCart"), "Ajouter au panier");
    }

    #[test]
    fn test_translate_missing_key_falls_back() {
        for language in Language::ALL {
            assert_eq!(translate(language, "nonexistent_key"), "nonexistent_key");
        }
    }

    #[test]
    fn test_tables_share_keys() {
        let keys = |lang: Language| lang.table().iter().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(keys(Language::En), keys(Language::Sw));
        assert_eq!(keys(Language::En), keys(Language::Fr));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("sw".parse::<Language>().unwrap(), Language::Sw);
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    }
}
