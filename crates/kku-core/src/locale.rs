//! Supported locales and request-time locale resolution.
//!
//! The locale is a value threaded through rendering explicitly: handlers
//! resolve it once per request and hand it (or a [`LocaleContext`]) down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GatewayError;

/// A supported site locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
    Id,
    Vi,
    Ru,
    Uz,
    Tl,
    Th,
    Ms,
    Kk,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 10] = [
        Locale::Ko,
        Locale::En,
        Locale::Id,
        Locale::Vi,
        Locale::Ru,
        Locale::Uz,
        Locale::Tl,
        Locale::Th,
        Locale::Ms,
        Locale::Kk,
    ];

    /// Locale used whenever the requested one is absent or unsupported.
    pub const DEFAULT: Locale = Locale::Ko;

    /// The two-letter code used in `?lang=` and storage.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::Id => "id",
            Self::Vi => "vi",
            Self::Ru => "ru",
            Self::Uz => "uz",
            Self::Tl => "tl",
            Self::Th => "th",
            Self::Ms => "ms",
            Self::Kk => "kk",
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
            Self::Id => "Bahasa Indonesia",
            Self::Vi => "Tiếng Việt",
            Self::Ru => "Русский",
            Self::Uz => "O\u{02bb}zbekcha",
            Self::Tl => "Tagalog",
            Self::Th => "ไทย",
            Self::Ms => "Bahasa Melayu",
            Self::Kk => "Қазақша",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::Ko => "🇰🇷",
            Self::En => "🇬🇧",
            Self::Id => "🇮🇩",
            Self::Vi => "🇻🇳",
            Self::Ru => "🇷🇺",
            Self::Uz => "🇺🇿",
            Self::Tl => "🇵🇭",
            Self::Th => "🇹🇭",
            Self::Ms => "🇲🇾",
            Self::Kk => "🇰🇿",
        }
    }

    /// Exact code match, `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| GatewayError::InvalidInput(format!("unsupported locale: {s}")))
    }
}

/// Resolve a requested code to a supported locale.
///
/// Total: unknown, empty, or differently-cased codes yield [`Locale::DEFAULT`].
pub fn resolve(requested: Option<&str>) -> Locale {
    requested
        .and_then(Locale::from_code)
        .unwrap_or(Locale::DEFAULT)
}

/// Resolve with a persisted preference as the second choice.
///
/// A valid query parameter wins, then a valid stored preference, then the default.
pub fn resolve_with_preference(query: Option<&str>, stored: Option<&str>) -> Locale {
    query
        .and_then(Locale::from_code)
        .or_else(|| stored.and_then(Locale::from_code))
        .unwrap_or(Locale::DEFAULT)
}

/// The active locale for one render pass.
///
/// `switch` is the only way to change it; the value is replaced wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleContext {
    current: Locale,
}

impl From<Locale> for LocaleContext {
    fn from(current: Locale) -> Self {
        Self { current }
    }
}

impl LocaleContext {
    pub fn new(requested: Option<&str>) -> Self {
        Self {
            current: resolve(requested),
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    /// Switch to `requested`, falling back to the default, and return the new locale.
    pub fn switch(&mut self, requested: &str) -> Locale {
        self.current = resolve(Some(requested));
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_codes_are_identity() {
        for locale in Locale::ALL {
            assert_eq!(resolve(Some(locale.code())), locale);
        }
    }

    #[test]
    fn test_resolve_unsupported_falls_back_to_korean() {
        for input in ["", "xx", "EN", "en-US", " ko", "zh", "\u{0}", "kokokoko"] {
            assert_eq!(resolve(Some(input)), Locale::Ko, "input {input:?}");
        }
        assert_eq!(resolve(None), Locale::Ko);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("vi".parse::<Locale>().unwrap(), Locale::Vi);
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn test_preference_ordering() {
        assert_eq!(resolve_with_preference(Some("th"), Some("ru")), Locale::Th);
        assert_eq!(resolve_with_preference(Some("xx"), Some("ru")), Locale::Ru);
        assert_eq!(resolve_with_preference(None, Some("bogus")), Locale::Ko);
        assert_eq!(resolve_with_preference(None, None), Locale::Ko);
    }

    #[test]
    fn test_context_switch_replaces_locale() {
        let mut ctx = LocaleContext::new(Some("en"));
        assert_eq!(ctx.current(), Locale::En);
        assert_eq!(ctx.switch("kk"), Locale::Kk);
        assert_eq!(ctx.switch("nope"), Locale::Ko);
        assert_eq!(ctx.current(), Locale::Ko);
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&Locale::Uz).unwrap();
        assert_eq!(json, "\"uz\"");
        let back: Locale = serde_json::from_str("\"ms\"").unwrap();
        assert_eq!(back, Locale::Ms);
    }
}
