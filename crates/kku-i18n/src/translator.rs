use kku_core::Locale;

use crate::{dictionary, Dictionary, FALLBACK_LOCALE};

/// Typed text accessor for one locale.
///
/// Resolution order for every lookup: the locale's table, then the central
/// fallback table, then the caller's fallback (or the key path itself).
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
    primary: &'static Dictionary,
    central: &'static Dictionary,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            primary: dictionary(locale),
            central: dictionary(FALLBACK_LOCALE),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text from the locale or the central table.
    pub fn get(&self, path: &str) -> Option<&'static str> {
        self.primary.get(path).or_else(|| self.central.get(path))
    }

    /// Text for `path`; the path itself when no table has it.
    pub fn text<'a>(&self, path: &'a str) -> &'a str {
        self.get(path).unwrap_or(path)
    }

    /// Text for `path`, with `fallback` used only when no table has it.
    pub fn text_or<'a>(&self, path: &str, fallback: &'a str) -> &'a str {
        self.get(path).unwrap_or(fallback)
    }

    /// String list (month or weekday names); empty when no table has it.
    pub fn list(&self, path: &str) -> Vec<&'static str> {
        self.primary
            .get_list(path)
            .or_else(|| self.central.get_list(path))
            .unwrap_or_default()
    }

    /// Whether the locale's own table translates `path`.
    pub fn is_translated(&self, path: &str) -> bool {
        self.primary.contains(path)
    }
}
