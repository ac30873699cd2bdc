//! Translation tables for every supported locale.
//!
//! Tables are TOML documents embedded at build time and parsed once. Pages
//! never read them directly: they go through [`Translator`], which applies
//! the single central fallback (the English table) so a missing translation
//! is fixed in data, not at call sites.

mod dictionary;
mod translator;

#[cfg(test)]
mod tests;

pub use dictionary::Dictionary;
pub use translator::Translator;

use kku_core::Locale;
use std::sync::OnceLock;
use tracing::error;

/// Locale whose table doubles as the central fallback table.
pub const FALLBACK_LOCALE: Locale = Locale::En;

static TABLES: OnceLock<Vec<Dictionary>> = OnceLock::new();

fn source(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => include_str!("../locales/ko.toml"),
        Locale::En => include_str!("../locales/en.toml"),
        Locale::Id => include_str!("../locales/id.toml"),
        Locale::Vi => include_str!("../locales/vi.toml"),
        Locale::Ru => include_str!("../locales/ru.toml"),
        Locale::Uz => include_str!("../locales/uz.toml"),
        Locale::Tl => include_str!("../locales/tl.toml"),
        Locale::Th => include_str!("../locales/th.toml"),
        Locale::Ms => include_str!("../locales/ms.toml"),
        Locale::Kk => include_str!("../locales/kk.toml"),
    }
}

fn tables() -> &'static [Dictionary] {
    TABLES.get_or_init(|| {
        Locale::ALL
            .iter()
            .map(|&locale| {
                Dictionary::parse(source(locale)).unwrap_or_else(|e| {
                    error!("translation table for {locale} unusable: {e}");
                    Dictionary::empty()
                })
            })
            .collect()
    })
}

/// The raw table for `locale`.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
    // `Locale::ALL` is declared in discriminant order.
    &tables()[locale as usize]
}

/// Text at `path` in `locale`'s own table, without any fallback.
pub fn lookup(locale: Locale, path: &str) -> Option<&'static str> {
    dictionary(locale).get(path)
}

/// Key paths present in the central table but absent from `locale`.
pub fn missing_keys(locale: Locale) -> Vec<String> {
    let own = dictionary(locale);
    dictionary(FALLBACK_LOCALE)
        .key_paths()
        .into_iter()
        .filter(|path| !own.contains(path))
        .collect()
}
