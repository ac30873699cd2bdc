//! # kku-core
//!
//! Core types, traits, configuration, locale resolution, and error handling
//! for the KKU Global Gateway.

pub mod config;
pub mod error;
pub mod locale;
pub mod traits;

pub use config::shellexpand;
pub use locale::{Locale, LocaleContext};
