//! Internationalization module
//!
//! This module holds the two page languages, the page-lifetime language
//! state, and the catalog of runtime UI strings.

pub mod catalog;
pub mod language;

// Re-export commonly used i18n components
pub use catalog::{Catalog, TranslationParams};
pub use language::{Direction, Language, LanguageState};
