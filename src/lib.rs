//! Portfolio Localizer
//!
//! A headless model of a bilingual (English/Arabic) portfolio page. The
//! library parses the page into an owned document tree, localizes every
//! element that carries parallel language variants, and drives the page's
//! interactive behavior through an explicit event loop.

pub mod config;
pub mod dom;
pub mod i18n;
pub mod localizer;
pub mod page;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortfolioError, Result};

// Re-export main components for easy access
pub use dom::{Document, NodeId, Selector};
pub use i18n::{Catalog, Language, LanguageState};
pub use localizer::{LocalizationReport, Localizer};
pub use page::{Effect, PageEvent, PageSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
