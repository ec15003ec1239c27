//! Bilingual content localization
//!
//! Elements tagged with parallel English/Arabic attributes are classified
//! into shapes when the page is scanned and rewritten on every language
//! change according to their shape.

pub mod engine;
pub mod report;
pub mod shape;

pub use engine::{LocalizableElement, Localizer};
pub use report::{LocalizationReport, SkipReason, SkippedElement};
pub use shape::{classify, ElementShape, Variants, INLINE_CONTROL_TAGS};
