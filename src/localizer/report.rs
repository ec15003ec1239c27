use std::fmt;

use crate::dom::NodeId;
use crate::i18n::Language;

/// Why an element was left untouched by a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Mixed-content element without a non-blank direct text node
    NoTextNode,
    /// The recorded icon is no longer attached to the tree
    DetachedIcon,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTextNode => write!(f, "no non-empty text node to replace"),
            SkipReason::DetachedIcon => write!(f, "icon element is detached"),
        }
    }
}

/// Diagnostic for one skipped element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedElement {
    pub node: NodeId,
    pub tag: String,
    pub reason: SkipReason,
}

/// Outcome of one localization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationReport {
    pub language: Language,
    pub updated: usize,
    pub skipped: Vec<SkippedElement>,
}

impl LocalizationReport {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            updated: 0,
            skipped: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
