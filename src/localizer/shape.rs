//! Element shape classification
//!
//! Each localizable element is classified once, when the page is scanned, and
//! the replacement rule is picked from the shape instead of re-inspecting tag
//! names and classes on every pass.

use crate::dom::{Document, NodeId, Selector};
use crate::i18n::Language;

/// Tags whose whole text content is replaced even when they have children
pub const INLINE_CONTROL_TAGS: &[&str] = &["button", "a", "span"];

/// How a localizable element receives its new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementShape {
    /// `li` holding a recognized icon; the icon is kept and the text follows it
    IconListItem { icon: NodeId },
    /// No child elements; the whole text content is replaced
    PlainText,
    /// `button`, `a` or `span` with children; the whole text content is
    /// replaced and nested markup is lost
    InlineControl,
    /// Anything else; only the first non-blank direct text node is replaced
    MixedContent,
}

impl ElementShape {
    pub fn name(&self) -> &'static str {
        match self {
            ElementShape::IconListItem { .. } => "icon-list-item",
            ElementShape::PlainText => "plain-text",
            ElementShape::InlineControl => "inline-control",
            ElementShape::MixedContent => "mixed-content",
        }
    }
}

/// Classify an element following the replacement precedence
pub fn classify(doc: &Document, node: NodeId, icons: &Selector) -> ElementShape {
    let tag = doc.tag_name(node).unwrap_or_default();

    if tag == "li" {
        if let Some(icon) = doc.query_selector_within(node, icons) {
            return ElementShape::IconListItem { icon };
        }
    }

    if doc.element_children(node).next().is_none() {
        return ElementShape::PlainText;
    }

    if INLINE_CONTROL_TAGS.contains(&tag) {
        return ElementShape::InlineControl;
    }

    ElementShape::MixedContent
}

/// The two authored text variants of a localizable element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    pub english: String,
    pub arabic: String,
}

impl Variants {
    pub fn for_language(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.english,
            Language::Arabic => &self.arabic,
        }
    }
}
