//! Content localizer
//!
//! Rewrites the visible text of every element that carries both language
//! variants. A pass never fails: elements that cannot be updated are left as
//! they are and reported.

use tracing::{debug, info, warn};

use super::report::{LocalizationReport, SkipReason, SkippedElement};
use super::shape::{classify, ElementShape, Variants};
use crate::config::LocalizerConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::i18n::{Language, LanguageState};
use crate::utils::errors::Result;
use crate::utils::helpers::{has_visible_text, truncate_text};
use crate::utils::logging::log_localization_pass;

/// A scanned element with its fixed shape and authored variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableElement {
    pub node: NodeId,
    pub shape: ElementShape,
    pub variants: Variants,
}

/// Localizable elements of one document, classified once
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    entries: Vec<LocalizableElement>,
}

impl Localizer {
    /// Collect and classify every element carrying both variant attributes
    pub fn scan(doc: &Document, config: &LocalizerConfig) -> Result<Self> {
        let icons = Selector::any_class(&config.icon_classes)?;
        let mut entries = Vec::new();

        for node in doc.descendants(doc.root()) {
            let Some(el) = doc.element(node) else {
                continue;
            };

            match (el.attr(&config.english_attribute), el.attr(&config.arabic_attribute)) {
                (Some(english), Some(arabic)) => {
                    let shape = classify(doc, node, &icons);
                    entries.push(LocalizableElement {
                        node,
                        shape,
                        variants: Variants {
                            english: english.to_string(),
                            arabic: arabic.to_string(),
                        },
                    });
                }
                (None, None) => {}
                _ => warn!(
                    tag = el.name(),
                    "Element carries only one language variant and will not be localized"
                ),
            }
        }

        debug!(count = entries.len(), "Scanned localizable elements");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LocalizableElement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shape_of(&self, node: NodeId) -> Option<ElementShape> {
        self.entries.iter().find(|e| e.node == node).map(|e| e.shape)
    }

    /// Render every localizable element in the state's current language
    pub fn apply(&self, doc: &mut Document, state: &LanguageState) -> LocalizationReport {
        let lang = state.current();
        info!(
            count = self.entries.len(),
            language = %lang,
            "Updating translatable elements"
        );

        let mut report = LocalizationReport::new(lang);
        for entry in &self.entries {
            match apply_element(doc, entry, lang) {
                Ok(()) => report.updated += 1,
                Err(reason) => {
                    let tag = doc.tag_name(entry.node).unwrap_or_default().to_string();
                    warn!(
                        tag = %tag,
                        shape = entry.shape.name(),
                        reason = %reason,
                        "Could not update element"
                    );
                    report.skipped.push(SkippedElement {
                        node: entry.node,
                        tag,
                        reason,
                    });
                }
            }
        }

        log_localization_pass(&report);
        report
    }
}

fn apply_element(doc: &mut Document, entry: &LocalizableElement, lang: Language) -> std::result::Result<(), SkipReason> {
    let text = entry.variants.for_language(lang);

    match entry.shape {
        ElementShape::IconListItem { icon } => {
            if doc.parent(icon).is_none() {
                return Err(SkipReason::DetachedIcon);
            }
            let stale: Vec<NodeId> = doc.text_children(entry.node).collect();
            for child in stale {
                doc.remove_child(entry.node, child);
            }
            let label = doc.create_text(&format!(" {}", text));
            doc.insert_after(icon, label);
        }
        ElementShape::PlainText | ElementShape::InlineControl => {
            doc.set_text_content(entry.node, text);
        }
        ElementShape::MixedContent => {
            let target = doc
                .text_children(entry.node)
                .find(|child| doc.text(*child).is_some_and(has_visible_text))
                .ok_or(SkipReason::NoTextNode)?;
            doc.set_text(target, text);
        }
    }

    debug!(
        shape = entry.shape.name(),
        text = %truncate_text(text, 30),
        "Updated element"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> (Document, Localizer) {
        let doc = Document::parse(html).unwrap();
        let localizer = Localizer::scan(&doc, &LocalizerConfig::default()).unwrap();
        (doc, localizer)
    }

    #[test]
    fn test_scan_requires_both_variants() {
        let (_, localizer) = scan("<p data-en=\"A\" data-ar=\"أ\">A</p><p data-en=\"B\">B</p><p>C</p>");
        assert_eq!(localizer.len(), 1);
    }

    #[test]
    fn test_plain_text_swap() {
        let (mut doc, localizer) = scan("<span data-en=\"Hi\" data-ar=\"مرحبا\">Hi</span>");
        let span = localizer.entries()[0].node;

        let report = localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(report.updated, 1);
        assert_eq!(doc.text_content(span), "مرحبا");

        localizer.apply(&mut doc, &LanguageState::new(Language::English));
        assert_eq!(doc.text_content(span), "Hi");
    }

    #[test]
    fn test_icon_list_item_keeps_icon() {
        let (mut doc, localizer) =
            scan("<li data-en=\"Fast\" data-ar=\"سريع\"><span class=\"principle-icon\">★</span> Fast</li>");
        let li = localizer.entries()[0].node;
        let ElementShape::IconListItem { icon } = localizer.entries()[0].shape else {
            panic!("expected icon list item");
        };

        localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(doc.text_content(li), "★ سريع");
        assert_eq!(doc.children(li)[0], icon);
        assert_eq!(doc.children(li).len(), 2);
    }

    #[test]
    fn test_icon_list_item_collapses_scattered_text() {
        let (mut doc, localizer) = scan(
            "<li data-en=\"Fast\" data-ar=\"سريع\">\n  <span class=\"principle-icon\">★</span>\n  Fast\n</li>",
        );
        let li = localizer.entries()[0].node;

        localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(doc.text_content(li), "★ سريع");
    }

    #[test]
    fn test_nested_icon_labels_accumulate_beside_icon() {
        let (mut doc, localizer) = scan(
            "<li data-en=\"Led\" data-ar=\"قاد\"><div><i class=\"experience-icon\">▸</i></div> Led</li>",
        );
        let li = localizer.entries()[0].node;

        localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(doc.text_content(li), "▸ قاد");

        // Only the item's own text is cleared; labels next to a nested icon stay
        localizer.apply(&mut doc, &LanguageState::new(Language::English));
        assert_eq!(doc.text_content(li), "▸ Led قاد");
        assert_eq!(doc.text_children(li).count(), 0);
    }

    #[test]
    fn test_inline_control_drops_nested_markup() {
        let (mut doc, localizer) =
            scan("<a href=\"#contact\" data-en=\"Contact\" data-ar=\"تواصل\"><i>✉</i> Contact</a>");
        let a = localizer.entries()[0].node;

        localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(doc.to_html(), "<a href=\"#contact\" data-en=\"Contact\" data-ar=\"تواصل\">تواصل</a>");
        assert_eq!(doc.element_children(a).count(), 0);
    }

    #[test]
    fn test_mixed_content_replaces_first_text_node_only() {
        let (mut doc, localizer) =
            scan("<h2 data-en=\"About\" data-ar=\"نبذة\">  <small>01.</small> About <em>me</em></h2>");
        let h2 = localizer.entries()[0].node;
        assert_eq!(localizer.shape_of(h2), Some(ElementShape::MixedContent));

        localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(doc.text_content(h2), "  01.نبذةme");
        assert_eq!(doc.element_children(h2).count(), 2);
    }

    #[test]
    fn test_unmatched_element_is_reported_not_changed() {
        let html = "<div data-en=\"Box\" data-ar=\"صندوق\"><p>one</p>  <p>two</p></div>";
        let (mut doc, localizer) = scan(html);

        let report = localizer.apply(&mut doc, &LanguageState::new(Language::Arabic));
        assert_eq!(report.updated, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::NoTextNode);
        assert_eq!(report.skipped[0].tag, "div");
        assert_eq!(doc.to_html(), html);
    }
}
