//! Language toggle

use tracing::info;

use crate::dom::{Document, NodeId};
use crate::i18n::{Language, LanguageState};
use crate::localizer::{LocalizationReport, Localizer};

/// Write `lang` and `dir` for `lang` on the root element and `dir` on body
pub fn apply_direction(doc: &mut Document, lang: Language) {
    let dir = lang.direction().as_str();
    if let Some(html) = doc.document_element() {
        doc.set_attr(html, "lang", lang.code());
        doc.set_attr(html, "dir", dir);
    }
    if let Some(body) = doc.body() {
        doc.set_attr(body, "dir", dir);
    }
}

/// Flip the page language and re-render all localizable content
///
/// Toggle labels always offer the language that is not showing.
pub fn switch_language(
    doc: &mut Document,
    state: &mut LanguageState,
    toggles: &[NodeId],
    localizer: &Localizer,
) -> LocalizationReport {
    let lang = state.toggle();
    info!(language = %lang, "Switching page language");

    apply_direction(doc, lang);
    for toggle in toggles {
        doc.set_text_content(*toggle, lang.other().native_name());
    }

    localizer.apply(doc, state)
}
