//! One-time page touches applied at startup

use crate::dom::{Document, NodeId};
use crate::i18n::{Catalog, Language, TranslationParams};

pub const SKIP_LINK_CLASS: &str = "skip-link";

/// Rewrite the footer line with the given year
pub fn stamp_footer_year(
    doc: &mut Document,
    footer: NodeId,
    catalog: &Catalog,
    lang: Language,
    owner: &str,
    year: i32,
) {
    let mut params = TranslationParams::new();
    params.insert("year".to_string(), year.to_string());
    params.insert("owner".to_string(), owner.to_string());
    let line = catalog.t("footer.copyright", lang, Some(&params));
    doc.set_text_content(footer, &line);
}

/// Insert a skip-to-content link as the first child of `body`
pub fn insert_skip_link(doc: &mut Document, target: &str, label: &str) -> Option<NodeId> {
    let body = doc.body()?;
    let link = doc.create_element("a");
    doc.set_attr(link, "href", target);
    doc.set_attr(link, "class", SKIP_LINK_CLASS);
    doc.set_text_content(link, label);
    doc.prepend_child(body, link);
    Some(link)
}
