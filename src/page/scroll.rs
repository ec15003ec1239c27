//! Scroll-driven page state: navbar shading, active section highlighting,
//! hero parallax and in-page anchor targets

use std::collections::HashMap;

use crate::dom::{Document, NodeId, Selector};

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Vertical placement of an element relative to the top of the page
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Mark the navbar once the page has scrolled past `threshold`
pub fn update_navbar(doc: &mut Document, navbar: NodeId, scroll_y: f64, threshold: f64) {
    if scroll_y > threshold {
        doc.add_class(navbar, SCROLLED_CLASS);
    } else {
        doc.remove_class(navbar, SCROLLED_CLASS);
    }
}

/// Id of the section the viewport is in, the last match winning
///
/// Sections without an id or without a known layout box are never current.
pub fn current_section(
    doc: &Document,
    sections: &Selector,
    layout: &HashMap<NodeId, LayoutBox>,
    scroll_y: f64,
    offset: f64,
) -> Option<String> {
    let mut current = None;
    for section in doc.query_selector_all(sections) {
        let (Some(id), Some(bounds)) = (doc.attr(section, "id"), layout.get(&section)) else {
            continue;
        };
        let top = bounds.top - offset;
        if scroll_y >= top && scroll_y < top + bounds.height {
            current = Some(id.to_string());
        }
    }
    current
}

/// Move the `active` class to the navigation link pointing at the current section
pub fn highlight_active_section(
    doc: &mut Document,
    sections: &Selector,
    nav_links: &Selector,
    layout: &HashMap<NodeId, LayoutBox>,
    scroll_y: f64,
    offset: f64,
) -> Option<String> {
    let current = current_section(doc, sections, layout, scroll_y, offset);
    let wanted = format!("#{}", current.as_deref().unwrap_or_default());

    for link in doc.query_selector_all(nav_links) {
        doc.remove_class(link, ACTIVE_LINK_CLASS);
        if doc.attr(link, "href") == Some(wanted.as_str()) {
            doc.add_class(link, ACTIVE_LINK_CLASS);
        }
    }

    current
}

/// Shift the hero section by a fraction of the scroll offset
pub fn apply_parallax(doc: &mut Document, hero: NodeId, scroll_y: f64, speed: f64) {
    let transform = format!("translateY({}px)", scroll_y * speed);
    set_style_property(doc, hero, "transform", &transform);
}

/// Set one inline style declaration, keeping the others in place
fn set_style_property(doc: &mut Document, node: NodeId, property: &str, value: &str) {
    let mut declarations: Vec<String> = doc
        .attr(node, "style")
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(str::to_string)
        .collect();

    let declaration = format!("{}: {}", property, value);
    let existing = declarations.iter().position(|decl| {
        decl.split_once(':')
            .is_some_and(|(name, _)| name.trim().eq_ignore_ascii_case(property))
    });
    match existing {
        Some(index) => declarations[index] = declaration,
        None => declarations.push(declaration),
    }

    doc.set_attr(node, "style", &declarations.join("; "));
}

/// Scroll position for an in-page anchor, or `None` when it has no target
pub fn anchor_scroll_target(
    doc: &Document,
    anchor: NodeId,
    layout: &HashMap<NodeId, LayoutBox>,
    offset: f64,
) -> Option<f64> {
    let href = doc.attr(anchor, "href")?;
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let target = doc.get_element_by_id(id)?;
    let top = layout.get(&target).map(|b| b.top).unwrap_or_default();
    Some(top - offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<nav id=\"navbar\"><a class=\"nav-link\" href=\"#about\">About</a><a class=\"nav-link\" href=\"#projects\">Projects</a></nav><section id=\"about\" class=\"section\"></section><section id=\"projects\" class=\"section\"></section>";

    fn setup() -> (Document, HashMap<NodeId, LayoutBox>) {
        let doc = Document::parse(PAGE).unwrap();
        let mut layout = HashMap::new();
        layout.insert(doc.get_element_by_id("about").unwrap(), LayoutBox::new(600.0, 800.0));
        layout.insert(doc.get_element_by_id("projects").unwrap(), LayoutBox::new(1400.0, 900.0));
        (doc, layout)
    }

    fn active_links(doc: &Document) -> Vec<String> {
        doc.query_selector_all(&Selector::parse(".nav-link.active").unwrap())
            .into_iter()
            .filter_map(|l| doc.attr(l, "href").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_navbar_threshold() {
        let (mut doc, _) = setup();
        let navbar = doc.get_element_by_id("navbar").unwrap();
        update_navbar(&mut doc, navbar, 51.0, 50.0);
        assert!(doc.has_class(navbar, SCROLLED_CLASS));
        update_navbar(&mut doc, navbar, 50.0, 50.0);
        assert!(!doc.has_class(navbar, SCROLLED_CLASS));
    }

    #[test]
    fn test_highlight_moves_between_sections() {
        let (mut doc, layout) = setup();
        let sections = Selector::parse(".section").unwrap();
        let links = Selector::parse(".nav-link").unwrap();

        let current = highlight_active_section(&mut doc, &sections, &links, &layout, 500.0, 100.0);
        assert_eq!(current.as_deref(), Some("about"));
        assert_eq!(active_links(&doc), vec!["#about"]);

        highlight_active_section(&mut doc, &sections, &links, &layout, 1300.0, 100.0);
        assert_eq!(active_links(&doc), vec!["#projects"]);

        let current = highlight_active_section(&mut doc, &sections, &links, &layout, 0.0, 100.0);
        assert_eq!(current, None);
        assert!(active_links(&doc).is_empty());
    }

    #[test]
    fn test_anchor_target_with_header_offset() {
        let (doc, layout) = setup();
        let link = doc.query_selector(&Selector::parse("a[href=\"#projects\"]").unwrap()).unwrap();
        assert_eq!(anchor_scroll_target(&doc, link, &layout, 80.0), Some(1320.0));
    }

    #[test]
    fn test_anchor_without_target() {
        let doc = Document::parse("<a href=\"#\">top</a><a href=\"#nowhere\">x</a>").unwrap();
        let layout = HashMap::new();
        for link in doc.query_selector_all(&Selector::parse("a").unwrap()) {
            assert_eq!(anchor_scroll_target(&doc, link, &layout, 80.0), None);
        }
    }

    #[test]
    fn test_parallax_style() {
        let (mut doc, _) = setup();
        let about = doc.get_element_by_id("about").unwrap();
        apply_parallax(&mut doc, about, 200.0, 0.5);
        assert_eq!(doc.attr(about, "style"), Some("transform: translateY(100px)"));
    }

    #[test]
    fn test_parallax_keeps_other_declarations() {
        let mut doc = Document::parse("<header class=\"hero\" style=\"background: #0A192F; min-height: 100vh;\"></header>").unwrap();
        let hero = doc.document_element().unwrap();

        apply_parallax(&mut doc, hero, 120.0, 0.5);
        assert_eq!(
            doc.attr(hero, "style"),
            Some("background: #0A192F; min-height: 100vh; transform: translateY(60px)")
        );

        apply_parallax(&mut doc, hero, 300.0, 0.5);
        assert_eq!(
            doc.attr(hero, "style"),
            Some("background: #0A192F; min-height: 100vh; transform: translateY(150px)")
        );
    }
}
