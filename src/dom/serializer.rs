//! HTML serialization

use quick_xml::escape::{escape, partial_escape};

use super::parser::{is_raw_text_element, is_void_element};
use super::{Document, NodeId, NodeKind};

impl Document {
    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_node(*child, &mut out, false);
        }
        out
    }

    /// Serialize a single node including its own tags
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        let raw = self
            .parent(id)
            .and_then(|p| self.tag_name(p))
            .is_some_and(is_raw_text_element);
        self.write_node(id, &mut out, raw);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String, raw_text: bool) {
        match self.kind(id) {
            NodeKind::Document => {
                for child in self.children(id) {
                    self.write_node(*child, out, false);
                }
            }
            NodeKind::Doctype(text) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(text);
                out.push('>');
            }
            NodeKind::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeKind::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&partial_escape(text.as_str()));
                }
            }
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(el.name());
                for attr in el.attrs() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    if !attr.value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape(attr.value.as_str()));
                        out.push('"');
                    }
                }
                out.push('>');

                if is_void_element(el.name()) {
                    return;
                }

                let raw = is_raw_text_element(el.name());
                for child in self.children(id) {
                    self.write_node(*child, out, raw);
                }

                out.push_str("</");
                out.push_str(el.name());
                out.push('>');
            }
        }
    }
}
