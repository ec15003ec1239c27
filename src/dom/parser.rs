//! HTML loading on top of the `quick-xml` tokenizer
//!
//! The tokenizer is run with end-name checks disabled and the tree builder
//! supplies the HTML rules it does not know about: void elements never take
//! children and stray end tags are dropped. `script`/`style` bodies are cut
//! out of the source up to their end tag and tokenizing resumes after it.
//! Unknown character references are kept verbatim.

use std::borrow::Cow;

use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use super::{Document, NodeId};
use crate::utils::errors::{PortfolioError, Result};

/// Elements that never have content or an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is taken verbatim
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&name)
}

impl Document {
    /// Parse an HTML document
    pub fn parse(html: &str) -> Result<Self> {
        let mut doc = Document::new();
        let mut stack: Vec<NodeId> = vec![doc.root()];

        let mut offset = 0;
        while offset < html.len() {
            offset = doc.parse_from(html, offset, &mut stack)?;
        }

        if stack.len() > 1 {
            debug!(open = stack.len() - 1, "Document ended with unclosed elements");
        }

        Ok(doc)
    }

    /// Tokenize `html` from `offset` until the input ends or a raw-text
    /// element opens; returns the offset to resume from
    fn parse_from(&mut self, html: &str, offset: usize, stack: &mut Vec<NodeId>) -> Result<usize> {
        let mut reader = Reader::from_str(&html[offset..]);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.check_comments = false;
        config.trim_text(false);

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => return Err(markup_error(offset as u64 + reader.error_position() as u64, e.to_string())),
            };
            let position = offset + reader.buffer_position() as usize;
            let parent = *stack.last().unwrap_or(&self.root());

            match event {
                Event::Start(start) => {
                    let (node, name) = self.element_from_tag(&start);
                    self.append_child(parent, node);

                    if is_raw_text_element(&name) {
                        let (body_end, resume) = raw_text_end(html, position, &name).unwrap_or((html.len(), html.len()));
                        let body = &html[position..body_end];
                        if !body.is_empty() {
                            let text = self.create_text(body);
                            self.append_child(node, text);
                        }
                        return Ok(resume);
                    } else if !is_void_element(&name) {
                        stack.push(node);
                    }
                }
                Event::Empty(start) => {
                    let (node, _) = self.element_from_tag(&start);
                    self.append_child(parent, node);
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                    if is_void_element(&name) {
                        continue;
                    }
                    // Close the nearest open element with this name, dropping
                    // anything left open inside it
                    match stack.iter().rposition(|id| self.tag_name(*id) == Some(name.as_str())) {
                        Some(pos) if pos > 0 => stack.truncate(pos),
                        _ => debug!(tag = %name, "Ignoring unmatched end tag"),
                    }
                }
                Event::Text(text) => {
                    let raw = utf8(&text, position as u64)?;
                    if !raw.is_empty() {
                        let node = self.create_text(&decode_entities(raw));
                        self.append_child(parent, node);
                    }
                }
                Event::CData(data) => {
                    let raw = utf8(&data, position as u64)?;
                    let node = self.create_text(raw);
                    self.append_child(parent, node);
                }
                Event::Comment(comment) => {
                    let raw = utf8(&comment, position as u64)?;
                    let node = self.create_comment(raw);
                    self.append_child(parent, node);
                }
                Event::DocType(doctype) => {
                    let raw = utf8(&doctype, position as u64)?;
                    let node = self.create_doctype(raw.trim());
                    self.append_child(parent, node);
                }
                Event::Eof => return Ok(html.len()),
                _ => {}
            }
        }
    }

    fn element_from_tag(&mut self, start: &BytesStart<'_>) -> (NodeId, String) {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
        let node = self.create_element(&name);

        for attr in start.html_attributes() {
            match attr {
                Ok(attr) => {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
                    let raw = String::from_utf8_lossy(&attr.value);
                    self.set_attr(node, &key, &decode_entities(&raw));
                }
                Err(e) => warn!(tag = %name, error = %e, "Skipping malformed attribute"),
            }
        }

        (node, name)
    }
}

/// Locate the end tag of a raw-text body starting at `from`
///
/// Returns the offset where the body ends and the offset just past the end
/// tag. Tag names match case-insensitively.
fn raw_text_end(html: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let bytes = html.as_bytes();
    let closing = format!("</{}", name);
    let mut pos = from;

    while let Some(found) = html[pos..].find("</") {
        let start = pos + found;
        let after = start + closing.len();
        let candidate = bytes.get(start..after)?;
        if candidate.eq_ignore_ascii_case(closing.as_bytes()) {
            match bytes.get(after).copied() {
                None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | 0x0c) => {
                    let resume = html[after..].find('>').map_or(html.len(), |i| after + i + 1);
                    return Some((start, resume));
                }
                _ => {}
            }
        }
        pos = start + 2;
    }

    None
}

/// Resolve XML, numeric and HTML5 named character references
///
/// References are decoded one at a time; a bare `&` or an unknown name is
/// kept verbatim without affecting its neighbours.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match reference_len(tail) {
            Some(len) => {
                let reference = &tail[..len];
                match unescape_with(reference, resolve_entity) {
                    Ok(decoded) => out.push_str(&decoded),
                    Err(_) => out.push_str(reference),
                }
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Length of the `&...;` reference opening `s`, delimiters included
fn reference_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let end = body.find(|c: char| c == ';' || c == '&' || c == '<' || c.is_whitespace())?;
    (end > 0 && body[end..].starts_with(';')).then_some(end + 2)
}

fn resolve_entity(entity: &str) -> Option<&'static str> {
    resolve_predefined_entity(entity).or_else(|| resolve_html5_entity(entity))
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| markup_error(position, e.to_string()))
}

fn markup_error(position: u64, message: String) -> PortfolioError {
    PortfolioError::Markup { position, message }
}
