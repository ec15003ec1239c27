//! Document model
//!
//! An owned, arena-backed stand-in for the browser DOM: a tree that can be
//! parsed from and serialized to HTML, queried with simple selectors, and
//! mutated by the localizer and the page session without a browser.

pub mod node;
pub mod parser;
pub mod selector;
mod serializer;

pub use node::{Attribute, Descendants, Document, Element, NodeId, NodeKind};
pub use parser::{decode_entities, is_raw_text_element, is_void_element};
pub use selector::Selector;
