//! Minimal CSS selector support
//!
//! Covers what the page script queries: comma-separated groups of compound
//! selectors built from a tag name, `#id`, `.class`, `[attr]`, `[attr="v"]`
//! and `[attr^="v"]`. Combinators are rejected.

use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use super::Element;
use crate::utils::errors::{PortfolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatcher {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatcher>,
}

/// A parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self> {
        let groups = source
            .split(',')
            .map(|group| parse_compound(group.trim()).map_err(|reason| PortfolioError::InvalidSelector {
                selector: source.to_string(),
                reason,
            }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: source.to_string(),
            groups,
        })
    }

    /// Selector matching any element carrying one of the given classes
    pub fn any_class<S: AsRef<str>>(classes: &[S]) -> Result<Self> {
        let source = classes
            .iter()
            .map(|c| format!(".{}", c.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        Self::parse(&source)
    }

    pub fn matches(&self, el: &Element) -> bool {
        self.groups.iter().any(|group| group.matches(el))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Compound {
    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if el.name() != tag.as_str() {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|m| match (&m.op, el.attr(&m.name)) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(v), Some(actual)) => actual == v.as_str(),
            (AttrOp::Prefix(v), Some(actual)) => actual.starts_with(v.as_str()),
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn parse_compound(input: &str) -> std::result::Result<Compound, String> {
    if input.is_empty() {
        return Err("empty selector group".to_string());
    }

    let mut compound = Compound::default();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '#' | '.' => {
                chars.next();
                let ident = read_ident(&mut chars);
                if ident.is_empty() {
                    return Err(format!("expected a name after '{}'", c));
                }
                if c == '#' {
                    compound.id = Some(ident);
                } else {
                    compound.classes.push(ident);
                }
            }
            '[' => {
                chars.next();
                compound.attrs.push(parse_attr(&mut chars)?);
            }
            c if is_ident_char(c) && compound == Compound::default() => {
                compound.tag = Some(read_ident(&mut chars).to_ascii_lowercase());
            }
            c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                return Err("combinators are not supported".to_string());
            }
            other => return Err(format!("unexpected character '{}'", other)),
        }
    }

    Ok(compound)
}

fn parse_attr(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<AttrMatcher, String> {
    let name = read_ident(chars);
    if name.is_empty() {
        return Err("expected an attribute name".to_string());
    }

    let op = match chars.next() {
        Some(']') => return Ok(AttrMatcher { name, op: AttrOp::Exists }),
        Some('=') => AttrOp::Equals(String::new()),
        Some('^') if chars.next() == Some('=') => AttrOp::Prefix(String::new()),
        _ => return Err(format!("malformed attribute selector for '{}'", name)),
    };

    let value = match chars.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            chars.next();
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some(c) if c == quote => break,
                    Some(c) => value.push(c),
                    None => return Err("unterminated attribute value".to_string()),
                }
            }
            value
        }
        _ => {
            let mut value = String::new();
            while let Some(&c) = chars.peek() {
                if c == ']' {
                    break;
                }
                value.push(c);
                chars.next();
            }
            value
        }
    };

    if chars.next() != Some(']') {
        return Err(format!("expected ']' after attribute '{}'", name));
    }

    let op = match op {
        AttrOp::Prefix(_) => AttrOp::Prefix(value),
        _ => AttrOp::Equals(value),
    };
    Ok(AttrMatcher { name, op })
}
