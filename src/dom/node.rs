//! Arena-backed document tree
//!
//! Every node lives in a single `Vec` owned by the [`Document`] and is
//! addressed by [`NodeId`]. Removing a node only detaches it; ids stay valid
//! for the lifetime of the document.

use super::Selector;

/// Handle to a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Element attribute in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element payload: lowercase tag name and attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<Attribute>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Returns false when the class was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        let value = match self.attr("class").map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", &value);
        true
    }

    /// Returns false when the class was not present
    pub fn remove_class(&mut self, class: &str) -> bool {
        if !self.has_class(class) {
            return false;
        }
        let value = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &value);
        true
    }

    /// Returns whether the class is present afterwards
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }
}

/// Node payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Doctype(String),
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// A document tree with a single owner
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::name)
    }

    /// Content of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Replace the content of a text node; returns false for other nodes
    pub fn set_text(&mut self, id: NodeId, value: &str) -> bool {
        match &mut self.nodes[id.0].kind {
            NodeKind::Text(text) => {
                *text = value.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|c| self.is_element(*c))
    }

    pub fn text_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|c| self.text(*c).is_some())
    }

    /// All nodes below `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Inclusive containment, like the DOM's `Node.contains`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(name)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Comment(text.to_string()))
    }

    pub fn create_doctype(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Doctype(text.to_string()))
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Insert `child` right after `reference` under the reference's parent
    ///
    /// Returns false when `reference` is detached.
    pub fn insert_after(&mut self, reference: NodeId, child: NodeId) -> bool {
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        self.detach(child);
        let pos = self.nodes[parent.0]
            .children
            .iter()
            .position(|c| *c == reference)
            .map(|p| p + 1)
            .unwrap_or(self.nodes[parent.0].children.len());
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(pos, child);
        true
    }

    /// Detach `child` from `parent`; returns false if it was not a child
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|n| self.text(n))
            .collect()
    }

    /// Replace all children with a single text node (none for empty text)
    pub fn set_text_content(&mut self, id: NodeId, value: &str) {
        if self.set_text(id, value) {
            return;
        }
        for child in self.children(id).to_vec() {
            self.detach(child);
        }
        if !value.is_empty() {
            let text = self.create_text(value);
            self.append_child(id, text);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?.remove_attr(name)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.add_class(class))
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.remove_class(class))
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.toggle_class(class))
    }

    /// The root `<html>` element
    pub fn document_element(&self) -> Option<NodeId> {
        self.element_children(self.root()).next()
    }

    pub fn body(&self) -> Option<NodeId> {
        self.child_of_root_element("body")
    }

    pub fn head(&self) -> Option<NodeId> {
        self.child_of_root_element("head")
    }

    fn child_of_root_element(&self, name: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.element_children(html)
            .find(|c| self.tag_name(*c) == Some(name))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|n| self.element(*n).and_then(Element::id) == Some(id))
    }

    /// First element in document order matching `selector`
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_selector_within(self.root(), selector)
    }

    /// First descendant of `scope` matching `selector`
    pub fn query_selector_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .find(|n| self.element(*n).is_some_and(|el| selector.matches(el)))
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root())
            .filter(|n| self.element(*n).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    /// Nearest inclusive ancestor element matching `selector`
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.element(id).is_some_and(|el| selector.matches(el)) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }
}

/// Preorder iterator over a subtree
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let li = doc.create_element("LI");
        let icon = doc.create_element("span");
        let star = doc.create_text("★");
        let label = doc.create_text(" Fast");
        doc.append_child(doc.root(), li);
        doc.append_child(li, icon);
        doc.append_child(icon, star);
        doc.append_child(li, label);
        (doc, li, icon, label)
    }

    #[test]
    fn test_tag_names_are_lowercased() {
        let (doc, li, _, _) = sample();
        assert_eq!(doc.tag_name(li), Some("li"));
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let (doc, li, _, _) = sample();
        assert_eq!(doc.text_content(li), "★ Fast");
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let (mut doc, li, icon, _) = sample();
        doc.set_text_content(li, "plain");
        assert_eq!(doc.children(li).len(), 1);
        assert_eq!(doc.text_content(li), "plain");
        assert_eq!(doc.parent(icon), None);
    }

    #[test]
    fn test_set_text_content_empty_leaves_no_children() {
        let (mut doc, li, _, _) = sample();
        doc.set_text_content(li, "");
        assert!(doc.children(li).is_empty());
    }

    #[test]
    fn test_insert_after_and_remove() {
        let (mut doc, li, icon, label) = sample();
        assert!(doc.remove_child(li, label));
        assert!(!doc.remove_child(li, label));

        let text = doc.create_text(" سريع");
        assert!(doc.insert_after(icon, text));
        assert_eq!(doc.children(li), &[icon, text]);
        assert_eq!(doc.text_content(li), "★ سريع");
    }

    #[test]
    fn test_insert_after_detached_reference() {
        let mut doc = Document::new();
        let orphan = doc.create_element("span");
        let text = doc.create_text("x");
        assert!(!doc.insert_after(orphan, text));
    }

    #[test]
    fn test_append_moves_existing_child() {
        let (mut doc, li, icon, _) = sample();
        let other = doc.create_element("div");
        doc.append_child(doc.root(), other);
        doc.append_child(other, icon);
        assert_eq!(doc.parent(icon), Some(other));
        assert!(!doc.children(li).contains(&icon));
    }

    #[test]
    fn test_class_list_operations() {
        let mut el = Element::new("div");
        assert!(el.add_class("menu"));
        assert!(!el.add_class("menu"));
        assert!(el.toggle_class("active"));
        assert_eq!(el.attr("class"), Some("menu active"));
        assert!(!el.toggle_class("active"));
        assert_eq!(el.attr("class"), Some("menu"));
        assert!(!el.remove_class("active"));
    }

    #[test]
    fn test_descendants_preorder() {
        let (doc, li, icon, label) = sample();
        let star = doc.children(icon)[0];
        let order: Vec<NodeId> = doc.descendants(doc.root()).collect();
        assert_eq!(order, vec![li, icon, star, label]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (doc, li, icon, _) = sample();
        assert!(doc.contains(li, icon));
        assert!(doc.contains(icon, icon));
        assert!(!doc.contains(icon, li));
    }
}
