//! Mobile menu visibility

use crate::dom::{Document, NodeId};

/// State class shared by the open menu and its toggle
pub const ACTIVE_CLASS: &str = "active";

/// The mobile menu and the button that opens it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    toggle: NodeId,
    menu: NodeId,
}

impl MobileMenu {
    pub fn new(toggle: NodeId, menu: NodeId) -> Self {
        Self { toggle, menu }
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.menu, ACTIVE_CLASS)
    }

    /// Flip the menu and the toggle; returns whether the menu is now open
    pub fn toggle(&self, doc: &mut Document) -> bool {
        doc.toggle_class(self.toggle, ACTIVE_CLASS);
        doc.toggle_class(self.menu, ACTIVE_CLASS)
    }

    pub fn close(&self, doc: &mut Document) {
        doc.remove_class(self.menu, ACTIVE_CLASS);
        doc.remove_class(self.toggle, ACTIVE_CLASS);
    }

    /// True when `target` lies in neither the menu nor the toggle
    pub fn is_outside(&self, doc: &Document, target: NodeId) -> bool {
        !doc.contains(self.menu, target) && !doc.contains(self.toggle, target)
    }
}
