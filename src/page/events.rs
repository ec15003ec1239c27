//! Page events delivered by the host and effects handed back to it

use std::collections::HashMap;

use crate::dom::NodeId;

/// Something that happened on the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll { y: f64 },
    Click { target: NodeId },
    DoubleClick { target: NodeId },
    KeyDown { key: String },
    Intersect { target: NodeId, is_intersecting: bool },
    Submit { form: NodeId, fields: HashMap<String, String> },
    /// Completion of a clipboard write previously requested by the session
    ClipboardWritten { success: bool },
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Scroll { .. } => "scroll",
            PageEvent::Click { .. } => "click",
            PageEvent::DoubleClick { .. } => "dblclick",
            PageEvent::KeyDown { .. } => "keydown",
            PageEvent::Intersect { .. } => "intersect",
            PageEvent::Submit { .. } => "submit",
            PageEvent::ClipboardWritten { .. } => "clipboard",
        }
    }
}

/// Work the session asks the host to perform outside the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the window to an absolute offset
    ScrollTo { top: f64 },
    WriteClipboard { text: String },
    /// Transient toast in the corner of the page
    Notify { message: String },
    Alert { message: String },
    ResetForm { form: NodeId },
}
