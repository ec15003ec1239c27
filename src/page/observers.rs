//! Viewport intersection watchers for reveal animations and lazy images

use std::collections::BTreeSet;

use tracing::debug;

use crate::dom::{Document, NodeId, Selector};

/// Class that hides an element until it is revealed
pub const REVEAL_CLASS: &str = "scroll-reveal";
/// Class added once a reveal target enters the viewport
pub const REVEALED_CLASS: &str = "active";

/// Set of elements watched for viewport intersection
#[derive(Debug, Clone, Default)]
pub struct Observer {
    observed: BTreeSet<NodeId>,
}

impl Observer {
    pub fn observe(&mut self, node: NodeId) {
        self.observed.insert(node);
    }

    pub fn unobserve(&mut self, node: NodeId) -> bool {
        self.observed.remove(&node)
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

/// Tag every reveal target and start watching it
pub fn prepare_reveal(doc: &mut Document, targets: &Selector, observer: &mut Observer) -> usize {
    let nodes = doc.query_selector_all(targets);
    for node in &nodes {
        doc.add_class(*node, REVEAL_CLASS);
        observer.observe(*node);
    }
    debug!(count = nodes.len(), "Prepared reveal targets");
    nodes.len()
}

/// Mark a watched element as revealed; it stays observed, so repeats are no-ops
pub fn reveal(doc: &mut Document, observer: &Observer, target: NodeId) -> bool {
    observer.is_observed(target) && doc.add_class(target, REVEALED_CLASS)
}

/// Selector for images whose source is deferred
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Watch every deferred image for loading
pub fn prepare_lazy_images(doc: &Document, images: &Selector, observer: &mut Observer) -> usize {
    let nodes = doc.query_selector_all(images);
    for node in &nodes {
        observer.observe(*node);
    }
    nodes.len()
}

/// Promote `data-src` to `src` and stop watching the image
pub fn load_lazy_image(doc: &mut Document, observer: &mut Observer, target: NodeId) -> bool {
    if !observer.unobserve(target) {
        return false;
    }
    match doc.remove_attr(target, "data-src") {
        Some(src) => {
            doc.set_attr(target, "src", &src);
            debug!(src = %src, "Loaded lazy image");
            true
        }
        None => false,
    }
}
