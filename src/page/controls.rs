//! Control element lookup
//!
//! The menu and language controls are required: a page without them cannot
//! be wired and session startup fails. Everything else is optional and
//! simply disables the behavior attached to it.

use tracing::debug;

use crate::config::PageConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::utils::errors::{PortfolioError, Result};

/// Elements the page session attaches behavior to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub menu_toggle: NodeId,
    pub mobile_menu: NodeId,
    pub language_toggles: Vec<NodeId>,
    pub navbar: Option<NodeId>,
    pub hero: Option<NodeId>,
    pub email_link: Option<NodeId>,
    pub contact_form: Option<NodeId>,
    pub footer_copyright: Option<NodeId>,
}

impl Controls {
    /// Resolve all controls, failing on the first missing required one
    pub fn resolve(doc: &Document, config: &PageConfig) -> Result<Self> {
        let required = |id: &str| {
            doc.get_element_by_id(id).ok_or_else(|| PortfolioError::MissingControl {
                id: id.to_string(),
            })
        };
        let optional = |selector: &str| -> Result<Option<NodeId>> {
            let found = doc.query_selector(&Selector::parse(selector)?);
            if found.is_none() {
                debug!(selector = selector, "Optional element not present");
            }
            Ok(found)
        };

        let menu_toggle = required(config.menu_toggle_id.as_str())?;
        let mobile_menu = required(config.mobile_menu_id.as_str())?;
        let language_toggles = config
            .language_toggle_ids
            .iter()
            .map(|id| required(id.as_str()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            menu_toggle,
            mobile_menu,
            language_toggles,
            navbar: doc.get_element_by_id(&config.navbar_id),
            hero: optional(config.hero_selector.as_str())?,
            email_link: optional(config.email_link_selector.as_str())?,
            contact_form: optional(config.contact_form_selector.as_str())?,
            footer_copyright: optional(config.footer_copyright_selector.as_str())?,
        })
    }

    /// Whether `target` is one of the language toggles or inside one
    pub fn is_language_toggle(&self, doc: &Document, target: NodeId) -> bool {
        self.language_toggles
            .iter()
            .any(|toggle| doc.contains(*toggle, target))
    }
}
