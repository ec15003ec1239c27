//! Page session
//!
//! Owns the document and the language state for the lifetime of one page
//! load, performs the startup wiring and dispatches page events. Handlers
//! run to completion one at a time; anything that must happen outside the
//! tree is returned to the host as an [`Effect`].

use std::collections::HashMap;

use chrono::Datelike;
use tracing::{debug, info};

use super::controls::Controls;
use super::enhancements::{insert_skip_link, stamp_footer_year};
use super::events::{Effect, PageEvent};
use super::language::switch_language;
use super::menu::MobileMenu;
use super::observers::{load_lazy_image, prepare_lazy_images, prepare_reveal, reveal, Observer, LAZY_IMAGE_SELECTOR};
use super::scroll::{anchor_scroll_target, apply_parallax, highlight_active_section, update_navbar, LayoutBox};
use crate::config::{PageConfig, Settings};
use crate::dom::{Document, NodeId, Selector};
use crate::i18n::{Catalog, Language, LanguageState};
use crate::localizer::{LocalizationReport, Localizer};
use crate::utils::errors::Result;
use crate::utils::helpers::normalize_whitespace;
use crate::utils::logging::log_page_event;

/// Selectors parsed once at startup
#[derive(Debug, Clone)]
struct PageSelectors {
    mobile_link: Selector,
    section: Selector,
    nav_link: Selector,
}

/// Interactive state of one loaded page
#[derive(Debug, Clone)]
pub struct PageSession {
    document: Document,
    config: PageConfig,
    catalog: Catalog,
    language: LanguageState,
    localizer: Localizer,
    controls: Controls,
    menu: MobileMenu,
    selectors: PageSelectors,
    anchors: Vec<NodeId>,
    reveal: Observer,
    lazy_images: Observer,
    layout: HashMap<NodeId, LayoutBox>,
    pending_clipboard_writes: usize,
}

impl PageSession {
    /// Wire a freshly loaded page, stamping the footer with the current year
    pub fn start(document: Document, settings: &Settings, catalog: Catalog) -> Result<Self> {
        Self::start_at(document, settings, catalog, chrono::Local::now().year())
    }

    /// Wire a freshly loaded page with an explicit footer year
    ///
    /// Fails if a required control is missing; the markup is assumed to be
    /// authored in the configured initial language.
    pub fn start_at(mut document: Document, settings: &Settings, catalog: Catalog, year: i32) -> Result<Self> {
        let config = settings.page.clone();
        let controls = Controls::resolve(&document, &config)?;
        let menu = MobileMenu::new(controls.menu_toggle, controls.mobile_menu);
        let selectors = PageSelectors {
            mobile_link: Selector::parse(&config.mobile_link_selector)?,
            section: Selector::parse(&config.section_selector)?,
            nav_link: Selector::parse(&config.nav_link_selector)?,
        };

        let anchors = document.query_selector_all(&Selector::parse("a[href^=\"#\"]")?);

        let localizer = Localizer::scan(&document, &settings.localizer)?;

        let mut reveal = Observer::default();
        prepare_reveal(&mut document, &Selector::parse(&config.reveal_selector)?, &mut reveal);

        let mut lazy_images = Observer::default();
        prepare_lazy_images(&document, &Selector::parse(LAZY_IMAGE_SELECTOR)?, &mut lazy_images);

        let initial = config.initial_language;
        if let Some(footer) = controls.footer_copyright {
            stamp_footer_year(&mut document, footer, &catalog, initial, &config.owner_name, year);
        }

        let label = catalog.t("skip_link.label", initial, None);
        insert_skip_link(&mut document, &config.skip_link_target, &label);

        info!(
            localizable = localizer.len(),
            reveal_targets = reveal.len(),
            lazy_images = lazy_images.len(),
            language = %initial,
            "Page session started"
        );

        Ok(Self {
            document,
            language: LanguageState::new(initial),
            config,
            catalog,
            localizer,
            controls,
            menu,
            selectors,
            anchors,
            reveal,
            lazy_images,
            layout: HashMap::new(),
            pending_clipboard_writes: 0,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open(&self.document)
    }

    pub fn is_watching_for_reveal(&self, node: NodeId) -> bool {
        self.reveal.is_observed(node)
    }

    pub fn is_lazy_image_pending(&self, node: NodeId) -> bool {
        self.lazy_images.is_observed(node)
    }

    /// Record where an element sits on the page, for scroll handling
    pub fn set_layout(&mut self, node: NodeId, bounds: LayoutBox) {
        self.layout.insert(node, bounds);
    }

    /// Flip the language, as if a language toggle was clicked
    pub fn toggle_language(&mut self) -> LocalizationReport {
        switch_language(
            &mut self.document,
            &mut self.language,
            &self.controls.language_toggles,
            &self.localizer,
        )
    }

    /// Switch to `lang` unless it is already showing
    pub fn set_language(&mut self, lang: Language) -> Option<LocalizationReport> {
        if self.language.current() == lang {
            return None;
        }
        Some(self.toggle_language())
    }

    /// Handle one page event and return the effects for the host
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let name = event.name();
        let effects = match event {
            PageEvent::Scroll { y } => {
                self.on_scroll(y);
                Vec::new()
            }
            PageEvent::Click { target } => self.on_click(target),
            PageEvent::DoubleClick { target } => self.on_double_click(target),
            PageEvent::KeyDown { key } => {
                self.on_key_down(&key);
                Vec::new()
            }
            PageEvent::Intersect { target, is_intersecting } => {
                if is_intersecting {
                    self.on_intersect(target);
                }
                Vec::new()
            }
            PageEvent::Submit { form, fields } => self.on_submit(form, &fields),
            PageEvent::ClipboardWritten { success } => self.on_clipboard_written(success),
        };

        log_page_event(name, effects.len());
        effects
    }

    fn on_scroll(&mut self, y: f64) {
        if let Some(navbar) = self.controls.navbar {
            update_navbar(&mut self.document, navbar, y, self.config.scroll_threshold);
        }

        highlight_active_section(
            &mut self.document,
            &self.selectors.section,
            &self.selectors.nav_link,
            &self.layout,
            y,
            self.config.highlight_offset,
        );

        if let Some(hero) = self.controls.hero {
            if self.config.viewport_width > self.config.parallax_min_width {
                apply_parallax(&mut self.document, hero, y, self.config.parallax_speed);
            }
        }
    }

    fn on_click(&mut self, target: NodeId) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.document.contains(self.controls.menu_toggle, target) {
            self.menu.toggle(&mut self.document);
        }

        if self.document.closest(target, &self.selectors.mobile_link).is_some() {
            self.menu.close(&mut self.document);
        }

        if let Some(anchor) = self.anchors.iter().copied().find(|a| self.document.contains(*a, target)) {
            if let Some(top) = anchor_scroll_target(&self.document, anchor, &self.layout, self.config.anchor_offset) {
                effects.push(Effect::ScrollTo { top });
            }
        }

        if self.controls.is_language_toggle(&self.document, target) {
            self.toggle_language();
        }

        // Document-level listener runs last, after the target's own handlers
        if self.menu.is_open(&self.document) && self.menu.is_outside(&self.document, target) {
            debug!("Closing mobile menu after outside click");
            self.menu.close(&mut self.document);
        }

        effects
    }

    fn on_double_click(&mut self, target: NodeId) -> Vec<Effect> {
        let Some(email_link) = self.controls.email_link else {
            return Vec::new();
        };
        if !self.document.contains(email_link, target) {
            return Vec::new();
        }

        self.pending_clipboard_writes += 1;
        vec![Effect::WriteClipboard {
            text: normalize_whitespace(&self.document.text_content(email_link)),
        }]
    }

    fn on_clipboard_written(&mut self, success: bool) -> Vec<Effect> {
        if self.pending_clipboard_writes == 0 {
            return Vec::new();
        }
        self.pending_clipboard_writes -= 1;

        // Failed writes are dropped without telling the visitor
        if !success {
            return Vec::new();
        }
        vec![Effect::Notify {
            message: self.catalog.t("notification.email_copied", self.language.current(), None),
        }]
    }

    fn on_key_down(&mut self, key: &str) {
        if key == "Escape" && self.menu.is_open(&self.document) {
            self.menu.close(&mut self.document);
        }
    }

    fn on_intersect(&mut self, target: NodeId) {
        reveal(&mut self.document, &self.reveal, target);
        load_lazy_image(&mut self.document, &mut self.lazy_images, target);
    }

    fn on_submit(&mut self, form: NodeId, fields: &HashMap<String, String>) -> Vec<Effect> {
        if self.controls.contact_form != Some(form) {
            return Vec::new();
        }

        let field = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();
        let (name, email, message) = (field("name"), field("email"), field("message"));
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Vec::new();
        }

        info!(name = name, email = email, message = message, "Form submitted");
        vec![
            Effect::Alert {
                message: self.catalog.t("contact.thanks", self.language.current(), None),
            },
            Effect::ResetForm { form },
        ]
    }
}
