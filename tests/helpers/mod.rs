//! Test helpers module
//!
//! Shared fixture page and session setup for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use portfolio_localizer::{
    config::Settings,
    dom::{Document, NodeId, Selector},
    i18n::{Catalog, Language},
    page::PageSession,
};

static INIT: Once = Once::new();

/// Year stamped into the footer by [`start_session`]
pub const TEST_YEAR: i32 = 2026;

/// A trimmed-down portfolio page exercising every control and shape
pub const PORTFOLIO_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Portfolio</title><style>.hero > h1 { color: #fff; }</style></head>
<body>
<nav id="navbar" class="navbar">
  <a href="#about" class="nav-link" data-en="About" data-ar="نبذة">About</a>
  <a href="#projects" class="nav-link" data-en="Projects" data-ar="المشاريع">Projects</a>
  <button id="langToggle" class="lang-toggle">عربي</button>
  <button id="mobileMenuToggle" class="mobile-menu-toggle"><span class="bar"></span></button>
</nav>
<div id="mobileMenu" class="mobile-menu">
  <a href="#about" class="mobile-link" data-en="About" data-ar="نبذة">About</a>
  <button id="langToggleMobile" class="lang-toggle">عربي</button>
</div>
<header class="hero">
  <h1 data-en="Hello, I am Mohamed" data-ar="مرحبا، أنا محمد">Hello, I am Mohamed</h1>
  <img data-src="portrait.jpg" alt="Portrait">
</header>
<section id="about" class="section">
  <p id="intro" data-en="I build reliable software." data-ar="أبني برمجيات موثوقة.">I build reliable software.</p>
  <ul>
    <li id="principle" data-en="Clarity" data-ar="الوضوح"><span class="principle-icon">★</span> Clarity</li>
  </ul>
  <div id="skill" class="skill-card" data-en="Systems" data-ar="الأنظمة">Systems</div>
  <div id="mixed" data-en="Lead text" data-ar="نص رئيسي">Lead text <strong>kept</strong></div>
</section>
<section id="projects" class="section">
  <div class="project-card"><a id="view" href="https://example.com" data-en="View" data-ar="عرض">View <span class="arrow">→</span></a></div>
</section>
<section id="contact" class="section">
  <a class="email-link" href="mailto:hello@example.com">hello@example.com</a>
  <form class="contact-form"><input name="name"><input name="email"><textarea name="message"></textarea><button type="submit" data-en="Send" data-ar="إرسال">Send</button></form>
</section>
<footer><p class="footer-copyright">© 2024 Mohamed Banani</p></footer>
<script>if (window.innerWidth < 768) { document.body.dataset.small = "1"; }</script>
</body>
</html>
"##;

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Start a session over the fixture page with default settings
pub fn start_session() -> PageSession {
    start_session_with(PORTFOLIO_PAGE, &Settings::default())
}

/// Start a session over arbitrary markup
pub fn start_session_with(html: &str, settings: &Settings) -> PageSession {
    init_test_env();
    let document = Document::parse(html).expect("fixture should parse");
    let catalog = Catalog::builtin(Language::English).expect("builtin catalog should load");
    PageSession::start_at(document, settings, catalog, TEST_YEAR).expect("session should start")
}

/// Look up an element by id, panicking when it is absent
pub fn by_id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{}", id))
}

/// First element matching `selector`
pub fn select(doc: &Document, selector: &str) -> NodeId {
    let parsed = Selector::parse(selector).expect("valid selector");
    doc.query_selector(&parsed)
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
}

/// All elements matching `selector`
pub fn select_all(doc: &Document, selector: &str) -> Vec<NodeId> {
    doc.query_selector_all(&Selector::parse(selector).expect("valid selector"))
}
