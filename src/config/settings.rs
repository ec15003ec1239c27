//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub localizer: LocalizerConfig,
    pub page: PageConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Content localizer configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalizerConfig {
    /// Attribute holding the English variant
    pub english_attribute: String,
    /// Attribute holding the Arabic variant
    pub arabic_attribute: String,
    /// Class names that mark the icon inside an icon-bearing list item
    pub icon_classes: Vec<String>,
}

/// Page wiring configuration: control ids, selectors and scroll geometry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageConfig {
    pub initial_language: Language,
    pub owner_name: String,
    pub navbar_id: String,
    pub menu_toggle_id: String,
    pub mobile_menu_id: String,
    pub language_toggle_ids: Vec<String>,
    pub mobile_link_selector: String,
    pub reveal_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    pub hero_selector: String,
    pub email_link_selector: String,
    pub contact_form_selector: String,
    pub footer_copyright_selector: String,
    pub skip_link_target: String,
    /// Scroll offset past which the navbar is marked as scrolled
    pub scroll_threshold: f64,
    /// Fixed header height subtracted from anchor scroll targets
    pub anchor_offset: f64,
    /// Offset applied to section tops when highlighting navigation links
    pub highlight_offset: f64,
    pub viewport_width: f64,
    pub parallax_min_width: f64,
    pub parallax_speed: f64,
}

/// Internationalization configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: Language,
    /// Optional directory with `en.json` / `ar.json` catalog overrides
    pub translations_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; console only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings layered as defaults, then a configuration file, then
    /// `PORTFOLIO__SECTION__KEY` environment variables
    ///
    /// An explicit path must exist; the implicit `config` file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("PORTFOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("localizer.icon_classes")
                    .with_list_parse_key("page.language_toggle_ids")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PortfolioError> {
        super::validation::validate_settings(self)
    }

    /// Render the settings as TOML, e.g. as a starting point for a config file
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            localizer: LocalizerConfig::default(),
            page: PageConfig::default(),
            i18n: I18nConfig {
                default_language: Language::English,
                translations_dir: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            english_attribute: "data-en".to_string(),
            arabic_attribute: "data-ar".to_string(),
            icon_classes: vec![
                "principle-icon".to_string(),
                "achievement-icon".to_string(),
                "experience-icon".to_string(),
            ],
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            initial_language: Language::English,
            owner_name: "Mohamed Banani".to_string(),
            navbar_id: "navbar".to_string(),
            menu_toggle_id: "mobileMenuToggle".to_string(),
            mobile_menu_id: "mobileMenu".to_string(),
            language_toggle_ids: vec!["langToggle".to_string(), "langToggleMobile".to_string()],
            mobile_link_selector: ".mobile-link".to_string(),
            reveal_selector: ".section, .skill-card, .project-card, .experience-card".to_string(),
            section_selector: ".section".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            hero_selector: ".hero".to_string(),
            email_link_selector: ".email-link".to_string(),
            contact_form_selector: ".contact-form".to_string(),
            footer_copyright_selector: ".footer-copyright".to_string(),
            skip_link_target: "#about".to_string(),
            scroll_threshold: 50.0,
            anchor_offset: 80.0,
            highlight_offset: 100.0,
            viewport_width: 1280.0,
            parallax_min_width: 768.0,
            parallax_speed: 0.5,
        }
    }
}
