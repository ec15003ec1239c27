//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::dom::Selector;
use crate::utils::errors::{PortfolioError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_localizer_config(&settings.localizer)?;
    validate_page_config(&settings.page)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate content localizer configuration
fn validate_localizer_config(config: &super::LocalizerConfig) -> Result<()> {
    if config.english_attribute.is_empty() || config.arabic_attribute.is_empty() {
        return Err(PortfolioError::Config(
            "Both variant attribute names are required".to_string()
        ));
    }

    if config.english_attribute == config.arabic_attribute {
        return Err(PortfolioError::Config(
            "English and Arabic variant attributes must differ".to_string()
        ));
    }

    if config.icon_classes.is_empty() {
        return Err(PortfolioError::Config(
            "At least one icon class must be configured".to_string()
        ));
    }

    if let Some(bad) = config.icon_classes.iter().find(|c| c.is_empty() || c.contains(char::is_whitespace)) {
        return Err(PortfolioError::Config(
            format!("Invalid icon class name: '{}'", bad)
        ));
    }

    Ok(())
}

/// Validate page wiring configuration
fn validate_page_config(config: &super::PageConfig) -> Result<()> {
    if config.menu_toggle_id.is_empty() || config.mobile_menu_id.is_empty() {
        return Err(PortfolioError::Config(
            "Mobile menu control ids are required".to_string()
        ));
    }

    if config.language_toggle_ids.is_empty() {
        return Err(PortfolioError::Config(
            "At least one language toggle id is required".to_string()
        ));
    }

    let selectors = [
        &config.mobile_link_selector,
        &config.reveal_selector,
        &config.section_selector,
        &config.nav_link_selector,
        &config.hero_selector,
        &config.email_link_selector,
        &config.contact_form_selector,
        &config.footer_copyright_selector,
    ];
    for selector in selectors {
        Selector::parse(selector)?;
    }

    if !config.skip_link_target.starts_with('#') {
        return Err(PortfolioError::Config(
            format!("Skip link target must be a fragment, got '{}'", config.skip_link_target)
        ));
    }

    let distances = [
        ("scroll_threshold", config.scroll_threshold),
        ("anchor_offset", config.anchor_offset),
        ("highlight_offset", config.highlight_offset),
        ("viewport_width", config.viewport_width),
        ("parallax_min_width", config.parallax_min_width),
        ("parallax_speed", config.parallax_speed),
    ];
    if let Some((name, value)) = distances.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
        return Err(PortfolioError::Config(
            format!("{} must be a non-negative number, got {}", name, value)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortfolioError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortfolioError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_identical_variant_attributes_rejected() {
        let mut settings = Settings::default();
        settings.localizer.arabic_attribute = "data-en".to_string();
        assert_matches!(validate_settings(&settings), Err(PortfolioError::Config(_)));
    }

    #[test]
    fn test_icon_class_with_whitespace_rejected() {
        let mut settings = Settings::default();
        settings.localizer.icon_classes.push("two words".to_string());
        assert_matches!(validate_settings(&settings), Err(PortfolioError::Config(msg)) if msg.contains("two words"));
    }

    #[test]
    fn test_bad_selector_rejected() {
        let mut settings = Settings::default();
        settings.page.reveal_selector = ".section > .card".to_string();
        assert_matches!(validate_settings(&settings), Err(PortfolioError::InvalidSelector { .. }));
    }

    #[test]
    fn test_negative_offset_rejected() {
        let mut settings = Settings::default();
        settings.page.anchor_offset = -1.0;
        assert_matches!(validate_settings(&settings), Err(PortfolioError::Config(msg)) if msg.contains("anchor_offset"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(PortfolioError::Config(_)));
    }
}
