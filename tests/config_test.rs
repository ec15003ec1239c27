//! Configuration and catalog loading tests

mod helpers;

use std::io::Write;

use assert_matches::assert_matches;
use helpers::*;
use portfolio_localizer::{
    config::Settings,
    i18n::{Catalog, Language},
    PortfolioError,
};
use serial_test::serial;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file.flush().expect("flush config");
    file
}

#[test]
#[serial]
fn test_defaults_are_valid() {
    init_test_env();
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.page.initial_language, Language::English);
    assert_eq!(settings.localizer.english_attribute, "data-en");
    assert_eq!(settings.page.language_toggle_ids, vec!["langToggle", "langToggleMobile"]);
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    let file = toml_file(
        r#"
[page]
owner_name = "Layla Haddad"
initial_language = "ar"
anchor_offset = 64.0

[localizer]
icon_classes = ["skill-icon"]
"#,
    );

    let settings = Settings::load(Some(file.path())).expect("settings should load");
    assert_eq!(settings.page.owner_name, "Layla Haddad");
    assert_eq!(settings.page.initial_language, Language::Arabic);
    assert_eq!(settings.page.anchor_offset, 64.0);
    assert_eq!(settings.localizer.icon_classes, vec!["skill-icon"]);
    // Untouched keys keep their defaults
    assert_eq!(settings.page.menu_toggle_id, "mobileMenuToggle");
    assert_eq!(settings.logging.level, "info");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::load(Some(&dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let file = toml_file("[page]\nscroll_threshold = 80.0\n");
    std::env::set_var("PORTFOLIO__PAGE__SCROLL_THRESHOLD", "120");
    std::env::set_var("PORTFOLIO__LOCALIZER__ICON_CLASSES", "skill-icon,award-icon");

    let settings = Settings::load(Some(file.path()));

    std::env::remove_var("PORTFOLIO__PAGE__SCROLL_THRESHOLD");
    std::env::remove_var("PORTFOLIO__LOCALIZER__ICON_CLASSES");

    let settings = settings.expect("settings should load");
    assert_eq!(settings.page.scroll_threshold, 120.0);
    assert_eq!(settings.localizer.icon_classes, vec!["skill-icon", "award-icon"]);
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() {
    let mut settings = Settings::default();
    settings.page.skip_link_target = "about".to_string();
    assert_matches!(settings.validate(), Err(PortfolioError::Config(_)));

    let mut settings = Settings::default();
    settings.page.nav_link_selector = "nav > a".to_string();
    assert_matches!(settings.validate(), Err(PortfolioError::InvalidSelector { .. }));

    let mut settings = Settings::default();
    settings.localizer.arabic_attribute = "data-en".to_string();
    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn test_settings_render_as_loadable_toml() {
    let rendered = Settings::default().to_toml().expect("settings serialize");
    let file = toml_file(&rendered);
    let loaded = Settings::load(Some(file.path())).expect("rendered settings load back");
    assert_eq!(loaded, Settings::default());
}

#[tokio::test]
async fn test_catalog_overrides_merge_over_builtin() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("en.json"), r#"{"contact": {"thanks": "Cheers, talk soon."}}"#)
        .await
        .unwrap();

    let mut catalog = Catalog::builtin(Language::English).unwrap();
    catalog.load_overrides(dir.path()).await.unwrap();

    assert_eq!(catalog.t("contact.thanks", Language::English, None), "Cheers, talk soon.");
    assert_eq!(catalog.t("skip_link.label", Language::English, None), "Skip to main content");
    assert_eq!(catalog.t("contact.thanks", Language::Arabic, None), "شكرًا لتواصلك! سأرد عليك قريبًا.");
}

#[tokio::test]
async fn test_catalog_overrides_reject_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("ar.json"), "{ not json").await.unwrap();

    let mut catalog = Catalog::builtin(Language::English).unwrap();
    let result = catalog.load_overrides(dir.path()).await;
    assert_matches!(result, Err(PortfolioError::Serialization(_)));
}

#[tokio::test]
async fn test_missing_translations_dir_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::builtin(Language::Arabic).unwrap();
    assert!(catalog.load_overrides(&dir.path().join("nope")).await.is_ok());
    assert_eq!(catalog.default_language(), Language::Arabic);
}
