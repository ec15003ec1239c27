//! Message catalog for strings the page script emits itself
//!
//! Localizable page content carries its own variants in markup; this catalog
//! only covers text produced at runtime (notifications, alerts, the skip link
//! and the footer line). Built-in catalogs are embedded at compile time and
//! can be overridden per language from a translations directory.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info, warn};

use super::Language;
use crate::utils::errors::{PortfolioError, Result};

const BUILTIN_EN: &str = include_str!("../../translations/en.json");
const BUILTIN_AR: &str = include_str!("../../translations/ar.json");

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Keyed UI strings per language
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Loaded translations by language
    translations: HashMap<Language, Map<String, Value>>,
    /// Language consulted when a key is missing
    default_language: Language,
}

impl Catalog {
    /// Create a catalog holding only the embedded translations
    pub fn builtin(default_language: Language) -> Result<Self> {
        let mut catalog = Self {
            translations: HashMap::new(),
            default_language,
        };

        for (lang, source) in [(Language::English, BUILTIN_EN), (Language::Arabic, BUILTIN_AR)] {
            let map = parse_catalog(source, lang)?;
            catalog.translations.insert(lang, map);
        }

        Ok(catalog)
    }

    /// Merge `<code>.json` files from a directory over the loaded translations
    ///
    /// Missing files are skipped; a file that fails to parse is an error.
    pub async fn load_overrides(&mut self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            warn!("Translations directory not found: {}", dir.display());
            return Ok(());
        }

        for lang in Language::ALL {
            let file_path = dir.join(format!("{}.json", lang.code()));
            if !file_path.exists() {
                debug!("No translation override for {}", lang);
                continue;
            }

            let content = fs::read_to_string(&file_path).await?;
            let overrides = parse_catalog(&content, lang)?;
            let target = self.translations.entry(lang).or_default();
            merge_maps(target, overrides);
            info!("Loaded translation overrides for language: {}", lang);
        }

        Ok(())
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: Language, params: Option<&TranslationParams>) -> String {
        let text = self
            .get_translation_value(key, lang)
            .or_else(|| {
                if lang != self.default_language {
                    self.get_translation_value(key, self.default_language)
                } else {
                    None
                }
            })
            .map(|value| self.extract_text_from_value(value));

        match text {
            Some(text) => self.format_message(&text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Number of leaf keys loaded for a language
    pub fn key_count(&self, lang: Language) -> usize {
        self.translations.get(&lang).map(count_keys).unwrap_or(0)
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: Language) -> Option<&Value> {
        let translations = self.translations.get(&lang)?;

        // Support nested keys like "notification.email_copied"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        Some(current)
    }

    fn extract_text_from_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            _ => value.to_string(),
        }
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }
}

fn parse_catalog(source: &str, lang: Language) -> Result<Map<String, Value>> {
    match serde_json::from_str(source)? {
        Value::Object(map) => Ok(map),
        _ => Err(PortfolioError::Config(
            format!("Invalid translation file format for {}", lang)
        )),
    }
}

/// Recursively merge `overrides` into `target`, replacing leaves
fn merge_maps(target: &mut Map<String, Value>, overrides: Map<String, Value>) {
    for (key, value) in overrides {
        match value {
            Value::Object(nested) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => merge_maps(existing, nested),
                _ => {
                    target.insert(key, Value::Object(nested));
                }
            },
            value => {
                target.insert(key, value);
            }
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_both_languages() {
        let catalog = Catalog::builtin(Language::English).unwrap();
        assert_eq!(catalog.key_count(Language::English), 4);
        assert_eq!(catalog.key_count(Language::Arabic), 4);
    }

    #[test]
    fn test_lookup_per_language() {
        let catalog = Catalog::builtin(Language::English).unwrap();
        assert_eq!(
            catalog.t("notification.email_copied", Language::English, None),
            "Email copied to clipboard!"
        );
        assert_eq!(
            catalog.t("notification.email_copied", Language::Arabic, None),
            "تم نسخ البريد الإلكتروني!"
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Catalog::builtin(Language::English).unwrap();
        assert_eq!(catalog.t("nope.missing", Language::Arabic, None), "nope.missing");
    }

    #[test]
    fn test_message_formatting() {
        let catalog = Catalog::builtin(Language::English).unwrap();

        let mut params = HashMap::new();
        params.insert("year".to_string(), "2026".to_string());
        params.insert("owner".to_string(), "Jane Doe".to_string());

        let result = catalog.t("footer.copyright", Language::English, Some(&params));
        assert_eq!(result, "© 2026 Jane Doe. All rights reserved.");
    }

    #[test]
    fn test_merge_replaces_leaves_only() {
        let mut target = parse_catalog(BUILTIN_EN, Language::English).unwrap();
        let overrides: Map<String, Value> =
            serde_json::from_str(r#"{"contact": {"thanks": "Cheers!"}}"#).unwrap();
        merge_maps(&mut target, overrides);

        assert_eq!(target["contact"]["thanks"], "Cheers!");
        assert_eq!(target["skip_link"]["label"], "Skip to main content");
    }
}
