//! Page languages and the page-lifetime language state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::PortfolioError;

/// A language the page can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

/// Text directionality written to the `dir` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// BCP 47 code written to the `lang` attribute
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    /// The language's own name, as shown on a toggle offering it
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "عربي",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PortfolioError;

    /// Accepts bare codes and regional locales (`ar-EG` -> Arabic)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.split(['-', '_']).next().unwrap_or(s).trim().to_ascii_lowercase();
        match code.as_str() {
            "en" => Ok(Language::English),
            "ar" => Ok(Language::Arabic),
            _ => Err(PortfolioError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Language currently rendered on the page
///
/// Owned by the page session and handed to the localizer explicitly. It is
/// never persisted; a new session always starts from its initial language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    pub fn new(initial: Language) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Flip between English and Arabic, returning the new language
    pub fn toggle(&mut self) -> Language {
        self.current = self.current.other();
        self.current
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
