//! Error handling for the portfolio localizer
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the portfolio localizer
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Markup error at byte {position}: {message}")]
    Markup { position: u64, message: String },

    #[error("Required control element not found: #{id}")]
    MissingControl { id: String },

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for portfolio localizer operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortfolioError::Config(_) => false,
            PortfolioError::ConfigSource(_) => false,
            PortfolioError::Markup { .. } => false,
            PortfolioError::MissingControl { .. } => false,
            PortfolioError::UnknownLanguage(_) => false,
            PortfolioError::InvalidSelector { .. } => false,
            PortfolioError::Serialization(_) => false,
            PortfolioError::Io(_) => true,
            PortfolioError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::Config(_) => ErrorSeverity::Critical,
            PortfolioError::ConfigSource(_) => ErrorSeverity::Critical,
            PortfolioError::MissingControl { .. } => ErrorSeverity::Critical,
            PortfolioError::UnknownLanguage(_) => ErrorSeverity::Warning,
            PortfolioError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
