//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the localizer and the page session.

use std::path::Path;

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::localizer::LocalizationReport;
use crate::utils::errors::{PortfolioError, Result};

/// Initialize logging based on configuration
///
/// Console output goes to stderr so that rendered markup on stdout stays clean.
/// When a log directory is configured, a daily rolling file is added; the
/// returned guard must be held for as long as file logging should flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PortfolioError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(Path::new(dir), "portfolio-localizer.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| PortfolioError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a localization pass
pub fn log_localization_pass(report: &LocalizationReport) {
    if report.skipped.is_empty() {
        info!(
            language = %report.language,
            updated = report.updated,
            "Translation update complete"
        );
    } else {
        warn!(
            language = %report.language,
            updated = report.updated,
            skipped = report.skipped.len(),
            "Translation update complete with skipped elements"
        );
    }
}

/// Log a handled page event together with the host effects it produced
pub fn log_page_event(event: &str, effects: usize) {
    debug!(event = event, effects = effects, "Page event handled");
}
