//! Portfolio Localizer
//!
//! Main application entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use portfolio_localizer::{
    config::Settings,
    dom::Document,
    i18n::{Catalog, Language},
    page::PageSession,
    utils::logging,
    PortfolioError,
};

/// Render a bilingual portfolio page in the requested language
#[derive(Debug, Parser)]
#[command(name = "portfolio-localizer", version, about)]
struct Cli {
    /// HTML page authored in the initial language
    input: PathBuf,

    /// Language to render (`en` or `ar`)
    #[arg(short, long, default_value = "en")]
    lang: Language,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    settings.validate()?;

    if cli.dump_config {
        println!("{}", settings.to_toml()?);
        return Ok(());
    }

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", portfolio_localizer::info());

    let source = tokio::fs::read_to_string(&cli.input)
        .await
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    if source.trim().is_empty() {
        return Err(PortfolioError::InvalidInput(format!("{} is empty", cli.input.display())).into());
    }
    let document = Document::parse(&source).with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    // Initialize message catalog
    let mut catalog = Catalog::builtin(settings.i18n.default_language)?;
    if let Some(dir) = settings.i18n.translations_dir.as_deref() {
        if let Err(e) = catalog.load_overrides(Path::new(dir)).await {
            if !e.is_recoverable() {
                return Err(e).context("Failed to load translation overrides");
            }
            warn!(severity = %e.severity(), error = %e, "Falling back to built-in messages");
        }
    }
    info!(
        keys = catalog.key_count(settings.page.initial_language),
        "Message catalog ready"
    );

    let mut session = PageSession::start(document, &settings, catalog).context("Failed to start page session")?;

    let skipped = match session.set_language(cli.lang) {
        Some(report) => report.skipped,
        None => Vec::new(),
    };
    for skip in &skipped {
        warn!(node = skip.node.index(), tag = %skip.tag, reason = %skip.reason, "Element left unchanged");
    }

    let html = session.into_document().to_html();
    match cli.output.as_ref() {
        Some(path) => tokio::fs::write(path, html.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    info!(language = %cli.lang, skipped = skipped.len(), "Page rendered");
    Ok(())
}
