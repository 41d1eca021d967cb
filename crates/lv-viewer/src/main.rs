//! LogView viewer: command-line front end for framework log analysis.
//!
//! Loads configuration, resolves the subcommand to a log tool, runs it
//! against the filesystem (or stdin) and prints the JSON result.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lv_log_tools::{FileLogSource, LogSource};
use lv_viewer::cli::{Cli, Invocation};
use lv_viewer::config::ViewerConfig;
use lv_viewer::registry::ToolRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Load config ─────────────────────────────────────────────
    let mut config = ViewerConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.log_dir.clone() {
        config.log_dir = Some(dir);
    }

    init_tracing(&config);
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = ?config.log_dir,
        "lv-viewer starting"
    );

    // ── Build tool registry ─────────────────────────────────────
    let registry = ToolRegistry::with_defaults();
    tracing::debug!(tool_count = registry.len(), "tool registry initialized");

    // ── Log source ──────────────────────────────────────────────
    let source = FileLogSource::new(config.log_dir.as_ref().map(PathBuf::from));

    let output = match cli.command.invocation(&config) {
        Invocation::Tool { name, args } => registry
            .execute(name, args, &source)
            .await
            .map_err(anyhow::Error::msg)?,
        Invocation::ListTools => serde_json::to_value(registry.list_tools())?,
        Invocation::ListSources => serde_json::to_value(source.list_sources().await?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Diagnostics go to stderr so stdout stays pure JSON.
fn init_tracing(config: &ViewerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
