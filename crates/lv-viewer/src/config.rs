//! Viewer configuration, loadable from TOML.

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration for the viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// Base directory for relative log paths and `sources`.
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit the viewer's own diagnostics as JSON lines.
    #[serde(default)]
    pub json_logs: bool,
    /// Default result cap for `search`.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Default record count for `tail`.
    #[serde(default = "default_tail_count")]
    pub tail_count: usize,
    /// Default bucket cap for `frequency`. None returns every bucket.
    #[serde(default)]
    pub frequency_top: Option<usize>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_search_limit() -> usize {
    100
}

fn default_tail_count() -> usize {
    50
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: default_log_level(),
            json_logs: false,
            search_limit: default_search_limit(),
            tail_count: default_tail_count(),
            frequency_top: None,
        }
    }
}

impl ViewerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("invalid config {path}"))?;
        Ok(config)
    }

    /// Load from `path` if given, else defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
