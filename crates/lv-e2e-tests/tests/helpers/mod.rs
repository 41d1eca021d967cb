//! Shared test harness for E2E integration tests.
//!
//! Writes fixture logs to a temporary directory and drives them through
//! the real `FileLogSource`, `ToolRegistry` and CLI mapping.

#![allow(dead_code)]

use std::path::Path;

use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

use lv_log_tools::FileLogSource;
use lv_viewer::cli::{Cli, Invocation};
use lv_viewer::config::ViewerConfig;
use lv_viewer::registry::ToolRegistry;

/// A realistic application log: exception with its trace inside the
/// context payload, a bare stack trace, repeated messages, lowercase and
/// out-of-vocabulary levels.
pub const APP_LOG: &str = r#"[2024-03-02 09:15:00] production.INFO: Scheduler started
[2024-03-02 09:15:03] production.ERROR: Call to undefined method App\Models\User::team() {"userId":17,"exception":"[object] (BadMethodCallException(code: 0): Call to undefined method App\\Models\\User::team() at /app/vendor/ForwardsCalls.php:67)
[stacktrace]
#0 /app/app/Http/Controllers/TeamController.php(21): forwardCallTo()
#1 {main}
"}
[2024-03-02 09:15:04] production.warning: Rate limit approaching {"remaining":3}
[2024-03-02 09:15:09] production.ERROR: Call to undefined method App\Models\User::team()
#0 /app/app/Jobs/SyncTeams.php(40): forwardCallTo()
#1 /app/artisan(35): handle()
[2024-03-02 09:15:12] production.INFO: Mail sent {"to":"ops@example.com"}
[2024-03-02 09:15:20] local.NOTICE: Config cached
[2024-03-02 09:15:21] production.INFO: Call to undefined method App\Models\User::team()
[2024-03-02 09:15:30] production.SQL: select * from users
"#;

/// End-to-end test harness over a temporary log directory.
pub struct TestHarness {
    /// Holds the fixture directory alive for the test's duration.
    pub dir: TempDir,
    /// File source rooted at `dir`.
    pub source: FileLogSource,
    /// Viewer tool registry (all 5 log tools).
    pub registry: ToolRegistry,
}

impl TestHarness {
    /// Empty log directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let source = FileLogSource::new(Some(dir.path().to_path_buf()));
        Self {
            dir,
            source,
            registry: ToolRegistry::with_defaults(),
        }
    }

    /// Log directory containing `app.log` with [`APP_LOG`].
    pub fn with_app_log() -> Self {
        let h = Self::new();
        h.write_log("app.log", APP_LOG);
        h
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_log(&self, name: &str, text: &str) {
        std::fs::write(self.dir.path().join(name), text).expect("write fixture");
    }

    /// Run a tool by name and return the serialized `ToolResult`.
    pub async fn run(&self, tool: &str, args: Value) -> Value {
        self.registry
            .execute(tool, args, &self.source)
            .await
            .expect("tool execution")
    }

    /// Parse CLI arguments exactly as the binary does and execute them.
    pub async fn run_cli(&self, argv: &[&str]) -> Result<Value, String> {
        let cli = Cli::try_parse_from(argv).map_err(|e| e.to_string())?;
        match cli.command.invocation(&ViewerConfig::default()) {
            Invocation::Tool { name, args } => {
                self.registry.execute(name, args, &self.source).await
            }
            Invocation::ListTools => {
                serde_json::to_value(self.registry.list_tools()).map_err(|e| e.to_string())
            }
            Invocation::ListSources => {
                use lv_log_tools::LogSource;
                let sources = self.source.list_sources().await.map_err(|e| e.to_string())?;
                Ok(serde_json::json!(sources))
            }
        }
    }
}
