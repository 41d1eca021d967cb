//! Mock log source for testing: serves pre-loaded log text.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{LogError, LogResult};
use crate::source::LogSource;

/// Path of the application log served by [`MockLogSource::with_app_sample`].
pub const APP_SAMPLE_PATH: &str = "storage/logs/app.log";

/// A mock log source that serves pre-loaded text by path.
pub struct MockLogSource {
    files: HashMap<String, String>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given contents.
    pub fn add_file(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Create a mock with a sample application log: 8 records, stack traces,
    /// context payloads, two environments and one out-of-vocabulary level.
    pub fn with_app_sample() -> Self {
        let mut m = Self::new();
        m.add_file(APP_SAMPLE_PATH, APP_SAMPLE);
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

const APP_SAMPLE: &str = r#"[2024-01-15 12:00:01] production.INFO: Application booted
[2024-01-15 12:00:05] production.ERROR: SQLSTATE[HY000] [2002] Connection refused {"exception":"[object] (PDOException(code: 2002): Connection refused at /app/vendor/Connector.php:70)
[stacktrace]
#0 /app/vendor/Connection.php(112): connect()
#1 {main}
"}
[2024-01-15 12:00:09] production.WARNING: Slow request {"uri":"/checkout","ms":2400}
[2024-01-15 12:00:12] production.ERROR: SQLSTATE[HY000] [2002] Connection refused
#0 /app/vendor/Connection.php(112): connect()
#1 /app/artisan(37): handle()
[2024-01-15 12:00:20] staging.debug: Cache hit {"key":"settings"}
[2024-01-15 12:00:31] production.CRITICAL: Queue worker died
[2024-01-15 12:00:40] production.ERROR: SQLSTATE[HY000] [2002] Connection refused {"retry":3}
[2024-01-15 12:00:45] staging.TRACE: Custom channel output
"#;

#[async_trait]
impl LogSource for MockLogSource {
    async fn read_text(&self, path: &str) -> LogResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LogError::NotFound(path.to_string()))
    }

    async fn list_sources(&self) -> LogResult<Vec<String>> {
        let mut paths: Vec<String> = self.files.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }
}
