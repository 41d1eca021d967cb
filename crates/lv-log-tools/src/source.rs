//! Log source abstraction: deliver log text from files, stdin, or mocks.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::error::{LogError, LogResult};

/// Path that reads from standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Abstraction for reading log text from various sources.
///
/// Sources hand over the complete buffer; records span lines, so splitting
/// happens in the segmenter, not here.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Read the full text behind the given path/identifier.
    async fn read_text(&self, path: &str) -> LogResult<String>;

    /// List available log sources (e.g., log files in the log directory).
    async fn list_sources(&self) -> LogResult<Vec<String>>;
}

/// Reads logs from the local filesystem, or stdin for `-`.
#[derive(Debug, Clone, Default)]
pub struct FileLogSource {
    /// Base directory for relative paths and `list_sources`.
    log_dir: Option<PathBuf>,
}

impl FileLogSource {
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        Self { log_dir }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        match self.log_dir {
            Some(ref dir) if p.is_relative() => dir.join(p),
            _ => p.to_path_buf(),
        }
    }
}

#[async_trait]
impl LogSource for FileLogSource {
    async fn read_text(&self, path: &str) -> LogResult<String> {
        if path == STDIN_PATH {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(|e| LogError::Io(format!("stdin: {e}")))?;
            return Ok(String::from_utf8_lossy(&buf).into_owned());
        }

        let resolved = self.resolve(path);
        let bytes = tokio::fs::read(&resolved).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::NotFound(resolved.display().to_string())
            } else {
                LogError::Io(format!("{}: {e}", resolved.display()))
            }
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn list_sources(&self) -> LogResult<Vec<String>> {
        let Some(ref dir) = self.log_dir else {
            return Ok(Vec::new());
        };
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| LogError::Io(format!("{}: {e}", dir.display())))?;

        let mut found = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LogError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "log") {
                found.push(path.display().to_string());
            }
        }
        found.sort();
        Ok(found)
    }
}
