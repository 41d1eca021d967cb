//! Log analysis error types.
//!
//! Only the collaborators around the core can fail. `parsers::parse` and
//! `frequency::aggregate` are total and never return these.

use thiserror::Error;

/// Errors that can occur while loading logs or running a tool.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("source not found: {0}")]
    NotFound(String),

    #[error("invalid regex pattern: {0}")]
    Regex(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for log analysis results.
pub type LogResult<T> = Result<T, LogError>;
