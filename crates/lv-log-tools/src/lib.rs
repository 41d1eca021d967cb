//! Log analysis tools for LogView.
//!
//! Segments framework log text (`[YYYY-MM-DD HH:MM:SS] env.LEVEL: body`,
//! bodies may span many lines) into typed records, splits each body into a
//! message and a trailing context payload, and ranks messages by frequency.
//! Around that core sit a `LogSource` abstraction for testability, derived
//! views (filter/sort), and 5 analysis tools: parse_logs, search_logs,
//! log_frequency, tail_logs, log_stats.

pub mod error;
pub mod frequency;
pub mod mock;
pub mod parsers;
pub mod source;
pub mod tools;
pub mod types;
pub mod view;

// Re-export key types for convenience
pub use error::{LogError, LogResult};
pub use frequency::aggregate;
pub use mock::MockLogSource;
pub use parsers::parse;
pub use source::{FileLogSource, LogSource};
pub use types::{FrequencySummary, LogLevel, LogRecord, LogTool, ToolResult};
pub use view::{RecordFilter, SortOrder};
