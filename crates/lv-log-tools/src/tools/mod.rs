//! Log analysis tools driven by JSON arguments.
//!
//! - parse_logs: segment a log into records for export
//! - search_logs: regex search with level/environment filters and sorting
//! - log_frequency: ranked message frequency table
//! - tail_logs: last N records with optional severity floor
//! - log_stats: counts by level and environment, time range

pub mod log_frequency;
pub mod log_stats;
pub mod parse_logs;
pub mod search_logs;
pub mod tail_logs;

use serde_json::{Value, json};

use crate::error::{LogError, LogResult};
use crate::parsers;
use crate::source::LogSource;
use crate::types::{LogLevel, LogRecord, LogTool, ToolResult};

pub use log_frequency::LogFrequency;
pub use log_stats::LogStats;
pub use parse_logs::ParseLogs;
pub use search_logs::SearchLogs;
pub use tail_logs::TailLogs;

/// Every log tool, in listing order.
pub fn all_tools() -> Vec<Box<dyn LogTool>> {
    vec![
        Box::new(ParseLogs),
        Box::new(SearchLogs),
        Box::new(LogFrequency),
        Box::new(TailLogs),
        Box::new(LogStats),
    ]
}

/// Level names accepted by tool arguments, for JSON schemas.
pub(crate) fn level_enum() -> Value {
    json!(["debug", "info", "notice", "warning", "error", "critical", "alert", "emergency"])
}

pub(crate) fn path_arg(args: &Value) -> LogResult<&str> {
    args["path"]
        .as_str()
        .ok_or_else(|| LogError::InvalidArgument("missing 'path' argument".into()))
}

pub(crate) fn usize_arg(args: &Value, key: &str, default: usize) -> usize {
    args[key]
        .as_u64()
        .map_or(default, |n| usize::try_from(n).unwrap_or(usize::MAX))
}

/// Minimum-severity argument; must name a known level.
pub(crate) fn min_level_arg(args: &Value) -> LogResult<Option<LogLevel>> {
    let Some(token) = args["min_level"].as_str() else {
        return Ok(None);
    };
    let level = LogLevel::parse(token);
    if !level.is_known() {
        return Err(LogError::InvalidArgument(format!(
            "unknown severity: {token}"
        )));
    }
    Ok(Some(level))
}

/// Exact-level argument: a single name or an array of names. Any token
/// is accepted so out-of-vocabulary levels can be selected too.
pub(crate) fn levels_arg(args: &Value) -> Vec<LogLevel> {
    match &args["level"] {
        Value::String(s) => vec![LogLevel::parse(s)],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(LogLevel::parse)
            .collect(),
        _ => Vec::new(),
    }
}

/// Read and segment the source text.
pub(crate) async fn load_records(source: &dyn LogSource, path: &str) -> LogResult<Vec<LogRecord>> {
    let text = source.read_text(path).await?;
    Ok(parsers::parse(&text))
}

/// Report an unreadable source as zero records.
pub(crate) fn unreadable(tool_name: &str, path: &str, error: &LogError) -> ToolResult {
    tracing::warn!(tool = tool_name, path, %error, "log source unreadable, no records produced");
    ToolResult::unreadable(tool_name, path, error.to_string())
}
