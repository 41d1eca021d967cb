//! Core log record types and the LogTool trait.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LogResult;

// ── Log Level ─────────────────────────────────────────────────

/// Severity level of a record, least to most severe.
///
/// Tokens outside the vocabulary are kept as `Unknown`, already uppercased.
/// They carry no severity weight (see [`LogLevel::rank`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
    Unknown(String),
}

impl LogLevel {
    /// Every known level, ordered by severity.
    pub const KNOWN: [LogLevel; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    /// Map a level token in any casing. Never fails.
    pub fn parse(token: &str) -> Self {
        let upper = token.trim().to_uppercase();
        match upper.as_str() {
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "NOTICE" => Self::Notice,
            "WARNING" => Self::Warning,
            "ERROR" => Self::Error,
            "CRITICAL" => Self::Critical,
            "ALERT" => Self::Alert,
            "EMERGENCY" => Self::Emergency,
            _ => Self::Unknown(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Alert => "ALERT",
            Self::Emergency => "EMERGENCY",
            Self::Unknown(token) => token,
        }
    }

    /// Severity weight, `None` for unknown tokens.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Debug => Some(0),
            Self::Info => Some(1),
            Self::Notice => Some(2),
            Self::Warning => Some(3),
            Self::Error => Some(4),
            Self::Critical => Some(5),
            Self::Alert => Some(6),
            Self::Emergency => Some(7),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.rank().is_some()
    }

    /// True if this level is at least as severe as `min`.
    ///
    /// Unknown levels never qualify, and an unknown `min` admits nothing.
    pub fn at_least(&self, min: &LogLevel) -> bool {
        match (self.rank(), min.rank()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }
}

impl From<String> for LogLevel {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<&str> for LogLevel {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Unknown(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Log Record ────────────────────────────────────────────────

/// One parsed log entry.
///
/// Built only by [`crate::parsers::parse`]; consumers read it and derive new
/// sequences instead of editing records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Opaque identity for correlating records in a result set.
    pub id: Uuid,
    /// `YYYY-MM-DD HH:MM:SS`, exactly as it appeared in the input.
    pub timestamp: String,
    /// Category token before the level (usually the deployment environment).
    pub environment: String,
    pub level: LogLevel,
    /// Body without the trailing context payload, trimmed. May span lines.
    pub message: String,
    /// Trailing `{...}` payload, unparsed. Empty if the body had none.
    pub context: String,
    /// Complete source span of the record, header included.
    pub raw: String,
}

impl LogRecord {
    /// First line of the message, used as the frequency grouping key.
    pub fn first_line(&self) -> &str {
        let line = self.message.split('\n').next().unwrap_or_default();
        line.strip_suffix('\r').unwrap_or(line)
    }

    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    /// Parse the context payload as JSON, if it is JSON at all.
    pub fn context_json(&self) -> Option<serde_json::Value> {
        if self.context.is_empty() {
            return None;
        }
        serde_json::from_str(&self.context).ok()
    }

    /// The timestamp as a calendar value, for time-range reporting.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%d %H:%M:%S").ok()
    }
}

// ── Frequency Summary ─────────────────────────────────────────

/// One bucket of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Grouping key: first line of the records' messages.
    pub message: String,
    pub count: usize,
    /// Level of the last record aggregated into this bucket.
    pub level: LogLevel,
}

// ── Tool Result ───────────────────────────────────────────────

/// Result of executing a log analysis tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Structured result data (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Error message if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(
        tool_name: impl Into<String>,
        data: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            data: Some(data),
            summary: Some(summary.into()),
            error: None,
        }
    }

    /// A source that could not be read produces zero records, not an error.
    pub fn unreadable(tool_name: impl Into<String>, path: &str, error: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            data: Some(serde_json::json!({
                "path": path,
                "record_count": 0,
            })),
            summary: Some(format!("0 records from {path}")),
            error: Some(error.into()),
        }
    }
}

// ── LogTool Trait ─────────────────────────────────────────────

/// Trait for log analysis tools.
///
/// Tools are looked up by name in the viewer's registry and driven with
/// JSON arguments.
#[async_trait]
pub trait LogTool: Send + Sync {
    /// Tool name (e.g., "search_logs").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments against a log source.
    async fn execute(
        &self,
        args: serde_json::Value,
        source: &dyn crate::source::LogSource,
    ) -> LogResult<ToolResult>;
}
