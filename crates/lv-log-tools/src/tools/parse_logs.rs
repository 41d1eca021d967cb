//! Tool: parse_logs. Segment a log into full records for export.

use async_trait::async_trait;
use serde_json::json;

use crate::error::LogResult;
use crate::source::LogSource;
use crate::tools::{load_records, path_arg, unreadable, usize_arg};
use crate::types::{LogTool, ToolResult};

pub struct ParseLogs;

#[async_trait]
impl LogTool for ParseLogs {
    fn name(&self) -> &str {
        "parse_logs"
    }

    fn description(&self) -> &str {
        "Segment a log into records with timestamp, environment, level, message and context"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the log file ('-' for stdin)"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of records to return (default: all)"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(
        &self,
        args: serde_json::Value,
        source: &dyn LogSource,
    ) -> LogResult<ToolResult> {
        let path = path_arg(&args)?;
        let records = match load_records(source, path).await {
            Ok(records) => records,
            Err(e) => return Ok(unreadable(self.name(), path, &e)),
        };
        let limit = usize_arg(&args, "limit", records.len());

        let shown: Vec<_> = records.iter().take(limit).collect();
        let record_count = records.len();
        let data = json!({
            "path": path,
            "record_count": record_count,
            "shown": shown.len(),
            "records": shown,
        });

        tracing::info!(tool = "parse_logs", path, record_count, "tool executed");
        Ok(ToolResult::success(
            "parse_logs",
            data,
            format!("Parsed {record_count} records from {path}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{APP_SAMPLE_PATH, MockLogSource};
    use crate::types::{LogLevel, LogRecord};

    #[tokio::test]
    async fn parse_sample() {
        let source = MockLogSource::with_app_sample();
        let result = ParseLogs
            .execute(json!({"path": APP_SAMPLE_PATH}), &source)
            .await
            .unwrap();
        assert!(result.success);
        let data = result.data.as_ref().unwrap();
        assert_eq!(data["record_count"].as_u64().unwrap(), 8);
        let first = &data["records"][0];
        assert_eq!(first["timestamp"], "2024-01-15 12:00:01");
        assert_eq!(first["environment"], "production");
        assert_eq!(first["level"], "INFO");
        assert_eq!(first["message"], "Application booted");
        assert_eq!(first["context"], "");
        assert!(first["raw"].as_str().unwrap().starts_with("[2024-01-15 12:00:01]"));
    }

    #[tokio::test]
    async fn stack_trace_inside_context() {
        let source = MockLogSource::with_app_sample();
        let result = ParseLogs
            .execute(json!({"path": APP_SAMPLE_PATH}), &source)
            .await
            .unwrap();
        let second = &result.data.as_ref().unwrap()["records"][1];
        assert_eq!(second["message"], "SQLSTATE[HY000] [2002] Connection refused");
        let context = second["context"].as_str().unwrap();
        assert!(context.contains("[stacktrace]"));
        assert!(context.ends_with("\"}"));
    }

    #[tokio::test]
    async fn records_use_log_record_serialization() {
        let source = MockLogSource::with_app_sample();
        let result = ParseLogs
            .execute(json!({"path": APP_SAMPLE_PATH}), &source)
            .await
            .unwrap();
        let data = result.data.unwrap();
        let records: Vec<LogRecord> = serde_json::from_value(data["records"].clone()).unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records[7].level, LogLevel::Unknown("TRACE".into()));

        let expected = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(data["records"][0], expected);
    }

    #[tokio::test]
    async fn parse_with_limit() {
        let source = MockLogSource::with_app_sample();
        let result = ParseLogs
            .execute(json!({"path": APP_SAMPLE_PATH, "limit": 2}), &source)
            .await
            .unwrap();
        let data = result.data.as_ref().unwrap();
        assert_eq!(data["record_count"].as_u64().unwrap(), 8);
        assert_eq!(data["shown"].as_u64().unwrap(), 2);
    }

    #[tokio::test]
    async fn unreadable_source_is_zero_records() {
        let source = MockLogSource::new();
        let result = ParseLogs
            .execute(json!({"path": "/nonexistent.log"}), &source)
            .await
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.data.as_ref().unwrap()["record_count"], 0);
        assert!(result.error.unwrap().contains("/nonexistent.log"));
    }

    #[tokio::test]
    async fn missing_path_is_error() {
        let source = MockLogSource::new();
        assert!(ParseLogs.execute(json!({}), &source).await.is_err());
    }

    #[tokio::test]
    async fn text_without_records() {
        let mut source = MockLogSource::new();
        source.add_file("plain.log", "no headers here\njust text\n");
        let result = ParseLogs
            .execute(json!({"path": "plain.log"}), &source)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.data.as_ref().unwrap()["record_count"], 0);
    }
}
