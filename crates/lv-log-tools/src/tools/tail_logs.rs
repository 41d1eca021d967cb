//! Tool: tail_logs. Show the last N records with optional severity filtering.

use async_trait::async_trait;
use serde_json::json;

use crate::error::LogResult;
use crate::source::LogSource;
use crate::tools::{
    level_enum, load_records, min_level_arg, path_arg, unreadable, usize_arg,
};
use crate::types::{LogTool, ToolResult};
use crate::view::RecordFilter;

pub struct TailLogs;

#[async_trait]
impl LogTool for TailLogs {
    fn name(&self) -> &str {
        "tail_logs"
    }

    fn description(&self) -> &str {
        "Show the last N log records with optional severity filtering"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the log file ('-' for stdin)"
                },
                "count": {
                    "type": "integer",
                    "description": "Number of records to show (default: 50)",
                    "default": 50
                },
                "min_level": {
                    "type": "string",
                    "enum": level_enum(),
                    "description": "Minimum severity level to include"
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
        let count = usize_arg(&args, "count", 50);
        let min_level = min_level_arg(&args)?;

        let records = match load_records(source, path).await {
            Ok(records) => records,
            Err(e) => return Ok(unreadable(self.name(), path, &e)),
        };

        let filtered = match min_level {
            Some(min) => RecordFilter::new().with_min_level(min).apply(&records),
            None => records.clone(),
        };

        // Take the last `count` records
        let start = filtered.len().saturating_sub(count);
        let tail = &filtered[start..];

        let data = json!({
            "path": path,
            "total_records": records.len(),
            "filtered_records": filtered.len(),
            "shown": tail.len(),
            "records": tail,
        });

        let shown = tail.len();
        tracing::info!(tool = "tail_logs", path, shown, "tool executed");
        Ok(ToolResult::success(
            "tail_logs",
            data,
            format!("Showing last {shown} records from {path}"),
        ))
    }
}
