//! Tool: log_frequency. Rank messages by how often they occur.

use async_trait::async_trait;
use serde_json::json;

use crate::error::LogResult;
use crate::frequency;
use crate::source::LogSource;
use crate::tools::{level_enum, load_records, min_level_arg, path_arg, unreadable};
use crate::types::{LogTool, ToolResult};
use crate::view::RecordFilter;

pub struct LogFrequency;

#[async_trait]
impl LogTool for LogFrequency {
    fn name(&self) -> &str {
        "log_frequency"
    }

    fn description(&self) -> &str {
        "Group records by the first line of their message and rank by occurrence count"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the log file ('-' for stdin)"
                },
                "min_level": {
                    "type": "string",
                    "enum": level_enum(),
                    "description": "Only count records at or above this severity"
                },
                "environment": {
                    "type": "string",
                    "description": "Only count records from this environment"
                },
                "top": {
                    "type": "integer",
                    "description": "Number of buckets to return (default: all)"
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
        let mut filter = RecordFilter::new();
        if let Some(min) = min_level_arg(&args)? {
            filter = filter.with_min_level(min);
        }
        if let Some(env) = args["environment"].as_str() {
            filter = filter.with_environment(env);
        }

        let records = match load_records(source, path).await {
            Ok(records) => records,
            Err(e) => return Ok(unreadable(self.name(), path, &e)),
        };
        let counted = filter.apply(&records);

        let mut buckets = frequency::aggregate(&counted);
        let bucket_count = buckets.len();
        if let Some(top) = args["top"].as_u64() {
            buckets.truncate(usize::try_from(top).unwrap_or(usize::MAX));
        }

        let data = json!({
            "path": path,
            "record_count": counted.len(),
            "bucket_count": bucket_count,
            "buckets": buckets,
        });

        tracing::info!(tool = "log_frequency", path, bucket_count, "tool executed");
        let summary = match buckets.first() {
            Some(most) => format!(
                "{bucket_count} distinct messages in {} records; most frequent ({}x): {}",
                counted.len(),
                most.count,
                most.message
            ),
            None => format!("No records in {path}"),
        };
        Ok(ToolResult::success("log_frequency", data, summary))
    }
}
