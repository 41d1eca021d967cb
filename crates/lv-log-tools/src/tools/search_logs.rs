//! Tool: search_logs. Regex search with level/environment filtering and sorting.

use async_trait::async_trait;
use serde_json::json;

use crate::error::LogResult;
use crate::source::LogSource;
use crate::tools::{
    level_enum, levels_arg, load_records, min_level_arg, path_arg, unreadable, usize_arg,
};
use crate::types::{LogTool, ToolResult};
use crate::view::{self, RecordFilter, SortOrder};

pub struct SearchLogs;

#[async_trait]
impl LogTool for SearchLogs {
    fn name(&self) -> &str {
        "search_logs"
    }

    fn description(&self) -> &str {
        "Search log records with regex, level and environment filters, sorted on request"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the log file ('-' for stdin)"
                },
                "query": {
                    "type": "string",
                    "description": "Regex matched against message, context and timestamp"
                },
                "level": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "Exact level(s) to include; any token, case-insensitive"
                },
                "min_level": {
                    "type": "string",
                    "enum": level_enum(),
                    "description": "Minimum severity level to include"
                },
                "environment": {
                    "type": "string",
                    "description": "Only records from this environment"
                },
                "sort": {
                    "type": "string",
                    "enum": ["timestamp_asc", "timestamp_desc", "level_asc", "level_desc"],
                    "description": "Sort order (default: input order)"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results (default: 100)",
                    "default": 100
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
        let limit = usize_arg(&args, "limit", 100);
        let sort = args["sort"]
            .as_str()
            .map(str::parse::<SortOrder>)
            .transpose()?;

        let mut filter = RecordFilter::new().with_levels(levels_arg(&args));
        if let Some(query) = args["query"].as_str() {
            filter = filter.with_query(query)?;
        }
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

        let mut matched = filter.apply(&records);
        if let Some(order) = sort {
            matched = view::sort(&matched, order);
        }

        let match_count = matched.len();
        let shown: Vec<_> = matched.iter().take(limit).collect();
        let query = args["query"].as_str().unwrap_or_default();
        let data = json!({
            "path": path,
            "query": query,
            "sort": sort.map(|s| s.as_str()),
            "total_records": records.len(),
            "match_count": match_count,
            "shown": shown.len(),
            "matches": shown,
        });

        tracing::info!(tool = "search_logs", path, match_count, "tool executed");
        Ok(ToolResult::success(
            "search_logs",
            data,
            format!("Found {match_count} matches for '{query}' in {path}"),
        ))
    }
}
