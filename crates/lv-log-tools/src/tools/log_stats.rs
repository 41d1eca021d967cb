//! Tool: log_stats. Counts by level and environment, context coverage, time range.

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashMap};

use crate::error::LogResult;
use crate::source::LogSource;
use crate::tools::{load_records, path_arg, unreadable};
use crate::types::{LogLevel, LogTool, ToolResult};

pub struct LogStats;

#[async_trait]
impl LogTool for LogStats {
    fn name(&self) -> &str {
        "log_stats"
    }

    fn description(&self) -> &str {
        "Compute log statistics: level counts, environments, time range"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path to the log file ('-' for stdin)"
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

        // Level counts: every known level reported, unknown tokens separately
        let mut level_counts: HashMap<&LogLevel, usize> = HashMap::new();
        let mut unknown_levels: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            if record.level.is_known() {
                *level_counts.entry(&record.level).or_default() += 1;
            } else {
                *unknown_levels.entry(record.level.as_str()).or_default() += 1;
            }
        }
        let mut levels = Map::new();
        for level in &LogLevel::KNOWN {
            let count = level_counts.get(level).copied().unwrap_or(0);
            levels.insert(level.as_str().to_lowercase(), json!(count));
        }

        // Environment counts, most frequent first
        let mut env_counts: HashMap<&str, usize> = HashMap::new();
        for record in &records {
            *env_counts.entry(record.environment.as_str()).or_default() += 1;
        }
        let mut environments: Vec<_> = env_counts.into_iter().collect();
        environments.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        // Time range
        let timestamps: Vec<_> = records.iter().filter_map(|r| r.parsed_timestamp()).collect();
        let earliest = timestamps.iter().min().map(|t| t.to_string());
        let latest = timestamps.iter().max().map(|t| t.to_string());

        let total = records.len();
        let with_context = records.iter().filter(|r| r.has_context()).count();
        let error_count = records
            .iter()
            .filter(|r| r.level.at_least(&LogLevel::Error))
            .count();

        let data = json!({
            "path": path,
            "record_count": total,
            "level_counts": Value::Object(levels),
            "unknown_levels": unknown_levels,
            "environments": environments.iter().map(|(env, count)| json!({
                "environment": env,
                "count": count,
            })).collect::<Vec<_>>(),
            "with_context": with_context,
            "time_range": {
                "earliest": earliest,
                "latest": latest,
            },
        });

        tracing::info!(tool = "log_stats", path, total, "tool executed");
        Ok(ToolResult::success(
            "log_stats",
            data,
            format!("{total} records: {error_count} error or worse, from {path}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{APP_SAMPLE_PATH, MockLogSource};

    async fn stats_of_sample() -> serde_json::Value {
        let source = MockLogSource::with_app_sample();
        let result = LogStats
            .execute(json!({"path": APP_SAMPLE_PATH}), &source)
            .await
            .unwrap();
        assert!(result.success);
        result.data.unwrap()
    }

    #[tokio::test]
    async fn stats_level_counts() {
        let data = stats_of_sample().await;
        assert_eq!(data["record_count"].as_u64().unwrap(), 8);
        let levels = &data["level_counts"];
        assert_eq!(levels["error"].as_u64().unwrap(), 3);
        assert_eq!(levels["critical"].as_u64().unwrap(), 1);
        assert_eq!(levels["debug"].as_u64().unwrap(), 1);
        assert_eq!(levels["emergency"].as_u64().unwrap(), 0);
        assert_eq!(data["unknown_levels"]["TRACE"].as_u64().unwrap(), 1);
    }

    #[tokio::test]
    async fn stats_environments_sorted() {
        let data = stats_of_sample().await;
        let envs = data["environments"].as_array().unwrap();
        assert_eq!(envs[0]["environment"], "production");
        assert_eq!(envs[0]["count"].as_u64().unwrap(), 6);
        assert_eq!(envs[1]["environment"], "staging");
    }

    #[tokio::test]
    async fn stats_context_and_time_range() {
        let data = stats_of_sample().await;
        assert_eq!(data["with_context"].as_u64().unwrap(), 4);
        assert_eq!(data["time_range"]["earliest"], "2024-01-15 12:00:01");
        assert_eq!(data["time_range"]["latest"], "2024-01-15 12:00:45");
    }

    #[tokio::test]
    async fn stats_empty_file() {
        let mut source = MockLogSource::new();
        source.add_file("empty.log", "");
        let result = LogStats
            .execute(json!({"path": "empty.log"}), &source)
            .await
            .unwrap();
        let data = result.data.as_ref().unwrap();
        assert_eq!(data["record_count"].as_u64().unwrap(), 0);
        assert!(data["time_range"]["earliest"].is_null());
    }
}
