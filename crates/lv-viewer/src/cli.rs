//! Command-line interface: maps subcommands onto tool invocations.

use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};

use crate::config::ViewerConfig;

#[derive(Debug, Parser)]
#[command(
    name = "lv-viewer",
    version,
    about = "Parse, search and rank framework log files"
)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base directory for relative log paths (overrides config).
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every record as JSON.
    Parse {
        /// Log file, or '-' for stdin.
        path: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search records by regex, level and environment.
    Search {
        path: String,
        /// Regex matched against message, context and timestamp.
        #[arg(short, long)]
        query: Option<String>,
        /// Exact level to include (repeatable).
        #[arg(long = "level")]
        levels: Vec<String>,
        #[arg(long)]
        min_level: Option<String>,
        #[arg(long)]
        environment: Option<String>,
        #[arg(long, value_parser = ["timestamp_asc", "timestamp_desc", "level_asc", "level_desc"])]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rank messages by occurrence count.
    Frequency {
        path: String,
        #[arg(long)]
        min_level: Option<String>,
        #[arg(long)]
        environment: Option<String>,
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show the last records.
    Tail {
        path: String,
        #[arg(short = 'n', long)]
        count: Option<usize>,
        #[arg(long)]
        min_level: Option<String>,
    },
    /// Level, environment and time-range statistics.
    Stats { path: String },
    /// List available tools with their argument schemas.
    Tools,
    /// List log files in the log directory.
    Sources,
}

/// What a parsed command asks the binary to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Tool { name: &'static str, args: Value },
    ListTools,
    ListSources,
}

impl Command {
    /// Build the tool invocation, filling unset options from `config`.
    pub fn invocation(&self, config: &ViewerConfig) -> Invocation {
        match self {
            Self::Parse { path, limit } => {
                let mut args = path_args(path);
                insert_opt(&mut args, "limit", *limit);
                tool("parse_logs", args)
            }
            Self::Search {
                path,
                query,
                levels,
                min_level,
                environment,
                sort,
                limit,
            } => {
                let mut args = path_args(path);
                insert_opt(&mut args, "query", query.as_deref());
                if !levels.is_empty() {
                    args.insert("level".into(), json!(levels));
                }
                insert_opt(&mut args, "min_level", min_level.as_deref());
                insert_opt(&mut args, "environment", environment.as_deref());
                insert_opt(&mut args, "sort", sort.as_deref());
                args.insert("limit".into(), json!(limit.unwrap_or(config.search_limit)));
                tool("search_logs", args)
            }
            Self::Frequency {
                path,
                min_level,
                environment,
                top,
            } => {
                let mut args = path_args(path);
                insert_opt(&mut args, "min_level", min_level.as_deref());
                insert_opt(&mut args, "environment", environment.as_deref());
                insert_opt(&mut args, "top", top.or(config.frequency_top));
                tool("log_frequency", args)
            }
            Self::Tail {
                path,
                count,
                min_level,
            } => {
                let mut args = path_args(path);
                args.insert("count".into(), json!(count.unwrap_or(config.tail_count)));
                insert_opt(&mut args, "min_level", min_level.as_deref());
                tool("tail_logs", args)
            }
            Self::Stats { path } => tool("log_stats", path_args(path)),
            Self::Tools => Invocation::ListTools,
            Self::Sources => Invocation::ListSources,
        }
    }
}

fn tool(name: &'static str, args: Map<String, Value>) -> Invocation {
    Invocation::Tool {
        name,
        args: Value::Object(args),
    }
}

fn path_args(path: &str) -> Map<String, Value> {
    let mut args = Map::new();
    args.insert("path".into(), json!(path));
    args
}

fn insert_opt<T: serde::Serialize>(args: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value {
        args.insert(key.into(), json!(v));
    }
}
