//! Derived views over parsed records: filtering and sorting.
//!
//! Every function here borrows the records and returns a new vector.

use regex::Regex;

use crate::error::{LogError, LogResult};
use crate::types::{LogLevel, LogRecord};

/// Criteria a record must meet to appear in a filtered view.
///
/// Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Matched against timestamp, message and context.
    pub query: Option<Regex>,
    /// Exact levels to keep. Empty keeps all levels.
    pub levels: Vec<LogLevel>,
    /// Minimum severity; records with unknown levels never pass.
    pub min_level: Option<LogLevel>,
    /// Exact environment token.
    pub environment: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search pattern, compiling it as a regex.
    pub fn with_query(mut self, pattern: &str) -> LogResult<Self> {
        let re = Regex::new(pattern).map_err(|e| LogError::Regex(e.to_string()))?;
        self.query = Some(re);
        Ok(self)
    }

    pub fn with_levels(mut self, levels: Vec<LogLevel>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_min_level(mut self, min: LogLevel) -> Self {
        self.min_level = Some(min);
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if !self.levels.is_empty() && !self.levels.contains(&record.level) {
            return false;
        }
        if let Some(ref min) = self.min_level
            && !record.level.at_least(min)
        {
            return false;
        }
        if let Some(ref env) = self.environment
            && record.environment != *env
        {
            return false;
        }
        match self.query {
            Some(ref re) => {
                re.is_match(&record.message)
                    || re.is_match(&record.context)
                    || re.is_match(&record.timestamp)
            }
            None => true,
        }
    }

    /// Records passing the filter, in their original order.
    pub fn apply(&self, records: &[LogRecord]) -> Vec<LogRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Presentation sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TimestampAsc,
    TimestampDesc,
    LevelAsc,
    LevelDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimestampAsc => "timestamp_asc",
            Self::TimestampDesc => "timestamp_desc",
            Self::LevelAsc => "level_asc",
            Self::LevelDesc => "level_desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        match s {
            "timestamp_asc" => Ok(Self::TimestampAsc),
            "timestamp_desc" => Ok(Self::TimestampDesc),
            "level_asc" => Ok(Self::LevelAsc),
            "level_desc" => Ok(Self::LevelDesc),
            other => Err(LogError::InvalidArgument(format!("unknown sort order: {other}"))),
        }
    }
}

/// A sorted copy of `records`. Stable, so equal keys keep input order.
///
/// Timestamps compare as strings; the fixed-width format orders correctly.
/// Unknown levels sort below DEBUG.
pub fn sort(records: &[LogRecord], order: SortOrder) -> Vec<LogRecord> {
    let mut sorted = records.to_vec();
    match order {
        SortOrder::TimestampAsc => sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOrder::TimestampDesc => sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOrder::LevelAsc => sorted.sort_by_key(|r| r.level.rank()),
        SortOrder::LevelDesc => sorted.sort_by(|a, b| b.level.rank().cmp(&a.level.rank())),
    }
    sorted
}
