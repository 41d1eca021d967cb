//! Entry segmenter and record builder.
//!
//! A record starts at a line of the form
//! `[YYYY-MM-DD HH:MM:SS] <environment>.<LEVEL>: ` and owns every line up to
//! the next such header, so stack traces stay attached to their entry.
//! Text that never matches a header is dropped.

pub mod context;

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::types::{LogLevel, LogRecord};

static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] ([\w-]+)\.(\w+): ").unwrap()
});

/// Segment raw log text into records, in input order.
///
/// Total: empty or unrecognised input yields an empty vector.
pub fn parse(raw_text: &str) -> Vec<LogRecord> {
    let headers: Vec<_> = RE_HEADER.captures_iter(raw_text).collect();
    let mut records = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let Some(header) = caps.get(0) else {
            continue;
        };
        // Body runs to the next header or end of input
        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(raw_text.len(), |next| next.start());

        let body = &raw_text[header.end()..end];
        let (message, context) = context::split_context(body);

        records.push(LogRecord {
            id: Uuid::now_v7(),
            timestamp: caps[1].to_string(),
            environment: caps[2].to_string(),
            level: LogLevel::parse(&caps[3]),
            message: message.to_string(),
            context: context.to_string(),
            raw: raw_text[header.start()..end].to_string(),
        });
    }

    tracing::debug!(
        records = records.len(),
        bytes = raw_text.len(),
        "segmented log text"
    );
    records
}
