//! Frequency aggregation: group records by the first line of their message
//! and rank the groups by occurrence count.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::types::{FrequencySummary, LogRecord};

/// Build the ranked frequency table for `records`.
///
/// Buckets are keyed by [`LogRecord::first_line`], so entries that differ
/// only in their stack trace collapse together. A bucket's level is the
/// level of the last record seen for its key. Sorted by count descending;
/// equal counts keep first-occurrence order.
pub fn aggregate(records: &[LogRecord]) -> Vec<FrequencySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<FrequencySummary> = Vec::new();

    for record in records {
        let key = record.first_line();
        match index.entry(key) {
            Entry::Occupied(slot) => {
                let bucket = &mut buckets[*slot.get()];
                bucket.count += 1;
                bucket.level = record.level.clone();
            }
            Entry::Vacant(slot) => {
                slot.insert(buckets.len());
                buckets.push(FrequencySummary {
                    message: key.to_string(),
                    count: 1,
                    level: record.level.clone(),
                });
            }
        }
    }

    // Stable, so ties stay in first-seen order
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}
