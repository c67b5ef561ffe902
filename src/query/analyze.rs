//! Aggregate profile of a record sequence.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Record;

/// First and last record timestamps in store order.
///
/// Records may be appended out of timestamp order; these are positional bounds,
/// not chronological ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeRange {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    /// Total number of records.
    pub total_points: usize,
    /// Record count per source.
    pub sources: BTreeMap<String, usize>,
    /// Record count per category.
    pub categories: BTreeMap<String, usize>,
    /// Absent (and omitted from serialized output) when there are no records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// Profile `records`: total count, per-source and per-category counts, and the
/// positional time range.
pub fn analyze(records: &[Record]) -> StoreSummary {
    let mut sources: BTreeMap<String, usize> = BTreeMap::new();
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *sources.entry(record.source.clone()).or_insert(0) += 1;
        *categories.entry(record.category.clone()).or_insert(0) += 1;
    }

    let time_range = match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some(TimeRange {
            earliest: first.timestamp,
            latest: last.timestamp,
        }),
        _ => None,
    };

    StoreSummary {
        total_points: records.len(),
        sources,
        categories,
        time_range,
    }
}
