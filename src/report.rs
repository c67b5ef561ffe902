//! Human-readable summary rendering.

use std::fmt::Write as _;

use crate::query::analyze;
use crate::types::{Record, TIMESTAMP_FORMAT};

/// Render the aggregate analysis of `records` as a plain-text report: total
/// count, one line per source and per category with counts, and the
/// earliest/latest timestamps (store order).
///
/// Sections with nothing to say are left out. Entries appear exactly once, in
/// key order.
pub fn build_report(records: &[Record]) -> String {
    let summary = analyze(records);

    let mut report = String::from("=== DATA ANALYSIS REPORT ===\n");
    let _ = writeln!(report, "Total data points: {}", summary.total_points);

    if !summary.sources.is_empty() {
        report.push_str("\nSources:\n");
        for (source, count) in &summary.sources {
            let _ = writeln!(report, "  {source}: {count}");
        }
    }

    if !summary.categories.is_empty() {
        report.push_str("\nCategories:\n");
        for (category, count) in &summary.categories {
            let _ = writeln!(report, "  {category}: {count}");
        }
    }

    if let Some(range) = &summary.time_range {
        report.push_str("\nTime range:\n");
        let _ = writeln!(report, "  Earliest: {}", range.earliest.format(TIMESTAMP_FORMAT));
        let _ = writeln!(report, "  Latest: {}", range.latest.format(TIMESTAMP_FORMAT));
    }

    report
}
