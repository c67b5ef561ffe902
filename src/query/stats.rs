//! Descriptive statistics for one field.

use serde::Serialize;

use crate::types::{FieldValue, Record};

/// Descriptive statistics over the numeric values of one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStatistics {
    /// Number of numeric values collected.
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Element at index `n / 2` of the ascending-sorted values. For even `n`
    /// this is the upper of the two middle elements, not their average.
    pub median: f64,
    /// Population variance (divides by `n`, not `n - 1`).
    pub variance: f64,
    pub std_dev: f64,
}

/// Compute [`FieldStatistics`] for `field` across `records`.
///
/// Missing and non-numeric values are skipped. Returns `None` when no numeric
/// values were collected — "no data", which callers must treat distinctly from
/// a bad-input error.
pub fn statistics(records: &[Record], field: &str) -> Option<FieldStatistics> {
    let mut values: Vec<f64> = records
        .iter()
        .filter_map(|record| match record.fields.get(field) {
            Some(FieldValue::Number(v)) => Some(*v),
            _ => None,
        })
        .collect();

    if values.is_empty() {
        return None;
    }

    values.sort_by(f64::total_cmp);

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    Some(FieldStatistics {
        count,
        sum,
        mean,
        min: values[0],
        max: values[count - 1],
        median: values[count / 2],
        variance,
        std_dev: variance.sqrt(),
    })
}
