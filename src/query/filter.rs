//! Numeric range filtering.

use crate::types::{FieldValue, Record};

/// Return the records whose `field` value is numeric and inside `[min, max]`,
/// inclusive at both ends.
///
/// Records where `field` is missing or non-numeric are skipped, not errors.
/// Result order = input order.
pub fn filter_by_range(records: &[Record], field: &str, min: f64, max: f64) -> Vec<Record> {
    records
        .iter()
        .filter(|record| match record.fields.get(field) {
            Some(FieldValue::Number(v)) => *v >= min && *v <= max,
            _ => false,
        })
        .cloned()
        .collect()
}
