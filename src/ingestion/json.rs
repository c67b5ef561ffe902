//! Loading the native JSON record form.
//!
//! The native form is a JSON array of records with keys `timestamp`, `data`,
//! `source`, `category` (what [`crate::export::json_string`] writes).
//! Newline-delimited records (one object per line) are accepted as a fallback.
//!
//! A load is a full-snapshot read: it *replaces* the store's sequence rather
//! than appending, and record timestamps come from the document.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{MinerError, MinerResult};
use crate::store::Store;
use crate::types::{FieldValue, Fields, Record};

#[derive(Deserialize)]
struct RecordDocument {
    timestamp: DateTime<Utc>,
    data: serde_json::Map<String, serde_json::Value>,
    source: String,
    category: String,
}

/// Replace the contents of `store` with the records in a native JSON file.
///
/// Returns the number of records in the store afterwards. On error the store
/// is left untouched.
pub fn load_json_from_path(store: &mut Store, path: impl AsRef<Path>) -> MinerResult<usize> {
    let text = fs::read_to_string(path)?;
    let records = records_from_json_str(&text)?;
    let total = records.len();
    store.replace_all(records);
    Ok(total)
}

/// Parse the native JSON form (array of records, or one record object per
/// line) into records.
pub fn records_from_json_str(input: &str) -> MinerResult<Vec<Record>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MinerError::MalformedInput {
            message: "json input is empty".to_owned(),
        });
    }

    if let Ok(documents) = serde_json::from_str::<Vec<RecordDocument>>(trimmed) {
        return Ok(documents.into_iter().map(record_from_document).collect());
    }

    // Fall back to newline-delimited records.
    let mut records = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let document = serde_json::from_str::<RecordDocument>(line).map_err(|e| {
            MinerError::MalformedInput {
                message: format!("invalid record at line {}: {}", i + 1, e),
            }
        })?;
        records.push(record_from_document(document));
    }
    Ok(records)
}

fn record_from_document(document: RecordDocument) -> Record {
    let fields: Fields = document
        .data
        .iter()
        .map(|(key, value)| (key.clone(), field_value_from_json(value)))
        .collect();
    Record::new(document.timestamp, fields, document.source, document.category)
}

/// Convert a JSON value into a [`FieldValue`].
///
/// The native form only writes numbers, strings, lists, and maps; documents
/// from other producers may carry booleans and nulls, which fold into text
/// rather than rejecting the file.
fn field_value_from_json(value: &serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => FieldValue::Number(f),
            None => FieldValue::Text(n.to_string()),
        },
        serde_json::Value::String(s) => FieldValue::Text(s.clone()),
        serde_json::Value::Bool(b) => FieldValue::Text(b.to_string()),
        serde_json::Value::Null => FieldValue::Text(String::new()),
        serde_json::Value::Array(items) => {
            FieldValue::List(items.iter().map(field_value_from_json).collect())
        }
        serde_json::Value::Object(map) => FieldValue::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), field_value_from_json(value)))
                .collect(),
        ),
    }
}
