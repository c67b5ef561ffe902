//! Core record model: field values, ingestion-time coercion, and the [`Record`]
//! observation stored by [`crate::store::Store`].

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fixed wall-clock rendering used for bucket labels, reports, and CSV export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field name → value mapping carried by a [`Record`].
///
/// A `BTreeMap` keeps entries key-sorted, so two logically-identical mappings
/// render identically regardless of the order their entries were inserted in.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single field value inside a [`Record`].
///
/// Raw textual input is coerced once, at ingestion time, via [`coerce_field`].
/// Producers that extract structured data (e.g. the web-page extractor) store
/// lists and nested mappings directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 64-bit float.
    Number(f64),
    /// UTF-8 string.
    Text(String),
    /// Ordered list of values.
    List(Vec<FieldValue>),
    /// Nested mapping, key-sorted.
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns the numeric value, or `None` for non-[`Number`](Self::Number)
    /// variants.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, or `None` for non-[`Text`](Self::Text) variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Best-effort numeric coercion of raw textual input.
///
/// A value is numeric iff it parses completely as a base-10 floating point
/// literal; everything else stays text.
pub fn coerce_field(raw: &str) -> FieldValue {
    match raw.parse::<f64>() {
        Ok(n) => FieldValue::Number(n),
        Err(_) => FieldValue::Text(raw.to_owned()),
    }
}

/// Deterministic rendering of a field mapping, used as the structural part of
/// the dedup key.
///
/// Entries render in key order and text is quoted, so `Text("1")` and
/// `Number(1.0)` produce distinct keys.
pub fn canonical_fields(fields: &Fields) -> String {
    let mut out = String::new();
    write_entries(fields, &mut out);
    out
}

fn write_entries(entries: &BTreeMap<String, FieldValue>, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{key:?}:");
        write_canonical(value, out);
    }
    out.push('}');
}

fn write_canonical(value: &FieldValue, out: &mut String) {
    match value {
        FieldValue::Number(n) => {
            let _ = write!(out, "{n}");
        }
        FieldValue::Text(s) => {
            let _ = write!(out, "{s:?}");
        }
        FieldValue::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        FieldValue::Map(entries) => write_entries(entries, out),
    }
}

/// One stored observation.
///
/// `timestamp`, `source`, and `category` are immutable once the record is in a
/// store; the fields mapping is stored verbatim as delivered by the producer
/// (already coerced).
///
/// The serialized JSON form uses the keys `timestamp`, `data`, `source`,
/// `category`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Creation time. [`crate::store::Store::append`] stamps the current time;
    /// loaders that re-read the native JSON form preserve the stored one.
    pub timestamp: DateTime<Utc>,
    /// Coerced field values.
    #[serde(rename = "data")]
    pub fields: Fields,
    /// Free-text origin identifier (filename, URL, ...).
    pub source: String,
    /// Free-text classification tag (e.g. `"csv"`, `"web"`).
    pub category: String,
}

impl Record {
    /// Build a record with an explicit timestamp.
    pub fn new(
        timestamp: DateTime<Utc>,
        fields: Fields,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            fields,
            source: source.into(),
            category: category.into(),
        }
    }
}
