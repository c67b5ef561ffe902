//! Output consumers: tabular CSV export and the native JSON form.
//!
//! The tabular layout is `timestamp, source, category` followed by the union
//! of all observed field names; the JSON form is what
//! [`crate::ingestion::json`] reads back.

use std::collections::HashSet;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use crate::error::MinerResult;
use crate::types::{Record, TIMESTAMP_FORMAT};

/// Export records as a CSV table.
///
/// Columns are `timestamp, source, category`, then the union of all observed
/// field names in first-observed order. Missing fields render as empty cells;
/// structured values render with their display form. An empty record slice
/// writes nothing, not even a header.
pub fn export_csv_to_path(records: &[Record], path: impl AsRef<Path>) -> MinerResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_csv(records, &mut wtr)
}

/// Export records as CSV to an arbitrary writer.
pub fn export_csv_to_writer<W: std::io::Write>(records: &[Record], writer: W) -> MinerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    write_csv(records, &mut wtr)
}

fn write_csv<W: std::io::Write>(records: &[Record], wtr: &mut csv::Writer<W>) -> MinerResult<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut field_names: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for name in record.fields.keys() {
            if seen.insert(name) {
                field_names.push(name);
            }
        }
    }

    let mut header = vec!["timestamp", "source", "category"];
    header.extend(field_names.iter().copied());
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            record.source.clone(),
            record.category.clone(),
        ];
        for name in &field_names {
            row.push(match record.fields.get(*name) {
                Some(value) => value.to_string(),
                None => String::new(),
            });
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize records into the pretty-printed native JSON form
/// (`timestamp`, `data`, `source`, `category` per record).
pub fn json_string(records: &[Record]) -> MinerResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the native JSON form to a file.
pub fn save_json_to_path(records: &[Record], path: impl AsRef<Path>) -> MinerResult<()> {
    let mut file = File::create(path)?;
    file.write_all(json_string(records)?.as_bytes())?;
    Ok(())
}
