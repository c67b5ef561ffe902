//! CSV record loading.

use std::path::Path;

use crate::error::{MinerError, MinerResult};
use crate::store::Store;
use crate::types::{coerce_field, Fields};

/// Load a CSV file into `store`, one record per data row.
///
/// Rules:
///
/// - The first row is the header; a file without at least one data row is
///   [`MinerError::MalformedInput`].
/// - Every cell goes through numeric coercion (full f64 parse → number,
///   else text).
/// - Records are appended with the path as `source` and `"csv"` as `category`.
///
/// Returns the number of records appended. On error the store is left
/// untouched.
pub fn load_csv_from_path(store: &mut Store, path: impl AsRef<Path>) -> MinerResult<usize> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    load_csv_from_reader(store, &mut rdr, &path.to_string_lossy())
}

/// Load CSV data from an existing CSV reader, tagging records with `source`.
pub fn load_csv_from_reader<R: std::io::Read>(
    store: &mut Store,
    rdr: &mut csv::Reader<R>,
    source: &str,
) -> MinerResult<usize> {
    let headers = rdr.headers()?.clone();

    // Parse everything before touching the store, so a bad row cannot leave a
    // partial load behind.
    let mut rows: Vec<Fields> = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let fields: Fields = headers
            .iter()
            .zip(row.iter())
            .map(|(header, raw)| (header.to_owned(), coerce_field(raw)))
            .collect();
        rows.push(fields);
    }

    if rows.is_empty() {
        return Err(MinerError::MalformedInput {
            message: format!("csv input '{source}' needs a header row and at least one data row"),
        });
    }

    let appended = rows.len();
    for fields in rows {
        store.append(fields, source, "csv");
    }
    Ok(appended)
}
