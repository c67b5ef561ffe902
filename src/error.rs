use thiserror::Error;

/// Convenience result type for fallible record-miner operations.
pub type MinerResult<T> = Result<T, MinerError>;

/// Error type shared across loaders, exporters, and the query engine.
///
/// "No data" conditions (zero records, zero numeric values for a field, unknown
/// aggregation interval) are not errors; they surface as empty or absent
/// results. Nothing here is fatal — callers report and carry on.
#[derive(Debug, Error)]
pub enum MinerError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A search pattern failed to compile. The operation yields no records and
    /// the process continues.
    #[error("invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The input is structurally unusable (e.g. a CSV without any data rows).
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// The unified loader could not detect a format from the file extension.
    #[error("cannot detect load format for '{}'", .path.display())]
    UnknownFormat { path: std::path::PathBuf },
}
