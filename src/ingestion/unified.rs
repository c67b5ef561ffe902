//! Unified load entrypoint.
//!
//! Most callers should use [`load_from_path`], which loads a file into a
//! [`crate::store::Store`].
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the
//!   file extension.
//! - If a [`LoadObserver`] is provided, success/failure is reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{MinerError, MinerResult};
use crate::store::Store;

use super::csv::load_csv_from_path;
use super::json::load_json_from_path;
use super::observability::{LoadContext, LoadObserver, LoadStats};

/// Supported load formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Native JSON record array (or newline-delimited records).
    Json,
}

impl LoadFormat {
    /// Parse a load format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<LoadFormat>,
    /// Optional observer for progress/failure reporting.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Unified load entry point for path-based sources.
///
/// - If `options.format` is `None`, the format is inferred from the file
///   extension; an unrecognized extension is [`MinerError::UnknownFormat`].
/// - CSV rows append to the existing sequence; a JSON document replaces it
///   (the native form is a full store snapshot).
///
/// When an observer is configured, this function reports `on_success` with the
/// record count, or `on_failure` with the error.
pub fn load_from_path(
    store: &mut Store,
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> MinerResult<usize> {
    let path = path.as_ref();
    let format = match options.format {
        Some(format) => format,
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(LoadFormat::from_extension)
            .ok_or_else(|| MinerError::UnknownFormat {
                path: path.to_path_buf(),
            })?,
    };

    let ctx = LoadContext {
        origin: path.to_path_buf(),
        format,
    };
    let result = match format {
        LoadFormat::Csv => load_csv_from_path(store, path),
        LoadFormat::Json => load_json_from_path(store, path),
    };

    if let Some(observer) = &options.observer {
        match &result {
            Ok(records) => observer.on_success(&ctx, LoadStats { records: *records }),
            Err(error) => observer.on_failure(&ctx, error),
        }
    }

    result
}
