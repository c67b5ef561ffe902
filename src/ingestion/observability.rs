use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::MinerError;
use crate::types::TIMESTAMP_FORMAT;

use super::unified::LoadFormat;

/// Context about one load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Path the load read from.
    pub origin: PathBuf,
    /// Format used for the load.
    pub format: LoadFormat,
}

/// Minimal stats reported on successful loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of records the load delivered to the store.
    pub records: usize,
}

/// Observer interface for load outcomes.
///
/// The store and query engine never log; loaders report progress and failures
/// here so embedders can surface them however they like.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _error: &MinerError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, error: &MinerError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] format={:?} origin={} records={}",
            ctx.format,
            ctx.origin.display(),
            stats.records
        );
    }

    fn on_failure(&self, ctx: &LoadContext, error: &MinerError) {
        eprintln!(
            "[load][err] format={:?} origin={} err={}",
            ctx.format,
            ctx.origin.display(),
            error
        );
    }
}

/// Appends load events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok format={:?} origin={} records={}",
            Utc::now().format(TIMESTAMP_FORMAT),
            ctx.format,
            ctx.origin.display(),
            stats.records
        ));
    }

    fn on_failure(&self, ctx: &LoadContext, error: &MinerError) {
        self.append_line(&format!(
            "{} fail format={:?} origin={} err={}",
            Utc::now().format(TIMESTAMP_FORMAT),
            ctx.format,
            ctx.origin.display(),
            error
        ));
    }
}
