//! The ordered, append-only record [`Store`] and its dedup operation.

use std::collections::HashSet;

use chrono::Utc;

use crate::types::{canonical_fields, Fields, Record};

/// Outcome of [`Store::deduplicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Number of records dropped.
    pub removed: usize,
    /// Number of records still in the store.
    pub remaining: usize,
}

/// An ordered, append-only collection of [`Record`]s.
///
/// Insertion order is preserved and significant: it defines "earliest"/"latest"
/// in [`crate::query::analyze`] and the result order of search/filter. Records
/// are never mutated in place; the sequence only changes by appending or by
/// wholesale replacement ([`Store::deduplicate`], [`Store::replace_all`]).
///
/// The store performs no internal synchronization. Embedders that expose it to
/// concurrent callers must serialize all appends, dedups, and query calls
/// themselves; a snapshot taken via [`Store::all`] is only coherent while no
/// append or dedup interleaves with its use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the current time and append a record built from already-coerced
    /// fields. Always succeeds.
    pub fn append(
        &mut self,
        fields: Fields,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> &Record {
        let idx = self.records.len();
        self.records.push(Record::new(Utc::now(), fields, source, category));
        &self.records[idx]
    }

    /// Read-only snapshot of the record sequence, in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole sequence (native JSON loads re-read a full snapshot).
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Drop records that are exact duplicates of an earlier one.
    ///
    /// The duplicate key is (canonical rendering of the fields mapping, source,
    /// category); see [`canonical_fields`] for why the rendering is insertion
    /// order independent. The first occurrence in sequence order survives and
    /// relative order is preserved, so the operation is idempotent.
    pub fn deduplicate(&mut self) -> DedupOutcome {
        let before = self.records.len();

        let mut seen: HashSet<(String, String, String)> = HashSet::new();
        let mut kept: Vec<Record> = Vec::with_capacity(before);
        for record in self.records.drain(..) {
            let key = (
                canonical_fields(&record.fields),
                record.source.clone(),
                record.category.clone(),
            );
            if seen.insert(key) {
                kept.push(record);
            }
        }
        self.records = kept;

        DedupOutcome {
            removed: before - self.records.len(),
            remaining: self.records.len(),
        }
    }
}
