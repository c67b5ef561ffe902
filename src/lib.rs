//! `record-miner` is a small library for ingesting semi-structured records —
//! delimited files, native JSON documents, extracted web text — into an
//! in-memory [`store::Store`] and exploring them in place.
//!
//! Every field value goes through best-effort numeric coercion exactly once,
//! at ingestion ([`types::coerce_field`]): raw text that parses fully as a
//! float is stored as [`types::FieldValue::Number`], everything else as
//! [`types::FieldValue::Text`]. The query engine then pattern-matches on the
//! variant instead of re-inspecting strings.
//!
//! ## What you can do
//!
//! - **Load**: CSV files (header row + coerced cells), the native JSON record
//!   form, or fields extracted from fetched page text
//!   ([`ingestion::extract_page_fields`]). [`ingestion::load_from_path`]
//!   auto-detects CSV vs JSON by extension.
//! - **Query**: case-insensitive pattern search, inclusive range filtering,
//!   descriptive statistics, time-bucketed aggregation (hour/day/week), and an
//!   aggregate profile ([`query::analyze`]) — all pure functions over a store
//!   snapshot.
//! - **Clean**: [`store::Store::deduplicate`] drops exact duplicates on a
//!   canonical (fields, source, category) key.
//! - **Emit**: a plain-text report ([`report::build_report`]), a CSV table, or
//!   the native JSON form ([`export`]).
//!
//! ## Quick example
//!
//! ```rust
//! use record_miner::query::{filter_by_range, statistics};
//! use record_miner::store::Store;
//! use record_miner::types::{coerce_field, Fields};
//!
//! let mut store = Store::new();
//! for raw in ["18.2", "21.5", "n/a"] {
//!     let mut fields = Fields::new();
//!     fields.insert("temp".to_owned(), coerce_field(raw));
//!     store.append(fields, "sensors.csv", "csv");
//! }
//!
//! // "n/a" stayed text, so only two numeric values feed the statistics.
//! let stats = statistics(store.all(), "temp").expect("numeric values present");
//! assert_eq!(stats.count, 2);
//! assert_eq!(stats.max, 21.5);
//!
//! let warm = filter_by_range(store.all(), "temp", 20.0, 25.0);
//! assert_eq!(warm.len(), 1);
//! ```
//!
//! ## Searching and reporting
//!
//! ```rust
//! use record_miner::query::search_by_pattern;
//! use record_miner::report::build_report;
//! use record_miner::store::Store;
//! use record_miner::types::{coerce_field, Fields};
//!
//! let mut store = Store::new();
//! let mut fields = Fields::new();
//! fields.insert("name".to_owned(), coerce_field("Ada Lovelace"));
//! store.append(fields, "people.csv", "csv");
//!
//! let hits = search_by_pattern(store.all(), "name", "lovelace").expect("valid pattern");
//! assert_eq!(hits.len(), 1);
//!
//! let report = build_report(store.all());
//! assert!(report.contains("Total data points: 1"));
//! ```
//!
//! ## Modules
//!
//! - [`store`]: the ordered, append-only record store and its dedup operation
//! - [`query`]: pure search/filter/statistics/aggregation/analysis functions
//! - [`report`]: plain-text summary rendering
//! - [`ingestion`]: CSV/JSON/web producers that feed the store
//! - [`export`]: CSV table and native JSON output
//! - [`types`]: field values, coercion, and the record model
//! - [`error`]: the crate-wide error type
//!
//! The core is strictly single-threaded and synchronous: the store has no
//! internal locking, and embedders that share it across threads must
//! serialize every append, dedup, and query themselves.

pub mod error;
pub mod export;
pub mod ingestion;
pub mod query;
pub mod report;
pub mod store;
pub mod types;

pub use error::{MinerError, MinerResult};
