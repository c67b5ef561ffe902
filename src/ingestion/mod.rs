//! Record producers: loaders that deliver coerced field mappings to the store.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - auto-detects CSV vs JSON by file extension (or you can force a format via
//!   [`LoadOptions`])
//! - appends/replaces records in a [`crate::store::Store`]
//! - optionally reports success/failure to a [`LoadObserver`]
//!
//! Format-specific loaders are also available under:
//! - [`csv`]
//! - [`json`]
//!
//! [`web`] is the producer half of web mining: it turns already-fetched page
//! text into a field mapping (network fetching stays outside this crate).

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;
pub mod web;

pub use observability::{CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadStats, StdErrObserver};
pub use unified::{load_from_path, LoadFormat, LoadOptions};
pub use web::extract_page_fields;
