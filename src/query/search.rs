//! Pattern search over one text field.

use regex::RegexBuilder;

use crate::error::{MinerError, MinerResult};
use crate::types::{FieldValue, Record};

/// Return the records whose `field` value is text matching `pattern`.
///
/// The pattern compiles case-insensitively and matches anywhere in the value.
/// Records where `field` is missing or not [`FieldValue::Text`] are skipped,
/// not errors. A pattern that fails to compile yields
/// [`MinerError::InvalidPattern`]; callers report it and continue with an empty
/// result. Result order = input order.
pub fn search_by_pattern(
    records: &[Record],
    field: &str,
    pattern: &str,
) -> MinerResult<Vec<Record>> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| MinerError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

    Ok(records
        .iter()
        .filter(|record| match record.fields.get(field) {
            Some(FieldValue::Text(text)) => regex.is_match(text),
            _ => false,
        })
        .cloned()
        .collect())
}
