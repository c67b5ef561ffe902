//! Field extraction from fetched web page text.
//!
//! Network fetching is out of scope here: callers fetch the page with whatever
//! client and timeout policy they own, then hand the body to
//! [`extract_page_fields`] and append the resulting mapping themselves,
//! conventionally with the URL as `source` and `"web"` as `category`.

use regex::Regex;

use crate::error::{MinerError, MinerResult};
use crate::types::{FieldValue, Fields};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"\+?[1-9]\d{1,14}";
const URL_PATTERN: &str = r"https?://[^\s]+";

/// Extract mineable fields from page content.
///
/// The resulting mapping holds `emails`, `phones`, and `urls` as lists of
/// text, plus `length` — the content length in bytes — as a number.
pub fn extract_page_fields(content: &str) -> MinerResult<Fields> {
    let mut fields = Fields::new();
    fields.insert("emails".to_owned(), scan(EMAIL_PATTERN, content)?);
    fields.insert("phones".to_owned(), scan(PHONE_PATTERN, content)?);
    fields.insert("urls".to_owned(), scan(URL_PATTERN, content)?);
    fields.insert("length".to_owned(), FieldValue::Number(content.len() as f64));
    Ok(fields)
}

fn scan(pattern: &str, content: &str) -> MinerResult<FieldValue> {
    let regex = Regex::new(pattern).map_err(|source| MinerError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;
    Ok(FieldValue::List(
        regex
            .find_iter(content)
            .map(|m| FieldValue::Text(m.as_str().to_owned()))
            .collect(),
    ))
}
