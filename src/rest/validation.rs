//! Required-field checks run before create requests.

use serde_json::{Map, Value};

/// Returns the required fields absent from `record`, in `required` order.
///
/// Only absence counts: a key present with `null` or an empty string is
/// considered supplied, and left for the server to judge.
#[must_use]
pub fn missing_fields<'a>(record: &Map<String, Value>, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| !record.contains_key(*field))
        .collect()
}

/// Checks that every required field is present in `record`.
///
/// # Errors
///
/// Returns every missing field name, in `required` order.
///
/// # Example
///
/// ```rust
/// use awx_api::rest::validate_params;
/// use serde_json::json;
///
/// let record = json!({"organization": 1}).as_object().unwrap().clone();
///
/// assert_eq!(
///     validate_params(&record, &["name", "organization"]),
///     Err(vec!["name".to_string()])
/// );
/// assert!(validate_params(&record, &[]).is_ok());
/// ```
pub fn validate_params(record: &Map<String, Value>, required: &[&str]) -> Result<(), Vec<String>> {
    let missing = missing_fields(record, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing.into_iter().map(ToString::to_string).collect())
    }
}
