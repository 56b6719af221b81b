use serde_json::Value;

/// Narrow an arbitrary value to a non-empty string.
///
/// Returns `Some` only for a JSON string of length > 0. Callers that need
/// the string itself should match on this rather than re-checking after
/// [`is_valid_string`].
pub fn as_valid_string(value: &Value) -> Option<&str> {
    valid_str(value.as_str())
}

/// Whether the value is a non-empty string
pub fn is_valid_string(value: &Value) -> bool {
    as_valid_string(value).is_some()
}

/// Same rule as [`as_valid_string`] over an optional string
pub fn valid_str(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Upper-case a valid string, otherwise return an empty string
pub fn process_data(data: Option<&str>) -> String {
    match valid_str(data) {
        Some(s) => s.to_uppercase(),
        None => String::new(),
    }
}

/// Upper-case the string if present, defaulting to empty.
///
/// Observably identical to [`process_data`]: upper-casing `""` yields `""`.
pub fn process_data_safe(data: Option<&str>) -> String {
    data.map(str::to_uppercase).unwrap_or_default()
}
