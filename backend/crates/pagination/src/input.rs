//! Raw search request values and the coercion rules applied to them.
//!
//! Values arrive from transport adapters as loosely typed JSON. Paging
//! fields accept positive whole numbers in numeric or string form,
//! including exponent notation; everything else falls back to the
//! configured default.

use std::num::FpCategory;

use serde::Deserialize;
use serde_json::Value;

/// Untrusted search request exactly as supplied by a caller.
///
/// Absent keys and JSON `null` are both represented as `None`.
///
/// # Examples
///
/// ```
/// use pagination::SearchInput;
/// use serde_json::json;
///
/// let input: SearchInput = serde_json::from_value(json!({
///     "page": "2",
///     "sort": "name",
/// }))
/// .unwrap_or_default();
/// assert!(input.per_page.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    /// Requested page, 1-based.
    pub page: Option<Value>,
    /// Requested page size.
    pub per_page: Option<Value>,
    /// Field to sort by.
    pub sort: Option<Value>,
    /// Sort direction, `asc` or `desc` in any case.
    pub sort_dir: Option<Value>,
    /// Entity-specific filter payload.
    pub filter: Option<Value>,
}

/// Coerce a scalar filter value into non-empty text.
///
/// Strings pass through, numbers and booleans are stringified. Empty
/// strings, `null`, arrays and objects yield `None`.
///
/// # Examples
///
/// ```
/// use pagination::coerce_text;
/// use serde_json::json;
///
/// assert_eq!(coerce_text(&json!(42)), Some("42".to_owned()));
/// assert_eq!(coerce_text(&json!("")), None);
/// ```
#[must_use]
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Normalise a paging value, returning `fallback` for anything that is not a
/// positive whole number.
pub(crate) fn positive_or(value: Option<&Value>, fallback: usize) -> usize {
    value.and_then(positive_whole_number).unwrap_or(fallback)
}

fn positive_whole_number(value: &Value) -> Option<usize> {
    let parsed = match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|whole| usize::try_from(whole).ok())
            .or_else(|| parse_whole_number(&number.to_string())),
        Value::String(text) => parse_whole_number(text.trim()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|whole| *whole > 0)
}

/// Parse `"12"`, `"12.000"` or `"1.2e1"` as 12; anything with a non-zero
/// fraction, a negative sign, or stray characters is rejected.
fn parse_whole_number(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|value| is_whole(*value) && value.is_sign_positive())
            .and_then(|value| format!("{value:.0}").parse::<usize>().ok())
    })
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract().classify() == FpCategory::Zero
}

/// Normalise the requested sort field. Non-string values are stringified and
/// the empty string becomes `None`.
pub(crate) fn sort_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Stringify a sort direction value for case-insensitive matching.
pub(crate) fn sort_dir_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
