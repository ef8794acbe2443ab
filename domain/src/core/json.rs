//! Helpers for inspecting loosely-typed JSON returned by analysis tools.

use serde_json::{Map, Value};

/// Whether a tool result carries nothing usable.
///
/// `null`, `false`, empty strings, empty arrays and empty objects are empty.
/// Numbers are always considered meaningful results.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

/// Render a scalar as a non-empty string (strings are trimmed).
///
/// Returns `None` for empty strings and non-scalar values.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty value among `keys`, in priority order.
pub fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !is_empty_value(value))
}

/// First non-empty scalar among `keys`, rendered as a string.
pub fn first_scalar(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(scalar_to_string)
}
