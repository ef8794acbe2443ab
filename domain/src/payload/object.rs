//! Target-of-change object resolution rules

use crate::core::json::first_present;
use serde_json::Value;

/// Argument names tried, in order, when probing `object_details`.
///
/// The expected argument name cannot be known from the tool name alone.
pub const OBJECT_PROBE_KEYS: [&str; 4] = ["object_id", "name", "query", "object"];

/// Fields holding an object's own identifier, in priority order.
pub const OBJECT_ID_KEYS: [&str; 3] = ["id", "objectId", "object_id"];

/// Identifier to pass to calls that depend on the resolved object.
///
/// Read from the details record (or its first element when the details are a
/// list), falling back to the original hint.
pub fn object_identifier(details: &Value, hint: &str) -> Value {
    let record = match details {
        Value::Object(map) => Some(map),
        Value::Array(items) => items.first().and_then(Value::as_object),
        _ => None,
    };

    record
        .and_then(|map| first_present(map, &OBJECT_ID_KEYS))
        .cloned()
        .unwrap_or_else(|| Value::String(hint.to_string()))
}
