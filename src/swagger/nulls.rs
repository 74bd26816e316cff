//! Null removal.
//!
//! Event and definition YAMLs routinely carry `key: null` placeholders,
//! and the operation builder materializes absent fields as null. None of
//! that may survive into the written document.

use serde_json::Value;

/// Rebuild `value` bottom-up with every null mapping entry and every null
/// sequence element dropped, at any depth. Falsy non-null scalars (empty
/// string, zero, false) stay.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        scalar => scalar,
    }
}
