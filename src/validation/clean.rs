//! Pre-transmission payload normalization.
//!
//! Recursively strips empty strings, nulls, and objects that end up
//! empty, so the wire never carries `""` or `{}` placeholders from form
//! state. Arrays keep their length: an element that normalizes away
//! entirely is replaced by `null` rather than removed. Explicit `null`
//! survives only under the keys where the data model gives it meaning
//! (`location`, `featuredDish` — both mean "clear this on the backend").

use serde_json::{Map, Value};

/// Keys whose explicit `null` is an instruction, not an omission.
const NULLABLE_KEYS: [&str; 2] = ["location", "featuredDish"];

/// Normalizes a payload before transmission. Idempotent: cleaning a
/// cleaned value is a no-op. A value that normalizes away entirely comes
/// back as `null`.
pub fn clean(value: &Value) -> Value {
    clean_value(value).unwrap_or(Value::Null)
}

/// `None` means the value should not be serialized at all.
fn clean_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(obj) => clean_object(obj),
        Value::Array(items) => Some(Value::Array(
            items
                .iter()
                .map(|item| clean_value(item).unwrap_or(Value::Null))
                .collect(),
        )),
        other => Some(other.clone()),
    }
}

fn clean_object(obj: &Map<String, Value>) -> Option<Value> {
    let mut cleaned = Map::new();
    for (key, value) in obj {
        if value.is_null() && NULLABLE_KEYS.contains(&key.as_str()) {
            cleaned.insert(key.clone(), Value::Null);
            continue;
        }
        if let Some(value) = clean_value(value) {
            cleaned.insert(key.clone(), value);
        }
    }
    if cleaned.is_empty() {
        None
    } else {
        Some(Value::Object(cleaned))
    }
}
