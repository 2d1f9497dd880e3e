//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Import is total. Export fails for categories JSON cannot carry; `Undefined`
//! is the exception inside containers, where it is dropped from mappings and
//! written as `null` in sequences.
//!
//! Host objects are bounded on export: at most [`MAX_OBJECT_KEYS`] keys are
//! read from one object and nesting stops at [`MAX_EXPORT_DEPTH`], so endless
//! key iterators and self-referential objects fail instead of hanging.

use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::{Map, Number, Value as JsonValue};

use super::Value;
use crate::lib::errors::ValueError;

/// Keys read from a single host object before export gives up.
pub const MAX_OBJECT_KEYS: usize = 10_000;

/// Container nesting allowed below the exported root.
pub const MAX_EXPORT_DEPTH: usize = 128;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(flag),
            JsonValue::Number(number) => from_number(&number),
            JsonValue::String(text) => Value::Text(text),
            JsonValue::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Value::from(json.clone())
    }
}

fn from_number(number: &Number) -> Value {
    if let Some(small) = number.as_i64() {
        Value::Integer(small)
    } else if let Some(unsigned) = number.as_u64() {
        Value::BigInt(unsigned.into())
    } else if let Some(float) = number.as_f64() {
        Value::Float(float)
    } else {
        // Only reachable with serde_json's `arbitrary_precision` feature.
        Value::Text(number.to_string())
    }
}

impl Value {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<JsonValue, ValueError> {
        export(self, "", 0)
    }
}

fn export(value: &Value, path: &str, depth: usize) -> Result<JsonValue, ValueError> {
    let is_container = matches!(
        value,
        Value::Sequence(_) | Value::Mapping(_) | Value::Object(_)
    );
    if is_container && depth >= MAX_EXPORT_DEPTH {
        return Err(ValueError::DepthLimitExceeded {
            limit: MAX_EXPORT_DEPTH,
            path: path.to_string(),
        });
    }

    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Text(text) => Ok(JsonValue::String(text.clone())),
        Value::Integer(number) => Ok(JsonValue::from(*number)),
        Value::Float(number) => Number::from_f64(*number)
            .map(JsonValue::Number)
            .ok_or_else(|| ValueError::NonFiniteFloat {
                value: *number,
                path: path.to_string(),
            }),
        Value::BigInt(number) => {
            if let Ok(small) = i64::try_from(number) {
                Ok(JsonValue::from(small))
            } else if let Ok(unsigned) = u64::try_from(number) {
                Ok(JsonValue::from(unsigned))
            } else {
                Err(ValueError::BigIntOutOfRange {
                    value: number.to_string(),
                    path: path.to_string(),
                })
            }
        }
        Value::Bool(flag) => Ok(JsonValue::Bool(*flag)),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Undefined => Ok(JsonValue::Null),
                _ => export(item, &child_path(path, &index.to_string()), depth + 1),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Mapping(entries) => {
            export_entries(
                entries.iter().map(|(key, value)| (key.as_str(), value)),
                path,
                depth,
            )
        }
        Value::Object(object) => {
            let mut entries = Vec::new();
            for key in object.keys().take(MAX_OBJECT_KEYS + 1) {
                if entries.len() == MAX_OBJECT_KEYS {
                    return Err(ValueError::KeyLimitExceeded {
                        limit: MAX_OBJECT_KEYS,
                        path: path.to_string(),
                    });
                }
                let value = object
                    .get(&key)
                    .ok_or_else(|| ValueError::UnresolvedKey {
                        path: child_path(path, &key),
                    })?;
                entries.push((key.into_owned(), value));
            }
            export_entries(
                entries.iter().map(|(key, value)| (key.as_str(), value)),
                path,
                depth,
            )
        }
        Value::Undefined | Value::Symbol(_) | Value::Callable(_) | Value::Other(_) => {
            Err(ValueError::Unrepresentable {
                category: value.category(),
                path: path.to_string(),
            })
        }
    }
}

fn export_entries<'a>(
    entries: impl Iterator<Item = (&'a str, &'a Value)>,
    path: &str,
    depth: usize,
) -> Result<JsonValue, ValueError> {
    let mut map = Map::new();
    for (key, value) in entries {
        if matches!(value, Value::Undefined) {
            continue;
        }
        let exported = export(value, &child_path(path, key), depth + 1)?;
        map.insert(key.to_string(), exported);
    }
    Ok(JsonValue::Object(map))
}

/// Append one JSON-pointer segment, escaping `~` and `/`.
fn child_path(parent: &str, segment: &str) -> String {
    let escaped = segment.replace('~', "~0").replace('/', "~1");
    format!("{parent}/{escaped}")
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
