//! Untyped manifest mapping and read-time accessor helpers.
//!
//! A raw manifest is kept exactly as parsed; defaults are applied only when a
//! field is read, never at parse time.

use crate::SchemaError;
use serde_json::Value;

/// Untyped manifest mapping: string keys to arbitrarily nested values.
pub type RawManifest = serde_json::Map<String, Value>;

/// Parse a YAML document into a raw manifest mapping.
///
/// Fails with [`SchemaError::NotAMapping`] when the document parses to
/// something other than a mapping (including an empty document).
pub fn parse_yaml_mapping(input: &str) -> Result<RawManifest, SchemaError> {
    let value: Value = serde_yaml::from_str(input)?;
    into_mapping(value)
}

/// Parse a JSON document into a raw manifest mapping.
pub fn parse_json_mapping(input: &str) -> Result<RawManifest, SchemaError> {
    let value: Value = serde_json::from_str(input)?;
    into_mapping(value)
}

fn into_mapping(value: Value) -> Result<RawManifest, SchemaError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SchemaError::NotAMapping),
    }
}

/// Read a string field, falling back to `default` when the key is absent.
/// Numbers are rendered as their decimal form so manifests that write
/// `version: 4` read back as `"4"`.
pub fn str_of(map: &RawManifest, key: &str, default: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_owned(),
    }
}

/// Read an integer field; numeric strings are accepted.
pub fn int_of(map: &RawManifest, key: &str, default: i64) -> i64 {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Read a nested mapping field.
pub fn map_of<'a>(map: &'a RawManifest, key: &str) -> Option<&'a RawManifest> {
    map.get(key).and_then(Value::as_object)
}

/// Read a sequence field.
pub fn seq_of<'a>(map: &'a RawManifest, key: &str) -> Option<&'a [Value]> {
    map.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

/// Read a sequence of strings, skipping non-string elements.
pub fn string_seq_of(map: &RawManifest, key: &str) -> Option<Vec<String>> {
    seq_of(map, key).map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    })
}
