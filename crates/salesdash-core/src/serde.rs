//! Canonical JSON and YAML helpers.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::de::DeserializeOwned;
use ::serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, SalesError};

fn serde_error(code: &str, err: impl ToString) -> SalesError {
    SalesError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SalesError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("serde.json_encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer_pretty(&mut bytes, &canonical)
        .map_err(|err| serde_error("serde.json_write", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, SalesError> {
    serde_json::from_slice(data).map_err(|err| serde_error("serde.json_read", err))
}

/// Deserializes a YAML document into the requested type.
pub fn from_yaml_str<T: DeserializeOwned>(data: &str) -> Result<T, SalesError> {
    serde_yaml::from_str(data).map_err(|err| serde_error("serde.yaml_read", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_bytes_sort_keys() {
        let bytes = to_canonical_json_bytes(&json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let a = text.find("\"a\"").unwrap();
        let b = text.find("\"b\"").unwrap();
        let c = text.find("\"c\"").unwrap();
        let d = text.find("\"d\"").unwrap();
        assert!(a < b);
        assert!(c < d);
    }

    #[test]
    fn json_roundtrip_reports_bad_input() {
        let err = from_json_slice::<Value>(b"{not json").unwrap_err();
        assert_eq!(err.code(), "serde.json_read");
    }
}
