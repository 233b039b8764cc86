// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only payload documents with typed field accessors.
//!
//! The host framework hands the bridge one JSON object per invocation.
//! Command handlers pull their arguments out of it in one of two strictness
//! modes: required accessors return a [`PayloadError`] that the dispatcher
//! catches at the per-command boundary, optional accessors return `None`
//! instead of raising.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from required field extraction
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("missing required field: {0}")]
    Missing(String),

    #[error("field {key} is not a {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("payload is not an object")]
    NotAnObject,
}

/// A read-only key-value document supplied by the host per invocation.
///
/// Keys are flat snake_case strings; values are heterogeneous JSON. The
/// document is never mutated or persisted by this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over raw entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    // --- required accessors ---

    pub fn string(&self, key: &str) -> Result<String, PayloadError> {
        match self.get(key) {
            None => Err(PayloadError::Missing(key.to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(PayloadError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn integer(&self, key: &str) -> Result<i64, PayloadError> {
        let value = self
            .get(key)
            .ok_or_else(|| PayloadError::Missing(key.to_string()))?;
        value.as_i64().ok_or_else(|| PayloadError::WrongType {
            key: key.to_string(),
            expected: "integer",
        })
    }

    pub fn number(&self, key: &str) -> Result<f64, PayloadError> {
        let value = self
            .get(key)
            .ok_or_else(|| PayloadError::Missing(key.to_string()))?;
        value.as_f64().ok_or_else(|| PayloadError::WrongType {
            key: key.to_string(),
            expected: "number",
        })
    }

    pub fn boolean(&self, key: &str) -> Result<bool, PayloadError> {
        let value = self
            .get(key)
            .ok_or_else(|| PayloadError::Missing(key.to_string()))?;
        value.as_bool().ok_or_else(|| PayloadError::WrongType {
            key: key.to_string(),
            expected: "boolean",
        })
    }

    /// Required string array. Scalar items are coerced to their string form;
    /// empty and non-scalar items are dropped. Order is preserved.
    pub fn strings(&self, key: &str) -> Result<Vec<String>, PayloadError> {
        match self.get(key) {
            None => Err(PayloadError::Missing(key.to_string())),
            Some(Value::Array(items)) => Ok(string_items(items)),
            Some(_) => Err(PayloadError::WrongType {
                key: key.to_string(),
                expected: "array",
            }),
        }
    }

    /// Required nested object, returned as its own [`Payload`].
    pub fn object(&self, key: &str) -> Result<Payload, PayloadError> {
        match self.get(key) {
            None => Err(PayloadError::Missing(key.to_string())),
            Some(Value::Object(map)) => Ok(Payload(map.clone())),
            Some(_) => Err(PayloadError::WrongType {
                key: key.to_string(),
                expected: "object",
            }),
        }
    }

    /// Required string-keyed map. Scalar values are coerced to strings;
    /// empty and non-scalar values are dropped. Insertion order is preserved.
    pub fn string_map(&self, key: &str) -> Result<IndexMap<String, String>, PayloadError> {
        let object = self.object(key)?;
        let mut map = IndexMap::new();
        for (entry_key, value) in object.entries() {
            if let Some(text) = scalar_to_string(value) {
                if !text.is_empty() {
                    map.insert(entry_key.to_string(), text);
                }
            }
        }
        Ok(map)
    }

    // --- optional accessors ---

    /// Optional string; missing, empty, and non-string all map to `None`.
    pub fn opt_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn opt_integer(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    pub fn opt_number(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn opt_boolean(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Optional string array with the same coercion rules as [`strings`].
    ///
    /// [`strings`]: Payload::strings
    pub fn opt_strings(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key) {
            Some(Value::Array(items)) => Some(string_items(items)),
            _ => None,
        }
    }

    pub fn opt_object(&self, key: &str) -> Option<Payload> {
        match self.get(key) {
            Some(Value::Object(map)) => Some(Payload(map.clone())),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Payload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(PayloadError::NotAnObject),
        }
    }
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(scalar_to_string)
        .filter(|s| !s.is_empty())
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
