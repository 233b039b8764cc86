// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar value variants for channel attributes and event properties.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde_json::Value;

use crate::payload::Payload;

/// A channel attribute value.
///
/// Strings are first attempted as a date in the vendor's legacy timestamp
/// format (`"Fri Jan 01 00:00:00 UTC 2021"`); anything that does not parse
/// stays text. Booleans and non-scalar JSON values have no attribute form.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Date(DateTime<Utc>),
    Int(i64),
    Float(f64),
}

impl AttributeValue {
    /// Convert one JSON value; `None` when the value cannot be an attribute.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match parse_legacy_date(s) {
                Some(date) => Some(Self::Date(date)),
                None => Some(Self::Text(s.clone())),
            },
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            _ => None,
        }
    }

    /// Convert a whole attributes object, skipping entries with no
    /// attribute form. Document order is preserved.
    pub fn map_from(attributes: &Payload) -> IndexMap<String, Self> {
        attributes
            .entries()
            .filter_map(|(key, value)| Self::from_json(value).map(|v| (key.to_string(), v)))
            .collect()
    }
}

/// An event property value. Nulls, arrays, and objects are skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl PropertyValue {
    /// Convert one JSON value; `None` when the value is not a scalar.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Value::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }

    /// Convert a whole properties object, skipping non-scalar entries.
    pub fn map_from(properties: &Payload) -> IndexMap<String, Self> {
        properties
            .entries()
            .filter_map(|(key, value)| Self::from_json(value).map(|v| (key.to_string(), v)))
            .collect()
    }
}

/// Weekday/month-name layout of the vendor's legacy timestamps, minus the
/// zone token which is handled separately.
const LEGACY_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Parse the vendor's legacy timestamp format, e.g.
/// `"Fri Jan 01 00:00:00 UTC 2021"`.
///
/// The zone token is matched by name and only UTC/GMT are resolved; other
/// abbreviations are ambiguous, so the whole string stays text.
pub fn parse_legacy_date(raw: &str) -> Option<DateTime<Utc>> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [weekday, month, day, time, zone, year] = fields[..] else {
        return None;
    };
    if !matches!(zone, "UTC" | "GMT") {
        return None;
    }
    let rebuilt = format!("{weekday} {month} {day} {time} {year}");
    let naive = NaiveDateTime::parse_from_str(&rebuilt, LEGACY_DATE_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
