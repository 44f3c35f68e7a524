// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Attribute value type system for node and edge writes
//!
//! Attribute bags passed to node/edge writes are ordered maps from attribute
//! name to a tagged [`AttributeValue`]. Values are checked against the
//! [`DataType`](crate::schema::DataType) declared in the schema before they
//! reach the transport.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Datetime layout understood by the query dialect
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered attribute bag (attribute name -> value)
pub type Attributes = IndexMap<String, AttributeValue>;

/// Value types for node and edge attributes
///
/// Deserialization never produces [`AttributeValue::DateTime`]: strings stay
/// strings and are only interpreted as datetimes when checked against a
/// `DATETIME` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    #[serde(serialize_with = "serialize_datetime")]
    DateTime(NaiveDateTime),
}

impl AttributeValue {
    /// Extract as string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as integer if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(n) => Some(*n as f64),
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract as boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as datetime, parsing strings in the dialect's layouts
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            AttributeValue::DateTime(dt) => Some(*dt),
            AttributeValue::String(s) => parse_datetime(s),
            _ => None,
        }
    }

    /// Name of the variant, used in validation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Int(_) => "int",
            AttributeValue::Float(_) => "float",
            AttributeValue::String(_) => "string",
            AttributeValue::DateTime(_) => "datetime",
        }
    }

    /// Render as a literal usable inside a GSQL statement
    pub fn to_gsql_literal(&self) -> String {
        match self {
            AttributeValue::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
            AttributeValue::DateTime(dt) => format!("\"{}\"", dt.format(DATETIME_FORMAT)),
            other => other.to_string(),
        }
    }

    /// Convert into a JSON value for payloads
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttributeValue::Bool(b) => serde_json::Value::Bool(*b),
            AttributeValue::Int(n) => serde_json::Value::from(*n),
            AttributeValue::Float(f) => serde_json::Value::from(*f),
            AttributeValue::String(s) => serde_json::Value::String(s.clone()),
            AttributeValue::DateTime(dt) => {
                serde_json::Value::String(dt.format(DATETIME_FORMAT).to_string())
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Int(n) => write!(f, "{}", n),
            AttributeValue::Float(x) => write!(f, "{}", x),
            AttributeValue::String(s) => write!(f, "{}", s),
            AttributeValue::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<NaiveDateTime> for AttributeValue {
    fn from(value: NaiveDateTime) -> Self {
        AttributeValue::DateTime(value)
    }
}

/// Parse a datetime in one of the layouts accepted by `DATETIME` attributes
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Convert an attribute bag into a JSON object
pub fn attributes_to_json(attributes: &Attributes) -> serde_json::Map<String, serde_json::Value> {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect()
}

fn serialize_datetime<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(DATETIME_FORMAT).to_string())
}
