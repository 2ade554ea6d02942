//! Value types and typed comparison values
//!
//! A condition carries its comparison value under a key named after the
//! value's type (`valueInt`, `valueText`, ...). In this crate the type is a
//! [`ValueType`] tag stored next to the value; the key is only produced when
//! the condition is serialized.
//!
//! [`FilterValue`] is the typed way to supply a value: the variant decides the
//! tag, so the two cannot disagree.

use crate::error::FilterError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of the comparison value in a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Integer (`valueInt`)
    #[serde(rename = "valueInt")]
    Int,
    /// Boolean (`valueBoolean`)
    #[serde(rename = "valueBoolean")]
    Boolean,
    /// String (`valueString`)
    #[serde(rename = "valueString")]
    String,
    /// Tokenized text (`valueText`)
    #[serde(rename = "valueText")]
    Text,
    /// Floating point (`valueNumber`)
    #[serde(rename = "valueNumber")]
    Number,
    /// RFC 3339 date (`valueDate`)
    #[serde(rename = "valueDate")]
    Date,
}

impl ValueType {
    /// All value types, in allow-list order
    pub const ALL: [ValueType; 6] = [
        ValueType::Int,
        ValueType::Boolean,
        ValueType::String,
        ValueType::Text,
        ValueType::Number,
        ValueType::Date,
    ];

    /// Key under which the value appears in a rendered condition
    pub const fn key(&self) -> &'static str {
        match self {
            ValueType::Int => "valueInt",
            ValueType::Boolean => "valueBoolean",
            ValueType::String => "valueString",
            ValueType::Text => "valueText",
            ValueType::Number => "valueNumber",
            ValueType::Date => "valueDate",
        }
    }

    /// Parse from the exact (case-sensitive) key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|vt| vt.key() == key)
    }

    /// Comma-separated allow-list, used in error messages
    pub fn allowed_names() -> String {
        Self::ALL.map(|vt| vt.key()).join(", ")
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ValueType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::from_key(s).ok_or_else(|| FilterError::invalid_value_type(s))
    }
}

impl TryFrom<&str> for ValueType {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for ValueType {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.as_str().parse()
    }
}

/// Comparison value tagged with its type
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// `valueInt`
    Int(i64),
    /// `valueBoolean`
    Boolean(bool),
    /// `valueString`
    String(String),
    /// `valueText`
    Text(String),
    /// `valueNumber`
    Number(f64),
    /// `valueDate`, rendered as RFC 3339 with a `Z` offset
    Date(DateTime<Utc>),
}

impl FilterValue {
    /// The tag this value is rendered under
    pub const fn value_type(&self) -> ValueType {
        match self {
            FilterValue::Int(_) => ValueType::Int,
            FilterValue::Boolean(_) => ValueType::Boolean,
            FilterValue::String(_) => ValueType::String,
            FilterValue::Text(_) => ValueType::Text,
            FilterValue::Number(_) => ValueType::Number,
            FilterValue::Date(_) => ValueType::Date,
        }
    }

    /// Split into the type tag and the raw JSON value
    ///
    /// Non-finite numbers have no JSON form and become `null`.
    pub fn into_parts(self) -> (ValueType, serde_json::Value) {
        let value_type = self.value_type();
        let raw = match self {
            FilterValue::Int(i) => serde_json::Value::from(i),
            FilterValue::Boolean(b) => serde_json::Value::Bool(b),
            FilterValue::String(s) | FilterValue::Text(s) => serde_json::Value::String(s),
            FilterValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FilterValue::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        };
        (value_type, raw)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(v as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Boolean(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Number(v)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(v: DateTime<Utc>) -> Self {
        FilterValue::Date(v)
    }
}

// Strings default to `valueText`, the usual type for text properties.
impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}
