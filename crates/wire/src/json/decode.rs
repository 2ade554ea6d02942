//! JSON decoding for filters
//!
//! Strict inverse of the encoder. This is the free-text boundary: operator
//! and value-type names arriving as JSON strings are validated here against
//! the same allow-lists the builder uses.
//!
//! - A condition has exactly `path`, `operator` and one value key
//! - A group (and the top-level filter) has exactly `operator` and `operands`
//!
//! Locations in errors use `$`-rooted paths, e.g. `$.operands[1].operator`.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;
use weaviate_filter_core::{
    BooleanOperator, Condition, Filter, FilterError, Operand, OperandGroup, Operator, Path,
    ValueType,
};

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// JSON is valid but does not have the filter shape
    #[error("Malformed filter at {at}: {reason}")]
    Malformed {
        /// Location of the offending node
        at: String,
        /// What is wrong with it
        reason: String,
    },

    /// A name was rejected by an allow-list
    #[error("Rejected filter at {at}: {source}")]
    Rejected {
        /// Location of the offending node
        at: String,
        /// The underlying rejection
        source: FilterError,
    },
}

impl DecodeError {
    fn malformed(at: &str, reason: impl Into<String>) -> Self {
        DecodeError::Malformed {
            at: at.to_string(),
            reason: reason.into(),
        }
    }

    fn rejected(at: &str, source: FilterError) -> Self {
        DecodeError::Rejected {
            at: at.to_string(),
            source,
        }
    }

    /// Location of the error, if it has one
    pub fn location(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidJson(_) => None,
            DecodeError::Malformed { at, .. } | DecodeError::Rejected { at, .. } => Some(at),
        }
    }
}

/// Decode a filter from JSON text
pub fn decode_filter(json: &str) -> Result<Filter, DecodeError> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "filter is not valid JSON");
        DecodeError::InvalidJson(e.to_string())
    })?;
    filter_from_value(&value)
}

/// Decode a filter from an already-parsed JSON value
pub fn filter_from_value(value: &Value) -> Result<Filter, DecodeError> {
    let at = "$";
    let obj = expect_object(value, at)?;
    let (operator, operands) = decode_group_parts(obj, at)?;
    Ok(Filter { operator, operands })
}

/// Decode a single operand (condition or group)
pub fn decode_operand(value: &Value) -> Result<Operand, DecodeError> {
    decode_operand_at(value, "$")
}

fn decode_operand_at(value: &Value, at: &str) -> Result<Operand, DecodeError> {
    let obj = expect_object(value, at)?;
    if obj.contains_key("operands") {
        let (operator, operands) = decode_group_parts(obj, at)?;
        Ok(Operand::Group(OperandGroup { operator, operands }))
    } else {
        decode_condition(obj, at).map(Operand::Condition)
    }
}

fn decode_group_parts(
    obj: &Map<String, Value>,
    at: &str,
) -> Result<(BooleanOperator, Vec<Operand>), DecodeError> {
    if let Some(extra) = obj.keys().find(|k| *k != "operator" && *k != "operands") {
        return Err(DecodeError::malformed(
            at,
            format!("unexpected key '{}' in group", extra),
        ));
    }

    let op_at = format!("{}.operator", at);
    let name = expect_string(obj.get("operator"), &op_at)?;
    let operator: BooleanOperator = name
        .parse()
        .map_err(|e| DecodeError::rejected(&op_at, e))?;

    let list_at = format!("{}.operands", at);
    let items = match obj.get("operands") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(DecodeError::malformed(&list_at, "expected an array")),
        None => return Err(DecodeError::malformed(at, "missing key 'operands'")),
    };

    let operands = items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_operand_at(item, &format!("{}[{}]", list_at, i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((operator, operands))
}

fn decode_condition(obj: &Map<String, Value>, at: &str) -> Result<Condition, DecodeError> {
    let path_at = format!("{}.path", at);
    let path = match obj.get("path") {
        Some(value) => decode_path(value, &path_at)?,
        None => return Err(DecodeError::malformed(at, "missing key 'path'")),
    };

    let op_at = format!("{}.operator", at);
    let name = expect_string(obj.get("operator"), &op_at)?;
    let operator: Operator = name
        .parse()
        .map_err(|e| DecodeError::rejected(&op_at, e))?;

    let mut value_keys = obj.keys().filter(|k| *k != "path" && *k != "operator");
    let key = match (value_keys.next(), value_keys.next()) {
        (Some(key), None) => key,
        (None, _) => return Err(DecodeError::malformed(at, "missing value key")),
        (Some(_), Some(_)) => {
            return Err(DecodeError::malformed(at, "more than one value key"))
        }
    };

    let key_at = format!("{}.{}", at, key);
    let value_type: ValueType = key
        .parse()
        .map_err(|e| DecodeError::rejected(&key_at, e))?;

    // Invariant: `key` came from `obj.keys()`
    let value = obj.get(key).cloned().unwrap_or(Value::Null);
    Ok(Condition::new(path, operator, value_type, value))
}

fn decode_path(value: &Value, at: &str) -> Result<Path, DecodeError> {
    match value {
        Value::String(name) => Ok(Path::Property(name.clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(DecodeError::malformed(
                    &format!("{}[{}]", at, i),
                    "path segment must be a string",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Path::Nested),
        _ => Err(DecodeError::malformed(
            at,
            "path must be a string or an array of strings",
        )),
    }
}

fn expect_object<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::malformed(at, "expected an object"))
}

fn expect_string<'a>(value: Option<&'a Value>, at: &str) -> Result<&'a str, DecodeError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::malformed(at, "expected a string")),
        None => Err(DecodeError::malformed(at, "missing key")),
    }
}
