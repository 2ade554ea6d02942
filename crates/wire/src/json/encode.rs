//! JSON encoding for filters
//!
//! Builds `serde_json::Value` trees in the exact Weaviate `where` shape.
//! Key order is fixed: `path`, `operator`, value key for conditions and
//! `operator`, `operands` for groups and filters.

use serde_json::{Map, Value};
use weaviate_filter_core::{Condition, Filter, Operand, OperandGroup, Path};

/// Encode a filter to compact JSON
pub fn encode_filter(filter: &Filter) -> String {
    filter_to_value(filter).to_string()
}

/// Encode a filter to indented JSON
pub fn encode_filter_pretty(filter: &Filter) -> String {
    format!("{:#}", filter_to_value(filter))
}

/// Encode a filter to a JSON value
pub fn filter_to_value(filter: &Filter) -> Value {
    encode_group_parts(filter.operator.name(), &filter.operands)
}

/// Encode a single operand (condition or group) to a JSON value
pub fn operand_to_value(operand: &Operand) -> Value {
    match operand {
        Operand::Condition(c) => encode_condition(c),
        Operand::Group(g) => encode_group(g),
    }
}

/// Encode a single operand to compact JSON
pub fn encode_operand(operand: &Operand) -> String {
    operand_to_value(operand).to_string()
}

fn encode_condition(condition: &Condition) -> Value {
    let mut obj = Map::with_capacity(3);
    obj.insert("path".to_string(), encode_path(condition.path()));
    obj.insert(
        "operator".to_string(),
        Value::String(condition.operator().name().to_string()),
    );
    obj.insert(
        condition.value_type().key().to_string(),
        condition.value().clone(),
    );
    Value::Object(obj)
}

fn encode_group(group: &OperandGroup) -> Value {
    encode_group_parts(group.operator.name(), &group.operands)
}

fn encode_group_parts(operator: &str, operands: &[Operand]) -> Value {
    let mut obj = Map::with_capacity(2);
    obj.insert("operator".to_string(), Value::String(operator.to_string()));
    obj.insert(
        "operands".to_string(),
        Value::Array(operands.iter().map(operand_to_value).collect()),
    );
    Value::Object(obj)
}

fn encode_path(path: &Path) -> Value {
    match path {
        Path::Property(name) => Value::String(name.clone()),
        Path::Nested(names) => Value::Array(names.iter().cloned().map(Value::String).collect()),
    }
}
