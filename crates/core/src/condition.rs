//! Filter tree: conditions, operand groups and the rendered filter
//!
//! ## Shapes
//!
//! | Type | JSON |
//! |------|------|
//! | [`Condition`] | `{"path": ..., "operator": "Equal", "valueText": "x"}` |
//! | [`OperandGroup`] | `{"operator": "Or", "operands": [...]}` |
//! | [`Filter`] | `{"operator": "And", "operands": [...]}` |
//!
//! A condition has exactly one value key, chosen by its [`ValueType`].

use crate::operator::{BooleanOperator, Operator};
use crate::value::{FilterValue, ValueType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Property a condition applies to
///
/// Either a single property name or a sequence of names walking through
/// cross-references. Renders as a JSON string or a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Path {
    /// Single property name
    Property(String),
    /// Ordered sequence of property names
    Nested(Vec<String>),
}

impl Path {
    /// Path holding exactly one segment, rendered as a one-element array
    pub fn single_segment(name: impl Into<String>) -> Self {
        Path::Nested(vec![name.into()])
    }

    /// Segments in order
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Path::Property(name) => vec![name.as_str()],
            Path::Nested(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::Property(s.to_string())
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::Property(s)
    }
}

impl From<Vec<String>> for Path {
    fn from(v: Vec<String>) -> Self {
        Path::Nested(v)
    }
}

impl From<Vec<&str>> for Path {
    fn from(v: Vec<&str>) -> Self {
        Path::Nested(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Path {
    fn from(v: &[&str]) -> Self {
        Path::Nested(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Single comparison clause
///
/// The value is kept as given; it is not checked against `value_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    path: Path,
    operator: Operator,
    value_type: ValueType,
    value: serde_json::Value,
}

impl Condition {
    /// Create a condition from already-validated parts
    pub fn new(
        path: impl Into<Path>,
        operator: Operator,
        value_type: ValueType,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Condition {
            path: path.into(),
            operator,
            value_type,
            value: value.into(),
        }
    }

    /// Create a condition whose value type follows from the value
    pub fn typed(path: impl Into<Path>, operator: Operator, value: impl Into<FilterValue>) -> Self {
        let (value_type, value) = value.into().into_parts();
        Condition {
            path: path.into(),
            operator,
            value_type,
            value,
        }
    }

    /// Property path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Comparison operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Value type tag
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Comparison value
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("path", &self.path)?;
        map.serialize_entry("operator", &self.operator)?;
        map.serialize_entry(self.value_type.key(), &self.value)?;
        map.end()
    }
}

/// Boolean combination of operands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperandGroup {
    /// `And` or `Or`
    pub operator: BooleanOperator,
    /// Operands in insertion order
    pub operands: Vec<Operand>,
}

impl OperandGroup {
    /// Create a group from any sequence of operands
    pub fn new<I, T>(operator: BooleanOperator, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        OperandGroup {
            operator,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of direct operands
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Check if the group has no operands
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

/// Entry inside a group: a condition or a nested group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// Leaf comparison
    Condition(Condition),
    /// Nested boolean combination
    Group(OperandGroup),
}

impl Operand {
    /// The condition, if this is a leaf
    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Operand::Condition(c) => Some(c),
            Operand::Group(_) => None,
        }
    }

    /// The group, if this is a nested group
    pub fn as_group(&self) -> Option<&OperandGroup> {
        match self {
            Operand::Group(g) => Some(g),
            Operand::Condition(_) => None,
        }
    }
}

impl From<Condition> for Operand {
    fn from(c: Condition) -> Self {
        Operand::Condition(c)
    }
}

impl From<OperandGroup> for Operand {
    fn from(g: OperandGroup) -> Self {
        Operand::Group(g)
    }
}

/// Rendered filter, ready to hand to a Weaviate client
///
/// Has exactly two keys: `operator` and `operands`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    /// Top-level `And` or `Or`
    pub operator: BooleanOperator,
    /// Top-level operands
    pub operands: Vec<Operand>,
}
