//! Filter operators
//!
//! Two closed enumerations:
//!
//! - [`Operator`]: everything a condition may use (13 names)
//! - [`BooleanOperator`]: the `And`/`Or` subset used to combine operands
//!
//! Names are the exact strings the Weaviate `where` filter expects. Free-text
//! names are validated once, when converted into these types.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator accepted by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Boolean conjunction
    And,
    /// Boolean disjunction
    Or,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// Wildcard text match
    Like,
    /// Geo coordinate within distance
    WithinGeoRange,
    /// Property is (or is not) null
    IsNull,
    /// Array property shares at least one element
    ContainsAny,
    /// Array property contains every element
    ContainsAll,
}

impl Operator {
    /// All operators, in allow-list order
    pub const ALL: [Operator; 13] = [
        Operator::And,
        Operator::Or,
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanEqual,
        Operator::LessThan,
        Operator::LessThanEqual,
        Operator::Like,
        Operator::WithinGeoRange,
        Operator::IsNull,
        Operator::ContainsAny,
        Operator::ContainsAll,
    ];

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::Equal => "Equal",
            Operator::NotEqual => "NotEqual",
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterThanEqual => "GreaterThanEqual",
            Operator::LessThan => "LessThan",
            Operator::LessThanEqual => "LessThanEqual",
            Operator::Like => "Like",
            Operator::WithinGeoRange => "WithinGeoRange",
            Operator::IsNull => "IsNull",
            Operator::ContainsAny => "ContainsAny",
            Operator::ContainsAll => "ContainsAll",
        }
    }

    /// Parse from the exact (case-sensitive) wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// True for `And` and `Or`
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Comma-separated allow-list, used in error messages
    pub fn allowed_names() -> String {
        Self::ALL.map(|op| op.name()).join(", ")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_name(s).ok_or_else(|| FilterError::invalid_operator(s))
    }
}

impl TryFrom<&str> for Operator {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Operator {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.as_str().parse()
    }
}

impl From<BooleanOperator> for Operator {
    fn from(op: BooleanOperator) -> Self {
        match op {
            BooleanOperator::And => Operator::And,
            BooleanOperator::Or => Operator::Or,
        }
    }
}

/// Operator that combines operands into a group
///
/// Stricter than [`Operator`]: only `And` and `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BooleanOperator {
    /// Every operand must match
    #[default]
    And,
    /// At least one operand must match
    Or,
}

impl BooleanOperator {
    /// Both boolean operators
    pub const ALL: [BooleanOperator; 2] = [BooleanOperator::And, BooleanOperator::Or];

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            BooleanOperator::And => "And",
            BooleanOperator::Or => "Or",
        }
    }

    /// Parse from the exact (case-sensitive) wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "And" => Some(BooleanOperator::And),
            "Or" => Some(BooleanOperator::Or),
            _ => None,
        }
    }

    pub(crate) fn allowed_names() -> &'static str {
        "'And' or 'Or'"
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BooleanOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BooleanOperator::from_name(s).ok_or_else(|| FilterError::invalid_boolean_operator(s))
    }
}

impl TryFrom<&str> for BooleanOperator {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for BooleanOperator {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.as_str().parse()
    }
}

impl TryFrom<Operator> for BooleanOperator {
    type Error = FilterError;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        match op {
            Operator::And => Ok(BooleanOperator::And),
            Operator::Or => Ok(BooleanOperator::Or),
            other => Err(FilterError::invalid_boolean_operator(other.name())),
        }
    }
}
