//! Error types for filter construction
//!
//! Every failure is a rejected input: an operator or value-type name that is
//! not on its allow-list. Errors are raised before any builder state changes.
//!
//! ## Error Codes
//!
//! | Code | Raised when |
//! |------|-------------|
//! | InvalidOperator | condition operator is not an allowed operator |
//! | InvalidValueType | value type is not an allowed value type |
//! | InvalidBooleanOperator | grouping/filter operator is not `And` or `Or` |

use crate::operator::{BooleanOperator, Operator};
use crate::value::ValueType;
use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// A rejected filter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Condition operator outside the allowed operator set
    #[error("Invalid operator '{name}'. Allowed operators are: {}", Operator::allowed_names())]
    InvalidOperator {
        /// The rejected name
        name: String,
    },

    /// Value type outside the allowed value-type set
    #[error("Invalid value type '{name}'. Allowed value types are: {}", ValueType::allowed_names())]
    InvalidValueType {
        /// The rejected name
        name: String,
    },

    /// Grouping operator other than `And` or `Or`
    #[error("Invalid operator '{name}'. Operator must be {}", BooleanOperator::allowed_names())]
    InvalidBooleanOperator {
        /// The rejected name
        name: String,
    },
}

impl FilterError {
    /// Canonical error code
    pub const fn code(&self) -> &'static str {
        match self {
            FilterError::InvalidOperator { .. } => "InvalidOperator",
            FilterError::InvalidValueType { .. } => "InvalidValueType",
            FilterError::InvalidBooleanOperator { .. } => "InvalidBooleanOperator",
        }
    }

    /// The name that was rejected
    pub fn rejected_name(&self) -> &str {
        match self {
            FilterError::InvalidOperator { name }
            | FilterError::InvalidValueType { name }
            | FilterError::InvalidBooleanOperator { name } => name,
        }
    }

    pub(crate) fn invalid_operator(name: impl Into<String>) -> Self {
        FilterError::InvalidOperator { name: name.into() }
    }

    pub(crate) fn invalid_value_type(name: impl Into<String>) -> Self {
        FilterError::InvalidValueType { name: name.into() }
    }

    pub(crate) fn invalid_boolean_operator(name: impl Into<String>) -> Self {
        FilterError::InvalidBooleanOperator { name: name.into() }
    }
}

// Typed arguments convert with `Infallible`; this lets builder methods accept
// both typed enums and free-text names behind one `TryInto` bound.
impl From<std::convert::Infallible> for FilterError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
