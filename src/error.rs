//! Unified error types for weaviate-filter.
//!
//! This module provides a single error type covering both builder rejections
//! and decoding failures.

use thiserror::Error;
use weaviate_filter_core::FilterError;
use weaviate_filter_wire::DecodeError;

/// All weaviate-filter errors.
///
/// This is the canonical error type for all operations exposed by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Condition operator outside the allowed operator set
    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    /// Value type outside the allowed value-type set
    #[error("invalid value type: {0}")]
    InvalidValueType(String),

    /// Grouping or filter operator other than `And`/`Or`
    #[error("invalid boolean operator: {0}")]
    InvalidBooleanOperator(String),

    /// Input text is not JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// JSON does not have the filter shape
    #[error("malformed filter at {at}: {reason}")]
    MalformedFilter {
        /// Location of the offending node
        at: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for weaviate-filter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a name was rejected by an allow-list.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidOperator(_)
                | Error::InvalidValueType(_)
                | Error::InvalidBooleanOperator(_)
        )
    }

    /// Check if the error came from decoding external JSON.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::InvalidJson(_) | Error::MalformedFilter { .. })
    }

    /// Canonical error code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidOperator(_) => "InvalidOperator",
            Error::InvalidValueType(_) => "InvalidValueType",
            Error::InvalidBooleanOperator(_) => "InvalidBooleanOperator",
            Error::InvalidJson(_) => "InvalidJson",
            Error::MalformedFilter { .. } => "MalformedFilter",
        }
    }
}

// Convert from builder errors
impl From<FilterError> for Error {
    fn from(e: FilterError) -> Self {
        let message = e.to_string();
        match e {
            FilterError::InvalidOperator { .. } => Error::InvalidOperator(message),
            FilterError::InvalidValueType { .. } => Error::InvalidValueType(message),
            FilterError::InvalidBooleanOperator { .. } => Error::InvalidBooleanOperator(message),
        }
    }
}

// Convert from decode errors
impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::InvalidJson(msg) => Error::InvalidJson(msg),
            DecodeError::Malformed { at, reason } => Error::MalformedFilter { at, reason },
            DecodeError::Rejected { at, source } => match Error::from(source) {
                Error::InvalidOperator(msg) => Error::InvalidOperator(format!("{} at {}", msg, at)),
                Error::InvalidValueType(msg) => {
                    Error::InvalidValueType(format!("{} at {}", msg, at))
                }
                Error::InvalidBooleanOperator(msg) => {
                    Error::InvalidBooleanOperator(format!("{} at {}", msg, at))
                }
                other => other,
            },
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidJson(e.to_string())
    }
}
