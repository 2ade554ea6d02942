//! Wire error encoding
//!
//! Errors encode to JSON as:
//! ```json
//! {
//!   "code": "InvalidOperator",
//!   "message": "Invalid operator 'Between'. Allowed operators are: ...",
//!   "details": {"name": "Between"}
//! }
//! ```
//!
//! Decode errors use the codes `InvalidJson` and `MalformedFilter`, or the
//! code of the rejection they wrap, and add the location to `details`.

use super::decode::DecodeError;
use serde_json::{json, Value};
use weaviate_filter_core::FilterError;

/// Encode a FilterError to JSON
pub fn encode_error(error: &FilterError) -> String {
    error_to_value(error).to_string()
}

/// Encode a FilterError to a JSON value
pub fn error_to_value(error: &FilterError) -> Value {
    json!({
        "code": error.code(),
        "message": error.to_string(),
        "details": {"name": error.rejected_name()},
    })
}

/// Encode a DecodeError to JSON
pub fn encode_decode_error(error: &DecodeError) -> String {
    let value = match error {
        DecodeError::InvalidJson(_) => json!({
            "code": "InvalidJson",
            "message": error.to_string(),
            "details": null,
        }),
        DecodeError::Malformed { at, reason } => json!({
            "code": "MalformedFilter",
            "message": error.to_string(),
            "details": {"at": at, "reason": reason},
        }),
        DecodeError::Rejected { at, source } => json!({
            "code": source.code(),
            "message": error.to_string(),
            "details": {"at": at, "name": source.rejected_name()},
        }),
    };
    value.to_string()
}
