//! JSON wire encoding for filters
//!
//! - `encode`: typed filter -> Weaviate `where` JSON
//! - `decode`: Weaviate `where` JSON -> typed filter, validating names
//! - `error`: canonical `{code, message, details}` error JSON

mod decode;
mod encode;
mod error;

pub use decode::{decode_filter, decode_operand, filter_from_value, DecodeError};
pub use encode::{
    encode_filter, encode_filter_pretty, encode_operand, filter_to_value, operand_to_value,
};
pub use error::{encode_decode_error, encode_error, error_to_value};
