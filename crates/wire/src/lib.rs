//! Wire encoding for weaviate-filter
//!
//! This crate converts between the typed filter model and the JSON shape the
//! Weaviate `where` argument expects.
//!
//! ## Wire Shapes
//!
//! | Node | JSON |
//! |------|------|
//! | Filter | `{"operator": "And"\|"Or", "operands": [...]}` |
//! | Group | `{"operator": "And"\|"Or", "operands": [...]}` |
//! | Condition | `{"path": "p" \| ["a","b"], "operator": "...", "<valueType>": v}` |
//!
//! ## Examples
//!
//! ```
//! use weaviate_filter_core::FilterBuilder;
//! use weaviate_filter_wire::{decode_filter, encode_filter};
//!
//! let mut builder = FilterBuilder::new();
//! builder.add_condition("name", "Equal", "valueString", "Bob").unwrap();
//!
//! let json = encode_filter(&builder.get_filter());
//! assert_eq!(
//!     json,
//!     r#"{"operator":"And","operands":[{"path":"name","operator":"Equal","valueString":"Bob"}]}"#
//! );
//!
//! let decoded = decode_filter(&json).unwrap();
//! assert_eq!(decoded, builder.get_filter());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_filter, decode_operand, encode_decode_error, encode_error, encode_filter,
    encode_filter_pretty, encode_operand, error_to_value, filter_from_value, filter_to_value,
    operand_to_value, DecodeError,
};
