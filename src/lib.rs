//! # weaviate-filter
//!
//! Typed builder for the `where` filters accepted by Weaviate's GraphQL API.
//!
//! The builder validates operator and value-type names against fixed
//! allow-lists and composes conditions into `And`/`Or` trees. It does not
//! talk to Weaviate; the rendered filter is handed to a client library.
//!
//! ## Quick Start
//!
//! ```
//! use weaviate_filter::prelude::*;
//!
//! let mut builder = FilterBuilder::new();
//! builder.add_condition("name", "Equal", "valueString", "Bob")?;
//!
//! let filter = builder.get_filter();
//! assert_eq!(
//!     filter_to_value(&filter),
//!     json!({
//!         "operator": "And",
//!         "operands": [{"path": "name", "operator": "Equal", "valueString": "Bob"}]
//!     })
//! );
//! # Ok::<(), weaviate_filter::Error>(())
//! ```
//!
//! ## Two Ways to Add
//!
//! 1. **Single conditions** - `add_condition` appends to the condition list
//! 2. **Groups** - `add_operands`, `add_list_conditions_as_operands` and
//!    `add_conditions_for_multiple_paths` append to the group list
//!
//! `get_filter` renders the group list when it is non-empty and the condition
//! list otherwise. The lists are never merged: once a group exists, single
//! conditions no longer appear in the output.

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

// Re-export main entry point
pub use weaviate_filter_core::FilterBuilder;
pub use error::{Error, Result};

// Re-export wire encoding
pub use weaviate_filter_wire::{
    decode_filter, decode_operand, encode_decode_error, encode_error, encode_filter,
    encode_filter_pretty, encode_operand, error_to_value, filter_from_value, filter_to_value,
    operand_to_value, DecodeError,
};

// Re-export core errors
pub use weaviate_filter_core::{FilterError, FilterResult};

// Re-export types
pub use types::*;
