//! Convenient imports for weaviate-filter.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use weaviate_filter::prelude::*;
//!
//! let mut builder = FilterBuilder::new();
//! builder.add_list_conditions_as_operands("title", Operator::Equal, ValueType::Text, ["a", "b"])?;
//! # Ok::<(), weaviate_filter::Error>(())
//! ```

// Main entry point
pub use weaviate_filter_core::FilterBuilder;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{
    BooleanOperator, Condition, Filter, FilterBuilderConfig, FilterValue, Operand, OperandGroup,
    Operator, Path, ValueType,
};

// Wire encoding
pub use weaviate_filter_wire::{decode_filter, encode_filter, filter_to_value};

// Re-export serde_json for convenience
pub use serde_json::json;
