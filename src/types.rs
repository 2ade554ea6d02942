//! Public types for the weaviate-filter API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Operators and value types (the allow-lists)
pub use weaviate_filter_core::{BooleanOperator, Operator, ValueType};

// Typed comparison values
pub use weaviate_filter_core::FilterValue;

// Filter tree
pub use weaviate_filter_core::{Condition, Filter, Operand, OperandGroup, Path};

// Builder configuration
pub use weaviate_filter_core::FilterBuilderConfig;
