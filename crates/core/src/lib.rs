//! Core types for weaviate-filter
//!
//! This crate defines the typed filter model and the builder that assembles it:
//! - Operator and value-type enumerations (the allow-lists)
//! - Conditions, operand groups and the rendered filter
//! - `FilterBuilder` and its configuration
//! - Error types
//!
//! JSON text encoding and decoding live in `weaviate-filter-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod condition;
pub mod config;
pub mod error;
pub mod operator;
pub mod value;

pub use builder::FilterBuilder;
pub use condition::{Condition, Filter, Operand, OperandGroup, Path};
pub use config::FilterBuilderConfig;
pub use error::{FilterError, FilterResult};
pub use operator::{BooleanOperator, Operator};
pub use value::{FilterValue, ValueType};
