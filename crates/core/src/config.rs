//! Builder configuration
//!
//! Default operators used when a builder call does not name one explicitly.

use crate::operator::BooleanOperator;
use serde::{Deserialize, Serialize};

/// Default operators for a [`FilterBuilder`](crate::FilterBuilder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBuilderConfig {
    /// Operator for groups built by the list and multi-path helpers
    pub condition_operator: BooleanOperator,
    /// Top-level operator used by `get_filter`
    pub filter_operator: BooleanOperator,
}

impl Default for FilterBuilderConfig {
    fn default() -> Self {
        FilterBuilderConfig {
            condition_operator: BooleanOperator::Or,
            filter_operator: BooleanOperator::And,
        }
    }
}

impl FilterBuilderConfig {
    /// Create the default configuration (`Or` groups, `And` filter)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the helper group operator
    pub fn condition_operator(mut self, op: BooleanOperator) -> Self {
        self.condition_operator = op;
        self
    }

    /// Set the top-level filter operator
    pub fn filter_operator(mut self, op: BooleanOperator) -> Self {
        self.filter_operator = op;
        self
    }
}
