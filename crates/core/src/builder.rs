//! Filter builder
//!
//! [`FilterBuilder`] accumulates two append-only lists:
//!
//! - `conditions`: single conditions from [`FilterBuilder::add_condition`]
//! - `operands`: groups from [`FilterBuilder::add_operands`] and the
//!   list/multi-path helpers
//!
//! [`FilterBuilder::get_filter`] renders one of them. When any group exists,
//! the rendered filter holds the groups only and the single conditions are
//! left out. The two lists are never merged.
//!
//! ## Arguments
//!
//! Operator and value-type arguments take either the typed enums or their
//! wire names. Names are validated in argument order (operator, value type,
//! group operator) and the first failure is returned. A failed call never
//! changes the builder.
//!
//! ## Example
//!
//! ```
//! use weaviate_filter_core::{FilterBuilder, Operator, ValueType};
//!
//! let mut builder = FilterBuilder::new();
//! builder.add_condition("name", "Equal", "valueString", "Bob")?;
//! builder.add_condition("age", Operator::GreaterThan, ValueType::Int, 30)?;
//!
//! let filter = builder.get_filter();
//! assert_eq!(filter.operands.len(), 2);
//! # Ok::<(), weaviate_filter_core::FilterError>(())
//! ```

use crate::condition::{Condition, Filter, Operand, OperandGroup, Path};
use crate::config::FilterBuilderConfig;
use crate::error::{FilterError, FilterResult};
use crate::operator::{BooleanOperator, Operator};
use crate::value::ValueType;
use tracing::{debug, trace};

/// Convert a typed or free-text argument, logging rejections
fn resolve<T, A>(arg: A, what: &'static str) -> FilterResult<T>
where
    A: TryInto<T>,
    FilterError: From<A::Error>,
{
    arg.try_into().map_err(|e| {
        let err = FilterError::from(e);
        debug!(argument = what, error = %err, "rejected filter argument");
        err
    })
}

/// Accumulates conditions and operand groups into a Weaviate `where` filter
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    config: FilterBuilderConfig,
    conditions: Vec<Condition>,
    operands: Vec<OperandGroup>,
}

impl FilterBuilder {
    /// Create an empty builder with default operators
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with custom default operators
    pub fn with_config(config: FilterBuilderConfig) -> Self {
        FilterBuilder {
            config,
            conditions: Vec::new(),
            operands: Vec::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &FilterBuilderConfig {
        &self.config
    }

    /// Conditions added with [`add_condition`](Self::add_condition)
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Groups added with [`add_operands`](Self::add_operands) and the helpers
    pub fn operands(&self) -> &[OperandGroup] {
        &self.operands
    }

    /// Check if nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.operands.is_empty()
    }

    /// Append a single condition
    ///
    /// ## Errors
    /// - `InvalidOperator` if `operator` is not an allowed operator
    /// - `InvalidValueType` if `value_type` is not an allowed value type
    pub fn add_condition<O, V>(
        &mut self,
        path: impl Into<Path>,
        operator: O,
        value_type: V,
        value: impl Into<serde_json::Value>,
    ) -> FilterResult<&mut Self>
    where
        O: TryInto<Operator>,
        V: TryInto<ValueType>,
        FilterError: From<O::Error> + From<V::Error>,
    {
        let operator: Operator = resolve(operator, "operator")?;
        let value_type: ValueType = resolve(value_type, "value_type")?;

        self.conditions
            .push(Condition::new(path, operator, value_type, value));
        trace!(
            operator = %operator,
            value_type = %value_type,
            conditions = self.conditions.len(),
            "added condition"
        );
        Ok(self)
    }

    /// Wrap operands into one group and append it
    ///
    /// Operands may be conditions, groups, or a mix (`Vec<Operand>`).
    ///
    /// ## Errors
    /// - `InvalidBooleanOperator` if `operator` is not `And` or `Or`
    pub fn add_operands<B, I, T>(&mut self, operator: B, operands: I) -> FilterResult<&mut Self>
    where
        B: TryInto<BooleanOperator>,
        FilterError: From<B::Error>,
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let operator: BooleanOperator = resolve(operator, "operator")?;
        self.push_group(OperandGroup::new(operator, operands));
        Ok(self)
    }

    /// One condition per value, grouped with the default condition operator
    ///
    /// Every condition shares `path` and `operator`; values keep input order.
    /// An empty `values` still appends a group, with no operands.
    pub fn add_list_conditions_as_operands<O, V, I, X>(
        &mut self,
        path: impl Into<Path>,
        operator: O,
        value_type: V,
        values: I,
    ) -> FilterResult<&mut Self>
    where
        O: TryInto<Operator>,
        V: TryInto<ValueType>,
        FilterError: From<O::Error> + From<V::Error>,
        I: IntoIterator<Item = X>,
        X: Into<serde_json::Value>,
    {
        let condition_operator = self.config.condition_operator;
        self.add_list_conditions_as_operands_with(
            path,
            operator,
            value_type,
            values,
            condition_operator,
        )
    }

    /// Like [`add_list_conditions_as_operands`](Self::add_list_conditions_as_operands)
    /// with an explicit group operator
    ///
    /// ## Errors
    /// Checked in order: `InvalidOperator`, `InvalidValueType`,
    /// `InvalidBooleanOperator` (for `condition_operator`).
    pub fn add_list_conditions_as_operands_with<O, V, I, X, B>(
        &mut self,
        path: impl Into<Path>,
        operator: O,
        value_type: V,
        values: I,
        condition_operator: B,
    ) -> FilterResult<&mut Self>
    where
        O: TryInto<Operator>,
        V: TryInto<ValueType>,
        B: TryInto<BooleanOperator>,
        FilterError: From<O::Error> + From<V::Error> + From<B::Error>,
        I: IntoIterator<Item = X>,
        X: Into<serde_json::Value>,
    {
        let operator: Operator = resolve(operator, "operator")?;
        let value_type: ValueType = resolve(value_type, "value_type")?;
        let condition_operator: BooleanOperator =
            resolve(condition_operator, "condition_operator")?;

        let path = path.into();
        let conditions = values
            .into_iter()
            .map(|value| Condition::new(path.clone(), operator, value_type, value));
        self.push_group(OperandGroup::new(condition_operator, conditions));
        Ok(self)
    }

    /// One condition per path, grouped with the default condition operator
    ///
    /// Each path becomes a one-segment path (`["title"]`); all conditions
    /// share `operator`, `value_type` and `value`.
    pub fn add_conditions_for_multiple_paths<O, V, I, P>(
        &mut self,
        paths: I,
        operator: O,
        value_type: V,
        value: impl Into<serde_json::Value>,
    ) -> FilterResult<&mut Self>
    where
        O: TryInto<Operator>,
        V: TryInto<ValueType>,
        FilterError: From<O::Error> + From<V::Error>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let condition_operator = self.config.condition_operator;
        self.add_conditions_for_multiple_paths_with(
            paths,
            operator,
            value_type,
            value,
            condition_operator,
        )
    }

    /// Like [`add_conditions_for_multiple_paths`](Self::add_conditions_for_multiple_paths)
    /// with an explicit group operator
    ///
    /// ## Errors
    /// Checked in order: `InvalidOperator`, `InvalidValueType`,
    /// `InvalidBooleanOperator` (for `condition_operator`).
    pub fn add_conditions_for_multiple_paths_with<O, V, I, P, B>(
        &mut self,
        paths: I,
        operator: O,
        value_type: V,
        value: impl Into<serde_json::Value>,
        condition_operator: B,
    ) -> FilterResult<&mut Self>
    where
        O: TryInto<Operator>,
        V: TryInto<ValueType>,
        B: TryInto<BooleanOperator>,
        FilterError: From<O::Error> + From<V::Error> + From<B::Error>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let operator: Operator = resolve(operator, "operator")?;
        let value_type: ValueType = resolve(value_type, "value_type")?;
        let condition_operator: BooleanOperator =
            resolve(condition_operator, "condition_operator")?;

        let value = value.into();
        let conditions = paths.into_iter().map(|path| {
            Condition::new(Path::single_segment(path), operator, value_type, value.clone())
        });
        self.push_group(OperandGroup::new(condition_operator, conditions));
        Ok(self)
    }

    /// Render with the configured top-level operator
    ///
    /// Does not change the builder.
    pub fn get_filter(&self) -> Filter {
        self.render(self.config.filter_operator)
    }

    /// Render with an explicit top-level operator
    ///
    /// ## Errors
    /// - `InvalidBooleanOperator` if `operator` is not `And` or `Or`
    pub fn get_filter_with<B>(&self, operator: B) -> FilterResult<Filter>
    where
        B: TryInto<BooleanOperator>,
        FilterError: From<B::Error>,
    {
        let operator: BooleanOperator = resolve(operator, "operator")?;
        Ok(self.render(operator))
    }

    fn push_group(&mut self, group: OperandGroup) {
        trace!(
            operator = %group.operator,
            members = group.len(),
            groups = self.operands.len() + 1,
            "added operand group"
        );
        self.operands.push(group);
    }

    fn render(&self, operator: BooleanOperator) -> Filter {
        let operands: Vec<Operand> = if self.operands.is_empty() {
            self.conditions.iter().cloned().map(Operand::from).collect()
        } else {
            if !self.conditions.is_empty() {
                debug!(
                    excluded = self.conditions.len(),
                    groups = self.operands.len(),
                    "operand groups present, single conditions left out of filter"
                );
            }
            self.operands.iter().cloned().map(Operand::from).collect()
        };
        Filter { operator, operands }
    }
}
