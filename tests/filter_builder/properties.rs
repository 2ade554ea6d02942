//! Allow-List Properties
//!
//! Property tests over arbitrary operator and value-type names.

use crate::*;
use proptest::prelude::*;
use weaviate_filter::{operand_to_value, FilterError};

fn operator_strategy() -> impl Strategy<Value = Operator> {
    proptest::sample::select(Operator::ALL.to_vec())
}

fn value_type_strategy() -> impl Strategy<Value = ValueType> {
    proptest::sample::select(ValueType::ALL.to_vec())
}

/// Names that are not on the operator allow-list
fn unknown_operator() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,16}".prop_filter("must not be an allowed operator", |s| {
        Operator::from_name(s).is_none()
    })
}

/// Names that are not on the value-type allow-list
fn unknown_value_type() -> impl Strategy<Value = String> {
    "value[A-Za-z]{0,10}".prop_filter("must not be an allowed value type", |s| {
        ValueType::from_key(s).is_none()
    })
}

fn scalar_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<i64>().prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
        "[a-z ]{0,12}".prop_map(serde_json::Value::from),
    ]
}

proptest! {
    /// Valid pairs append exactly one condition with the value under the type key
    #[test]
    fn valid_pair_appends_one_condition(
        op in operator_strategy(),
        vt in value_type_strategy(),
        value in scalar_value(),
        preexisting in 0usize..4,
    ) {
        let mut builder = FilterBuilder::new();
        for i in 0..preexisting {
            builder.add_condition("seed", "Equal", "valueInt", i as i64).unwrap();
        }

        builder.add_condition("p", op.name(), vt.key(), value.clone()).unwrap();

        prop_assert_eq!(builder.conditions().len(), preexisting + 1);
        let rendered = operand_to_value(&Operand::from(builder.conditions()[preexisting].clone()));
        let obj = rendered.as_object().unwrap();
        prop_assert_eq!(obj.len(), 3);
        prop_assert_eq!(&obj["path"], &json!("p"));
        prop_assert_eq!(&obj["operator"], &json!(op.name()));
        prop_assert_eq!(&obj[vt.key()], &value);
    }

    /// Unknown operators fail with InvalidOperator and leave state alone
    #[test]
    fn unknown_operator_is_rejected(name in unknown_operator(), vt in value_type_strategy()) {
        let mut builder = FilterBuilder::new();
        builder.add_condition("seed", "Equal", "valueInt", 1).unwrap();

        let err = builder.add_condition("p", name.as_str(), vt, 1).unwrap_err();
        prop_assert_eq!(err, FilterError::InvalidOperator { name: name.clone() });
        prop_assert_eq!(builder.conditions().len(), 1);
    }

    /// Unknown value types fail with InvalidValueType and leave state alone
    #[test]
    fn unknown_value_type_is_rejected(op in operator_strategy(), name in unknown_value_type()) {
        let mut builder = FilterBuilder::new();

        let err = builder.add_condition("p", op, name.as_str(), 1).unwrap_err();
        prop_assert_eq!(err, FilterError::InvalidValueType { name: name.clone() });
        prop_assert!(builder.conditions().is_empty());
    }

    /// Only And/Or may group operands or top a filter
    #[test]
    fn only_and_or_group(op in operator_strategy()) {
        let mut builder = FilterBuilder::new();
        let grouped = builder.add_operands(op.name(), vec![text_condition("a", "x")]).is_ok();
        let rendered = builder.get_filter_with(op.name()).is_ok();

        prop_assert_eq!(grouped, op.is_boolean());
        prop_assert_eq!(rendered, op.is_boolean());
        prop_assert_eq!(builder.operands().len(), usize::from(op.is_boolean()));
    }

    /// Value lists produce one condition per value, in order
    #[test]
    fn value_list_preserves_order(values in proptest::collection::vec("[a-z]{1,6}", 0..8)) {
        let mut builder = FilterBuilder::new();
        builder
            .add_list_conditions_as_operands("title", "Equal", "valueText", values.clone())
            .unwrap();

        let group = &builder.operands()[0];
        let rendered: Vec<&serde_json::Value> = group
            .operands
            .iter()
            .map(|o| o.as_condition().unwrap().value())
            .collect();
        let expected: Vec<serde_json::Value> = values.iter().map(|v| json!(v)).collect();
        prop_assert_eq!(rendered, expected.iter().collect::<Vec<_>>());
    }
}
