//! Builder Scenarios
//!
//! End-to-end builder sessions and the shapes they render.

use crate::*;
use chrono::{TimeZone, Utc};

// =============================================================================
// Single Conditions
// =============================================================================

/// New builder, one condition, default render
#[test]
fn test_single_condition_renders_conditions() {
    init_tracing();
    let mut builder = FilterBuilder::new();
    builder
        .add_condition("name", "Equal", "valueString", "Bob")
        .unwrap();

    assert_eq!(
        render(&builder),
        json!({
            "operator": "And",
            "operands": [{"path": "name", "operator": "Equal", "valueString": "Bob"}]
        })
    );
}

/// Every allowed operator/value-type pair is accepted
#[test]
fn test_every_allowed_pair_is_accepted() {
    let mut builder = FilterBuilder::new();
    for op in Operator::ALL {
        for vt in ValueType::ALL {
            builder.add_condition("p", op.name(), vt.key(), 1).unwrap();
        }
    }
    assert_eq!(builder.conditions().len(), 13 * 6);
}

/// Nested path through a cross-reference
#[test]
fn test_nested_path_condition() {
    let mut builder = FilterBuilder::new();
    builder
        .add_condition(
            vec!["inPublication", "Publication", "name"],
            Operator::Equal,
            ValueType::String,
            "New Yorker",
        )
        .unwrap();

    assert_eq!(
        render(&builder)["operands"][0]["path"],
        json!(["inPublication", "Publication", "name"])
    );
}

// =============================================================================
// Groups
// =============================================================================

/// Explicit group of two conditions
#[test]
fn test_add_operands_and_group() {
    let mut builder = FilterBuilder::new();
    let c1 = text_condition("a", "x");
    let c2 = text_condition("b", "y");
    builder.add_operands("And", vec![c1, c2]).unwrap();

    assert_eq!(
        render(&builder),
        json!({
            "operator": "And",
            "operands": [{
                "operator": "And",
                "operands": [
                    {"path": "a", "operator": "Equal", "valueText": "x"},
                    {"path": "b", "operator": "Equal", "valueText": "y"}
                ]
            }]
        })
    );
}

/// Value list becomes an `Or` group
#[test]
fn test_value_list_group() {
    let mut builder = FilterBuilder::new();
    builder
        .add_list_conditions_as_operands("title", "Equal", "valueText", ["a", "b", "c"])
        .unwrap();

    let group = &builder.operands()[0];
    assert_eq!(group.operator, BooleanOperator::Or);
    assert_eq!(group.len(), 3);
    for (operand, expected) in group.operands.iter().zip(["a", "b", "c"]) {
        let c = operand.as_condition().unwrap();
        assert_eq!(c.path(), &Path::from("title"));
        assert_eq!(c.operator(), Operator::Equal);
        assert_eq!(c.value(), &json!(expected));
    }
}

/// Empty value list still yields a group
#[test]
fn test_empty_value_list_group() {
    let mut builder = FilterBuilder::new();
    builder
        .add_list_conditions_as_operands("title", "Equal", "valueText", Vec::<&str>::new())
        .unwrap();

    assert_eq!(
        render(&builder),
        json!({
            "operator": "And",
            "operands": [{"operator": "Or", "operands": []}]
        })
    );
}

/// Same value searched across several properties
#[test]
fn test_multiple_paths_group() {
    let mut builder = FilterBuilder::new();
    builder
        .add_conditions_for_multiple_paths(["a", "b"], "Equal", "valueText", "x")
        .unwrap();

    let group = &builder.operands()[0];
    assert_eq!(group.operator, BooleanOperator::Or);
    let paths: Vec<&Path> = group
        .operands
        .iter()
        .map(|o| o.as_condition().unwrap().path())
        .collect();
    assert_eq!(
        paths,
        vec![&Path::single_segment("a"), &Path::single_segment("b")]
    );
}

/// Groups built by different calls render in call order
#[test]
fn test_groups_render_in_call_order() {
    let mut builder = FilterBuilder::new();
    builder
        .add_conditions_for_multiple_paths(["title", "summary"], "Like", "valueText", "*rust*")
        .unwrap()
        .add_list_conditions_as_operands("year", "Equal", "valueInt", [2022, 2023])
        .unwrap()
        .add_operands("And", vec![Condition::typed("published", Operator::Equal, true)])
        .unwrap();

    let operands = render(&builder)["operands"].clone();
    assert_eq!(operands.as_array().unwrap().len(), 3);
    assert_eq!(operands[0]["operands"][0]["path"], json!(["title"]));
    assert_eq!(operands[1]["operands"][1]["valueInt"], json!(2023));
    assert_eq!(operands[2]["operands"][0]["valueBoolean"], json!(true));
}

/// Typed date values render as RFC 3339
#[test]
fn test_typed_date_condition() {
    let since = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut builder = FilterBuilder::new();
    builder
        .add_operands(
            BooleanOperator::And,
            vec![Condition::typed("createdAt", Operator::GreaterThanEqual, since)],
        )
        .unwrap();

    assert_eq!(
        render(&builder)["operands"][0]["operands"][0],
        json!({"path": "createdAt", "operator": "GreaterThanEqual", "valueDate": "2024-06-01T00:00:00Z"})
    );
}

// =============================================================================
// Precedence
// =============================================================================

/// Groups replace single conditions in the rendered filter
#[test]
fn test_groups_hide_single_conditions() {
    init_tracing();
    let mut builder = FilterBuilder::new();
    builder
        .add_condition("name", "Equal", "valueString", "Bob")
        .unwrap();
    builder
        .add_operands("Or", vec![text_condition("city", "Paris")])
        .unwrap();

    let rendered = render(&builder);
    assert_eq!(
        rendered,
        json!({
            "operator": "And",
            "operands": [{
                "operator": "Or",
                "operands": [{"path": "city", "operator": "Equal", "valueText": "Paris"}]
            }]
        })
    );
    assert!(!rendered.to_string().contains("Bob"));

    // Both lists are still held
    assert_eq!(builder.conditions().len(), 1);
    assert_eq!(builder.operands().len(), 1);
}

/// Order of calls does not change precedence
#[test]
fn test_precedence_independent_of_order() {
    let mut builder = FilterBuilder::new();
    builder
        .add_operands("Or", vec![text_condition("city", "Paris")])
        .unwrap();
    builder
        .add_condition("name", "Equal", "valueString", "Bob")
        .unwrap();

    let filter = builder.get_filter();
    assert_eq!(filter.operands.len(), 1);
    assert!(filter.operands[0].as_group().is_some());
}

/// Rendering twice gives the same result
#[test]
fn test_render_is_read_only() {
    let mut builder = FilterBuilder::new();
    builder.add_condition("a", "Equal", "valueInt", 1).unwrap();
    assert_eq!(builder.get_filter(), builder.get_filter());
}

// =============================================================================
// Top-Level Operator
// =============================================================================

/// `Or` at the top level
#[test]
fn test_get_filter_with_or() {
    let mut builder = FilterBuilder::new();
    builder.add_condition("a", "Equal", "valueInt", 1).unwrap();
    let filter = builder.get_filter_with("Or").unwrap();
    assert_eq!(filter_to_value(&filter)["operator"], json!("Or"));
}

/// Non-boolean top-level operator is rejected regardless of state
#[test]
fn test_get_filter_rejects_xor() {
    let empty = FilterBuilder::new();
    assert_eq!(
        empty.get_filter_with("Xor").unwrap_err().code(),
        "InvalidBooleanOperator"
    );

    let mut full = FilterBuilder::new();
    full.add_condition("a", "Equal", "valueInt", 1).unwrap();
    full.add_operands("And", vec![text_condition("b", "y")])
        .unwrap();
    assert_eq!(
        full.get_filter_with("Xor").unwrap_err().code(),
        "InvalidBooleanOperator"
    );
    assert!(full.get_filter_with("Equal").is_err());
}

/// Configured defaults apply to helpers and rendering
#[test]
fn test_configured_defaults() {
    let config = FilterBuilderConfig::new()
        .condition_operator(BooleanOperator::And)
        .filter_operator(BooleanOperator::Or);
    let mut builder = FilterBuilder::with_config(config);
    builder
        .add_conditions_for_multiple_paths(["a", "b"], "Equal", "valueText", "x")
        .unwrap();

    let rendered = render(&builder);
    assert_eq!(rendered["operator"], json!("Or"));
    assert_eq!(rendered["operands"][0]["operator"], json!("And"));
}

// =============================================================================
// Errors Through the Facade
// =============================================================================

/// Builder errors convert into the unified error
#[test]
fn test_builder_error_converts() {
    fn build() -> weaviate_filter::Result<Filter> {
        let mut builder = FilterBuilder::new();
        builder.add_condition("a", "Equal", "valueFloat", 1.0)?;
        Ok(builder.get_filter())
    }

    let err = build().unwrap_err();
    assert_eq!(err.code(), "InvalidValueType");
    assert!(err.is_invalid_input());
}
