// File: crates/broadsheet-core/tests/spec_assembly.rs
// Purpose: Spec JSON shape for marks, encodings, titles, and determinism.

use broadsheet_core::{Channel, Chart, Data, FieldType, SCHEMA_URL};
use serde_json::json;

#[test]
fn minimal_chart_still_assembles() {
    // no mark, no encodings: the engine owns validation, we stay structural
    let chart = Chart::new(Data::default());
    let spec = chart.to_spec().unwrap();

    assert_eq!(spec.pointer("/$schema"), Some(&json!(SCHEMA_URL)));
    assert_eq!(spec.pointer("/data/values"), Some(&json!([])));
    assert_eq!(spec.pointer("/mark"), None);
    assert_eq!(spec.pointer("/encoding"), None);
    assert_eq!(spec.pointer("/title"), None);
}

#[test]
fn marks_serialize_lowercase() {
    let data = Data::from_values(json!([{"x": 0}])).unwrap();
    let spec = Chart::new(data.clone()).mark_rule().to_spec().unwrap();
    assert_eq!(spec.pointer("/mark"), Some(&json!("rule")));

    let spec = Chart::new(data).mark_area().to_spec().unwrap();
    assert_eq!(spec.pointer("/mark"), Some(&json!("area")));
}

#[test]
fn channel_serialization() {
    let data = Data::from_values(json!([{"x": 1, "y": 2}])).unwrap();
    let spec = Chart::new(data)
        .mark_line()
        .encode_x(
            Channel::new("x", FieldType::Quantitative)
                .with_title("X Axis Label")
                .with_domain(0.0, 10.0),
        )
        .encode_y(Channel::new("y", FieldType::Ordinal))
        .to_spec()
        .unwrap();

    assert_eq!(
        spec.pointer("/encoding/x"),
        Some(&json!({
            "field": "x",
            "type": "quantitative",
            "title": "X Axis Label",
            "scale": {"domain": [0.0, 10.0]},
        }))
    );
    // bare channel: no title, no scale on the wire
    assert_eq!(
        spec.pointer("/encoding/y"),
        Some(&json!({"field": "y", "type": "ordinal"}))
    );
}

#[test]
fn title_short_and_long_forms() {
    let data = Data::from_values(json!([{"x": 0}])).unwrap();

    let spec = Chart::new(data.clone())
        .with_title("Plain")
        .to_spec()
        .unwrap();
    assert_eq!(spec.pointer("/title"), Some(&json!("Plain")));

    let spec = Chart::new(data)
        .with_title("Text")
        .with_subtitle("Sub")
        .to_spec()
        .unwrap();
    assert_eq!(
        spec.pointer("/title"),
        Some(&json!({"text": "Text", "subtitle": "Sub"}))
    );
}

#[test]
fn records_bind_in_author_order() {
    let data = Data::from_values(json!([
        {"y": 9, "x": 1},
        {"x": 2, "y": 8},
    ]))
    .unwrap();
    let spec = Chart::new(data).to_spec().unwrap();
    let text = serde_json::to_string(&spec).unwrap();
    // field order within a record survives serialization
    assert!(text.contains(r#"{"y":9,"x":1}"#));
    assert!(text.contains(r#"{"x":2,"y":8}"#));
}

#[test]
fn spec_assembly_is_deterministic() {
    let data = Data::from_values(json!([{"x": 1, "y": 2}, {"x": 2, "y": 3}])).unwrap();
    let chart = Chart::new(data)
        .mark_point()
        .encode_x(Channel::new("x", FieldType::Quantitative))
        .encode_y(Channel::new("y", FieldType::Quantitative))
        .with_title("Same");

    assert_eq!(chart.to_json().unwrap(), chart.to_json().unwrap());
}
