// File: crates/broadsheet-core/tests/theme_config.rs
// Purpose: Pin every literal of the economist preset by wire key path.

use broadsheet_core::theme::{find, presets};
use broadsheet_core::Theme;
use serde_json::json;

fn economist_wire() -> serde_json::Value {
    serde_json::to_value(&Theme::economist().config).expect("config serializes")
}

#[test]
fn view_literals() {
    let cfg = economist_wire();
    assert_eq!(cfg.pointer("/view/continuousWidth"), Some(&json!(595.0)));
    assert_eq!(cfg.pointer("/view/stroke"), Some(&json!("transparent")));
    // unset properties never reach the wire
    assert_eq!(cfg.pointer("/view/continuousHeight"), None);
}

#[test]
fn title_literals() {
    let cfg = economist_wire();
    assert_eq!(cfg.pointer("/title/fontSize"), Some(&json!(17.0)));
    assert_eq!(cfg.pointer("/title/fontWeight"), Some(&json!("bold")));
    assert_eq!(cfg.pointer("/title/color"), Some(&json!("#000000")));
    assert_eq!(cfg.pointer("/title/anchor"), Some(&json!("start")));
    assert_eq!(cfg.pointer("/title/offset"), Some(&json!(26.0)));
    assert_eq!(cfg.pointer("/title/subtitlePadding"), Some(&json!(6.0)));
    assert_eq!(
        cfg.pointer("/title/subtitleFont"),
        Some(&json!("Econ sans cnd regular"))
    );
    assert_eq!(
        cfg.pointer("/title/subtitleFontWeight"),
        Some(&json!("normal"))
    );
    assert_eq!(cfg.pointer("/title/subtitleFontSize"), Some(&json!(14.0)));
    assert_eq!(cfg.pointer("/title/subtitleColor"), Some(&json!("#000000")));
}

#[test]
fn axis_x_literals() {
    let cfg = economist_wire();
    assert_eq!(
        cfg.pointer("/axisX/titleFont"),
        Some(&json!("Econ sans cnd regular"))
    );
    assert_eq!(cfg.pointer("/axisX/titleFontSize"), Some(&json!(13.0)));
    assert_eq!(cfg.pointer("/axisX/titlePadding"), Some(&json!(20.0)));
    assert_eq!(
        cfg.pointer("/axisX/labelFont"),
        Some(&json!("Econ sans cnd regular"))
    );
    assert_eq!(cfg.pointer("/axisX/labelFontSize"), Some(&json!(13.0)));
    assert_eq!(cfg.pointer("/axisX/labelPadding"), Some(&json!(5.0)));
    assert_eq!(cfg.pointer("/axisX/grid"), Some(&json!(false)));
    assert_eq!(cfg.pointer("/axisX/tickSize"), Some(&json!(-3.0)));
    assert_eq!(cfg.pointer("/axisX/tickColor"), Some(&json!("#000000")));
    assert_eq!(cfg.pointer("/axisX/domainWidth"), Some(&json!(0.7)));
    assert_eq!(cfg.pointer("/axisX/domainColor"), Some(&json!("#000000")));
}

#[test]
fn axis_y_literals() {
    let cfg = economist_wire();
    assert_eq!(
        cfg.pointer("/axisY/labelFont"),
        Some(&json!("Econ sans cnd regular"))
    );
    assert_eq!(cfg.pointer("/axisY/labelFontSize"), Some(&json!(13.0)));
    // explicit nulls, not absent: the engine reads null as "disabled"
    assert_eq!(cfg.pointer("/axisY/title"), Some(&serde_json::Value::Null));
    assert_eq!(cfg.pointer("/axisY/ticks"), Some(&serde_json::Value::Null));
    assert_eq!(cfg.pointer("/axisY/domain"), Some(&json!(false)));
    assert_eq!(
        cfg.pointer("/axisY/labelBaseline"),
        Some(&json!("line-bottom"))
    );
    assert_eq!(cfg.pointer("/axisY/labelAlign"), Some(&json!("right")));
    assert_eq!(cfg.pointer("/axisY/labelPadding"), Some(&json!(0.0)));
    assert_eq!(cfg.pointer("/axisY/orient"), Some(&json!("right")));
    assert_eq!(cfg.pointer("/axisY/gridWidth"), Some(&json!(0.5)));
    assert_eq!(cfg.pointer("/axisY/gridColor"), Some(&json!("#ACBFBF")));
    // x-axis carries the fonts; y-axis never sets a title font
    assert_eq!(cfg.pointer("/axisY/titleFont"), None);
}

#[test]
fn background_literal() {
    let cfg = economist_wire();
    assert_eq!(cfg.pointer("/background"), Some(&json!("#D9E9F0")));
}

#[test]
fn config_envelope() {
    let wrapped = Theme::economist()
        .config
        .to_value()
        .expect("envelope builds");
    assert_eq!(
        wrapped.pointer("/config/title/fontSize"),
        Some(&json!(17.0))
    );
}

#[test]
fn preset_lookup() {
    let names: Vec<String> = presets().into_iter().map(|t| t.name).collect();
    assert!(names.contains(&"economist".to_string()));
    assert!(names.contains(&"plain".to_string()));

    assert_eq!(find("ECONOMIST").name, "economist");
    assert_eq!(find("plain").name, "plain");
    // unknown names fall back to the flagship preset
    assert_eq!(find("no-such-theme").name, "economist");
}
