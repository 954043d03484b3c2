// File: crates/broadsheet-core/src/config.rs
// Summary: Typed theme configuration scopes serialized to the engine's camelCase wire form.

use serde::Serialize;

use crate::error::ChartError;

/// Chart view area defaults (size, border).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

/// Title block defaults, including the subtitle line.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
}

/// Per-axis defaults. The engine keys these under `axisX`/`axisY`.
///
/// `title` and `ticks` are double-`Option`s: unset means the property is
/// absent from the wire form, `Some(None)` serializes as an explicit
/// `null`, which the engine reads as "disabled".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_baseline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
}

/// Full style-scope mapping handed to the engine as a chart `config` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(rename = "axisX", skip_serializing_if = "Option::is_none")]
    pub axis_x: Option<AxisConfig>,
    #[serde(rename = "axisY", skip_serializing_if = "Option::is_none")]
    pub axis_y: Option<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl ThemeConfig {
    /// Wrap the config in the `{"config": {...}}` envelope the engine's
    /// theme hook consumes.
    pub fn to_value(&self) -> Result<serde_json::Value, ChartError> {
        Ok(serde_json::json!({ "config": serde_json::to_value(self)? }))
    }
}
