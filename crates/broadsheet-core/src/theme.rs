// File: crates/broadsheet-core/src/theme.rs
// Summary: Named visual-default bundles applied to every chart while active.

use crate::config::{AxisConfig, ThemeConfig, TitleConfig, ViewConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub config: ThemeConfig,
}

impl Theme {
    pub fn new(name: impl Into<String>, config: ThemeConfig) -> Self {
        Self { name: name.into(), config }
    }

    /// Newspaper-style preset: condensed sans labels, right-hand value
    /// axis with no ticks, pale blue page background.
    pub fn economist() -> Self {
        Self {
            name: "economist".to_string(),
            config: ThemeConfig {
                view: Some(ViewConfig {
                    continuous_width: Some(595.0),
                    // no border around the chart
                    stroke: Some("transparent".to_string()),
                    ..ViewConfig::default()
                }),
                title: Some(TitleConfig {
                    font_size: Some(17.0),
                    font_weight: Some("bold".to_string()),
                    color: Some("#000000".to_string()),
                    anchor: Some("start".to_string()),
                    offset: Some(26.0),
                    subtitle_padding: Some(6.0),
                    subtitle_font: Some("Econ sans cnd regular".to_string()),
                    subtitle_font_weight: Some("normal".to_string()),
                    subtitle_font_size: Some(14.0),
                    subtitle_color: Some("#000000".to_string()),
                }),
                axis_x: Some(AxisConfig {
                    title_font: Some("Econ sans cnd regular".to_string()),
                    title_font_size: Some(13.0),
                    title_padding: Some(20.0),
                    label_font: Some("Econ sans cnd regular".to_string()),
                    label_font_size: Some(13.0),
                    label_padding: Some(5.0),
                    grid: Some(false),
                    tick_size: Some(-3.0),
                    tick_color: Some("#000000".to_string()),
                    domain_width: Some(0.7),
                    domain_color: Some("#000000".to_string()),
                    ..AxisConfig::default()
                }),
                axis_y: Some(AxisConfig {
                    label_font: Some("Econ sans cnd regular".to_string()),
                    label_font_size: Some(13.0),
                    // explicit nulls: the engine drops the axis title and ticks
                    title: Some(None),
                    ticks: Some(None),
                    domain: Some(false),
                    label_baseline: Some("line-bottom".to_string()),
                    label_align: Some("right".to_string()),
                    label_padding: Some(0.0),
                    orient: Some("right".to_string()),
                    grid_width: Some(0.5),
                    grid_color: Some("#ACBFBF".to_string()),
                    ..AxisConfig::default()
                }),
                background: Some("#D9E9F0".to_string()),
            },
        }
    }

    /// Engine defaults on a white page; the no-op counterpart to switch
    /// back to.
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            config: ThemeConfig {
                background: Some("#FFFFFF".to_string()),
                ..ThemeConfig::default()
            },
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::economist(), Theme::plain()]
}

/// Find a preset by its `name`, falling back to economist.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::economist()
}
