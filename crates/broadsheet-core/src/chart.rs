// File: crates/broadsheet-core/src/chart.rs
// Summary: Chart builder and engine-spec assembly with active-theme injection.

use serde_json::{Map, Value};

use crate::data::Data;
use crate::encoding::Channel;
use crate::error::ChartError;
use crate::mark::Mark;
use crate::registry;

/// Engine schema the emitted specs declare.
pub const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, PartialEq)]
pub struct TitleParams {
    pub text: String,
    pub subtitle: Option<String>,
}

pub struct Chart {
    pub data: Data,
    pub mark: Option<Mark>,
    pub x: Option<Channel>,
    pub y: Option<Channel>,
    pub title: Option<TitleParams>,
}

impl Chart {
    pub fn new(data: Data) -> Self {
        Self {
            data,
            mark: None,
            x: None,
            y: None,
            title: None,
        }
    }

    pub fn mark_point(mut self) -> Self {
        self.mark = Some(Mark::Point);
        self
    }

    pub fn mark_bar(mut self) -> Self {
        self.mark = Some(Mark::Bar);
        self
    }

    pub fn mark_line(mut self) -> Self {
        self.mark = Some(Mark::Line);
        self
    }

    pub fn mark_area(mut self) -> Self {
        self.mark = Some(Mark::Area);
        self
    }

    pub fn mark_rule(mut self) -> Self {
        self.mark = Some(Mark::Rule);
        self
    }

    pub fn encode_x(mut self, channel: Channel) -> Self {
        self.x = Some(channel);
        self
    }

    pub fn encode_y(mut self, channel: Channel) -> Self {
        self.y = Some(channel);
        self
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        match self.title {
            Some(ref mut t) => t.text = text.into(),
            None => {
                self.title = Some(TitleParams {
                    text: text.into(),
                    subtitle: None,
                })
            }
        }
        self
    }

    /// Add a subtitle line under the title. Without a preceding
    /// `with_title` the title text stays empty.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        match self.title {
            Some(ref mut t) => t.subtitle = Some(subtitle.into()),
            None => {
                self.title = Some(TitleParams {
                    text: String::new(),
                    subtitle: Some(subtitle.into()),
                })
            }
        }
        self
    }

    /// Assemble the engine spec. Pure given the chart and the active
    /// theme: identical inputs yield byte-identical JSON.
    pub fn to_spec(&self) -> Result<Value, ChartError> {
        let mut spec = Map::new();
        spec.insert("$schema".to_string(), Value::String(SCHEMA_URL.to_string()));
        spec.insert(
            "data".to_string(),
            serde_json::json!({ "values": &self.data.values }),
        );
        if let Some(mark) = self.mark {
            spec.insert("mark".to_string(), serde_json::to_value(mark)?);
        }

        let mut encoding = Map::new();
        if let Some(x) = &self.x {
            encoding.insert("x".to_string(), serde_json::to_value(x)?);
        }
        if let Some(y) = &self.y {
            encoding.insert("y".to_string(), serde_json::to_value(y)?);
        }
        if !encoding.is_empty() {
            spec.insert("encoding".to_string(), Value::Object(encoding));
        }

        if let Some(title) = &self.title {
            let value = match &title.subtitle {
                // a bare string title keeps the engine's short form
                None => Value::String(title.text.clone()),
                Some(subtitle) => serde_json::json!({
                    "text": title.text,
                    "subtitle": subtitle,
                }),
            };
            spec.insert("title".to_string(), value);
        }

        if let Some(theme) = registry::active() {
            spec.insert("config".to_string(), serde_json::to_value(&theme.config)?);
        }

        Ok(Value::Object(spec))
    }

    /// Pretty-printed spec JSON.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(&self.to_spec()?)?)
    }
}
