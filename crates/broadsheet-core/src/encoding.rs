// File: crates/broadsheet-core/src/encoding.rs
// Summary: Field-to-channel encodings with type tags and scale domains.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
    Ordinal,
    Temporal,
}

impl FieldType {
    /// Map a shorthand tag letter to its type.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Q" => Some(FieldType::Quantitative),
            "N" => Some(FieldType::Nominal),
            "O" => Some(FieldType::Ordinal),
            "T" => Some(FieldType::Temporal),
            _ => None,
        }
    }
}

/// Explicit scale settings; only the domain is exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<f64>>,
}

/// One positional encoding: which field feeds the channel and how the
/// engine should read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Channel {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            title: None,
            scale: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.scale = Some(Scale {
            domain: Some(vec![min, max]),
        });
        self
    }
}

/// `"field:Q"` shorthand. The split is on the last colon, so field names
/// containing colons keep working.
impl FromStr for Channel {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, tag) = s
            .rsplit_once(':')
            .ok_or_else(|| ChartError::BadShorthand(s.to_string()))?;
        if field.is_empty() {
            return Err(ChartError::BadShorthand(s.to_string()));
        }
        let field_type =
            FieldType::from_tag(tag).ok_or_else(|| ChartError::BadShorthand(s.to_string()))?;
        Ok(Channel::new(field, field_type))
    }
}
