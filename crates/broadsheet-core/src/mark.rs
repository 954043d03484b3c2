// File: crates/broadsheet-core/src/mark.rs
// Summary: Visual primitives a chart draws its records with.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Point,
    Bar,
    Line,
    Area,
    Rule,
}

impl Mark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Point => "point",
            Mark::Bar => "bar",
            Mark::Line => "line",
            Mark::Area => "area",
            Mark::Rule => "rule",
        }
    }
}
