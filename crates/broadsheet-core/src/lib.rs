// File: crates/broadsheet-core/src/lib.rs
// Summary: Core library entry point; exports theme registry and chart spec building.

pub mod chart;
pub mod config;
pub mod data;
pub mod encoding;
pub mod error;
pub mod export;
pub mod mark;
pub mod registry;
pub mod theme;

pub use chart::{Chart, TitleParams, SCHEMA_URL};
pub use config::{AxisConfig, ThemeConfig, TitleConfig, ViewConfig};
pub use data::{Data, Row};
pub use encoding::{Channel, FieldType, Scale};
pub use error::ChartError;
pub use mark::Mark;
pub use theme::Theme;
