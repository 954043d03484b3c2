// File: crates/broadsheet-core/src/error.rs
// Summary: Error taxonomy for theme lookup, data binding, and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Enable was asked for a theme name nobody registered.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Encoding shorthand did not match `field:Q|N|O|T`.
    #[error("bad encoding shorthand '{0}'")]
    BadShorthand(String),

    /// Inline data was not an array of objects.
    #[error("invalid inline data: {0}")]
    InvalidData(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
