// File: crates/broadsheet-core/src/data.rs
// Summary: Inline record binding for charts, plus CSV ingestion.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ChartError;

/// One record bound to a chart: field name to literal value.
pub type Row = Map<String, Value>;

/// The data source a chart binds: records are emitted verbatim, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Data {
    pub values: Vec<Row>,
}

impl Data {
    /// Accept a JSON array of objects, the engine's inline-values form.
    pub fn from_values(values: Value) -> Result<Self, ChartError> {
        match values {
            Value::Array(items) => {
                let mut rows = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    match item {
                        Value::Object(map) => rows.push(map),
                        other => {
                            return Err(ChartError::InvalidData(format!(
                                "record {i} is not an object: {other}"
                            )))
                        }
                    }
                }
                Ok(Self { values: rows })
            }
            other => Err(ChartError::InvalidData(format!(
                "expected an array of records, got: {other}"
            ))),
        }
    }

    /// Build records from field/value pairs.
    pub fn from_rows<R, F, K, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = F>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let values = rows
            .into_iter()
            .map(|fields| {
                fields
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect()
            })
            .collect();
        Self { values }
    }

    /// Load records from a headered CSV file. Numeric-looking cells become
    /// numbers, empty cells null, everything else strings.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())?;
        let headers = rdr.headers()?.clone();

        let mut values = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let mut row = Row::new();
            for (header, cell) in headers.iter().zip(rec.iter()) {
                row.insert(header.to_string(), cell_value(cell));
            }
            values.push(row);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn cell_value(cell: &str) -> Value {
    let s = cell.trim();
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = s.parse::<f64>() {
        // non-finite parses (NaN, inf) have no JSON number form
        if let Some(num) = serde_json::Number::from_f64(n) {
            return Value::Number(num);
        }
    }
    Value::String(s.to_string())
}
