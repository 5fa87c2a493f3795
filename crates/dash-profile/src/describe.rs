//! Describe-style aggregates for numeric columns.

use polars::prelude::DataType;

use dash_model::Dataset;

use crate::error::Result;

/// Aggregates for one numeric column, in the shape of the classic
/// describe table.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDescribe {
    pub column: String,
    /// Non-null values.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Describes the named columns. Columns that are not primitively numeric
/// (text, boolean, temporal) are skipped.
pub fn numeric_describe(dataset: &Dataset, columns: &[&str]) -> Result<Vec<NumericDescribe>> {
    let mut out = Vec::new();
    for name in columns {
        let Ok(column) = dataset.data.column(name) else {
            continue;
        };
        if !column.dtype().is_primitive_numeric() {
            continue;
        }
        let floats = column.as_materialized_series().cast(&DataType::Float64)?;
        out.push(NumericDescribe {
            column: (*name).to_string(),
            count: floats.len() - floats.null_count(),
            mean: floats.mean(),
            std: floats.std(1),
            min: floats.min::<f64>()?,
            max: floats.max::<f64>()?,
        });
    }
    Ok(out)
}
