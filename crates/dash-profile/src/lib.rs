//! Column classification and per-column descriptive statistics.
//!
//! Every call is a fresh full pass over the dataset; nothing is cached or
//! updated incrementally. Callers re-classify after each mutation.

pub mod describe;
pub mod error;

use std::collections::BTreeSet;

use polars::prelude::{Column, DataType};

use dash_model::{ColumnSummary, Dataset, SchemaProfile};

pub use describe::{NumericDescribe, numeric_describe};
pub use error::{ProfileError, Result};

/// Partitions the dataset's columns into the numeric-or-temporal and
/// categorical buckets and computes a summary per column.
pub fn classify(dataset: &Dataset) -> Result<SchemaProfile> {
    let height = dataset.row_count();
    let mut numeric_or_temporal = BTreeSet::new();
    let mut categorical = BTreeSet::new();
    let mut summaries = Vec::with_capacity(dataset.data.width());

    for column in dataset.data.get_columns() {
        let name = column.name().to_string();
        if is_numeric_or_temporal(column.dtype()) {
            numeric_or_temporal.insert(name.clone());
        } else {
            categorical.insert(name.clone());
        }
        summaries.push(summarize_column(column, height)?);
    }

    tracing::debug!(
        source = %dataset.source,
        numeric = numeric_or_temporal.len(),
        categorical = categorical.len(),
        "classified dataset"
    );
    Ok(SchemaProfile {
        numeric_or_temporal,
        categorical,
        summaries,
    })
}

/// Numeric and date/time dtypes go on ordered axes; everything else,
/// booleans included, is treated as categorical.
fn is_numeric_or_temporal(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Date
            | DataType::Datetime(_, _)
            | DataType::Time
    )
}

fn summarize_column(column: &Column, height: usize) -> Result<ColumnSummary> {
    let null_count = column.null_count();
    let null_percent = if height == 0 {
        0.0
    } else {
        round2(null_count as f64 / height as f64 * 100.0)
    };

    // `n_unique` counts null as a distinct value; report distinct non-null
    // values instead.
    let n_unique = column.as_materialized_series().n_unique()?;
    let distinct_count = if null_count > 0 { n_unique - 1 } else { n_unique };

    Ok(ColumnSummary {
        name: column.name().to_string(),
        dtype: column.dtype().to_string(),
        null_count,
        null_percent,
        distinct_count,
    })
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::prelude::*;

    fn three_row_dataset() -> Dataset {
        let df = df!(
            "a" => [Some(1i64), Some(2), None],
            "b" => ["x", "y", "x"],
        )
        .unwrap();
        Dataset::new("demo", df)
    }

    #[test]
    fn classifies_numeric_and_categorical() {
        let profile = classify(&three_row_dataset()).unwrap();
        assert!(profile.is_numeric_or_temporal("a"));
        assert!(profile.is_categorical("b"));
    }

    #[test]
    fn summarizes_nulls_and_distincts() {
        let profile = classify(&three_row_dataset()).unwrap();

        let a = &profile.summaries[0];
        assert_eq!(a.name, "a");
        assert_eq!(a.null_count, 1);
        assert_eq!(a.null_percent, 33.33);
        assert_eq!(a.distinct_count, 2);

        let b = &profile.summaries[1];
        assert_eq!(b.name, "b");
        assert_eq!(b.null_count, 0);
        assert_eq!(b.null_percent, 0.0);
        assert_eq!(b.distinct_count, 2);
    }

    #[test]
    fn zero_nulls_means_zero_percent_everywhere() {
        let df = df!("a" => [1i64, 2], "b" => ["x", "y"]).unwrap();
        let profile = classify(&Dataset::new("demo", df)).unwrap();
        let total_nulls: usize = profile.summaries.iter().map(|s| s.null_count).sum();
        assert_eq!(total_nulls, 0);
        assert!(profile.summaries.iter().all(|s| s.null_percent == 0.0));
    }

    #[test]
    fn empty_frame_reports_zero_percent() {
        let df = df!("a" => Vec::<i64>::new()).unwrap();
        let profile = classify(&Dataset::new("empty", df)).unwrap();
        assert_eq!(profile.summaries[0].null_percent, 0.0);
        assert_eq!(profile.summaries[0].distinct_count, 0);
    }

    #[test]
    fn temporal_columns_join_the_numeric_bucket() {
        let df = df!(
            "day" => [NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
            "label" => ["a"],
            "flag" => [true],
        )
        .unwrap();
        let profile = classify(&Dataset::new("demo", df)).unwrap();
        assert!(profile.is_numeric_or_temporal("day"));
        assert!(profile.is_categorical("label"));
        // Booleans are categorical: they carry no order for box/trend axes.
        assert!(profile.is_categorical("flag"));
    }

    #[test]
    fn reclassifying_without_mutation_is_idempotent() {
        let dataset = three_row_dataset();
        let first = classify(&dataset).unwrap();
        let second = classify(&dataset).unwrap();
        assert_eq!(first.summaries, second.summaries);
        assert_eq!(first.numeric_or_temporal, second.numeric_or_temporal);
        assert_eq!(first.categorical, second.categorical);
    }
}
