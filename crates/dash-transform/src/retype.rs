use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{DataType, Int64Chunked, IntoSeries, NewChunkedArray, Series, TimeUnit};

use dash_model::{Dataset, TargetType};

use crate::error::{Result, TransformError};

/// A non-fatal, per-column coercion failure collected during a batch pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercionWarning {
    pub column: String,
    pub target: TargetType,
    pub reason: String,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not convert `{}` to {}: {}",
            self.column, self.target, self.reason
        )
    }
}

/// Reassigns one column to a target type, mutating the dataset in place.
///
/// On failure the column is left exactly as it was and a `Coercion` error
/// describes why.
pub fn retype(dataset: &mut Dataset, column: &str, target: TargetType) -> Result<()> {
    let series = dataset
        .data
        .column(column)
        .map_err(|_| TransformError::UnknownColumn(column.to_string()))?
        .as_materialized_series()
        .clone();

    if series.dtype() == &target.polars_dtype() {
        return Ok(());
    }

    let coerced = coerce_series(&series, target).map_err(|reason| TransformError::Coercion {
        column: column.to_string(),
        target,
        reason,
    })?;

    dataset.data.with_column(coerced)?;
    tracing::debug!(column, target = %target, "reassigned column type");
    Ok(())
}

/// Applies a batch of type assignments. One bad column never aborts the
/// batch: every failure is collected as a warning and processing continues
/// with the next column.
pub fn retype_all(
    dataset: &mut Dataset,
    assignments: &[(String, TargetType)],
) -> Vec<CoercionWarning> {
    let mut warnings = Vec::new();
    for (column, target) in assignments {
        match retype(dataset, column, *target) {
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(%column, target = %target, %error, "type reassignment failed");
                warnings.push(CoercionWarning {
                    column: column.clone(),
                    target: *target,
                    reason: match error {
                        TransformError::Coercion { reason, .. } => reason,
                        other => other.to_string(),
                    },
                });
            }
        }
    }
    warnings
}

/// Removes a user-selected column from the dataset.
pub fn drop_column(dataset: &mut Dataset, column: &str) -> Result<()> {
    dataset
        .data
        .drop_in_place(column)
        .map_err(|_| TransformError::UnknownColumn(column.to_string()))?;
    tracing::debug!(column, "dropped column");
    Ok(())
}

/// Coerces a series to the target type, or explains why it cannot be done.
fn coerce_series(series: &Series, target: TargetType) -> std::result::Result<Series, String> {
    if target == TargetType::Timestamp && series.dtype() == &DataType::String {
        return parse_string_timestamps(series);
    }

    let cast = series
        .cast(&target.polars_dtype())
        .map_err(|e| e.to_string())?;

    // A permissive cast swallows bad values as nulls; treat that as failure
    // so the column survives unchanged.
    let introduced = cast.null_count().saturating_sub(series.null_count());
    if introduced > 0 {
        return Err(format!("{introduced} value(s) are not valid {target}"));
    }
    Ok(cast)
}

/// Parses a text column as timestamps: ISO-8601 datetimes first, then
/// plain dates at midnight. Every non-null value must parse.
fn parse_string_timestamps(series: &Series) -> std::result::Result<Series, String> {
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    let strings = series.str().map_err(|e| e.to_string())?;
    let mut micros: Vec<Option<i64>> = Vec::with_capacity(series.len());
    let mut bad = 0usize;

    for value in strings.into_iter() {
        match value {
            None => micros.push(None),
            Some(raw) => match parse_timestamp(raw.trim(), &DATETIME_FORMATS) {
                Some(dt) => micros.push(Some(dt.and_utc().timestamp_micros())),
                None => {
                    bad += 1;
                    micros.push(None);
                }
            },
        }
    }

    if bad > 0 {
        return Err(format!("{bad} value(s) are not valid timestamp"));
    }

    let chunked = Int64Chunked::from_iter_options(series.name().clone(), micros.into_iter());
    Ok(chunked
        .into_datetime(TimeUnit::Microseconds, None)
        .into_series())
}

fn parse_timestamp(raw: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
