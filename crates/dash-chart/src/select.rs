use polars::prelude::AnyValue;

use dash_model::{
    ChartKind, ChartOutput, ChartRequest, ChartSpec, Dataset, SchemaProfile, TablePreview,
    any_to_string,
};

use crate::error::{ChartError, Result};

/// Validates a chart request against the profile and produces its output.
pub fn select(
    dataset: &Dataset,
    profile: &SchemaProfile,
    request: &ChartRequest,
) -> Result<ChartOutput> {
    for column in request.referenced_columns() {
        if !profile.contains(column) {
            return Err(ChartError::UnknownColumn(column.to_string()));
        }
    }

    let output = match request {
        ChartRequest::Univariate { column, kind } => univariate(profile, column, *kind)?,
        ChartRequest::Bivariate { x, y, group, kind } => {
            bivariate(dataset, profile, x, y, group.as_deref(), *kind)?
        }
    };
    tracing::debug!(kind = %request.kind(), "chart request accepted");
    Ok(output)
}

fn univariate(profile: &SchemaProfile, column: &str, kind: ChartKind) -> Result<ChartOutput> {
    if kind == ChartKind::TabularPreview {
        return Err(ChartError::InvalidSelection(
            "A tabular preview needs two columns; pick an x and a y axis.".to_string(),
        ));
    }

    // Box and trend charts are undefined over unordered values. Histograms
    // of a categorical column are fine: they become frequency plots.
    if kind.requires_ordered_axis() && !profile.is_numeric_or_temporal(column) {
        return Err(ChartError::InvalidSelection(format!(
            "`{column}` is not numeric or temporal; a {kind} chart needs ordered values."
        )));
    }

    let spec = match kind {
        ChartKind::BoxSummary | ChartKind::TrendLine => ChartSpec {
            kind,
            x: None,
            y: Some(column.to_string()),
            group: None,
        },
        _ => ChartSpec {
            kind,
            x: Some(column.to_string()),
            y: None,
            group: None,
        },
    };
    Ok(ChartOutput::Spec(spec))
}

fn bivariate(
    dataset: &Dataset,
    profile: &SchemaProfile,
    x: &str,
    y: &str,
    group: Option<&str>,
    kind: ChartKind,
) -> Result<ChartOutput> {
    if kind == ChartKind::Histogram {
        return Err(ChartError::InvalidSelection(
            "Histograms take a single column; use distribution for two.".to_string(),
        ));
    }

    if kind == ChartKind::TabularPreview {
        // Previews carry no type constraint and ignore grouping.
        return Ok(ChartOutput::Preview(build_preview(dataset, &[x, y])?));
    }

    if kind.requires_ordered_axis() && !profile.is_numeric_or_temporal(y) {
        return Err(ChartError::InvalidSelection(format!(
            "`{y}` is not numeric or temporal; the y axis of a {kind} chart needs ordered values."
        )));
    }

    if let Some(group) = group {
        if !profile.is_categorical(group) {
            return Err(ChartError::InvalidSelection(format!(
                "`{group}` is not categorical and cannot be used for grouping."
            )));
        }
    }

    Ok(ChartOutput::Spec(ChartSpec {
        kind,
        x: Some(x.to_string()),
        y: Some(y.to_string()),
        group: group.map(str::to_string),
    }))
}

/// Extracts the selected columns, dropping every row that has a missing
/// value in any of them, and stringifies the rest for display.
fn build_preview(dataset: &Dataset, columns: &[&str]) -> Result<TablePreview> {
    let mut selected = Vec::with_capacity(columns.len());
    for name in columns {
        let series = dataset
            .data
            .column(name)
            .map_err(|_| ChartError::UnknownColumn((*name).to_string()))?
            .as_materialized_series()
            .clone();
        selected.push(series);
    }

    let mut rows = Vec::new();
    for idx in 0..dataset.row_count() {
        let mut row = Vec::with_capacity(selected.len());
        let mut missing = false;
        for series in &selected {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            if matches!(value, AnyValue::Null) {
                missing = true;
                break;
            }
            row.push(any_to_string(&value));
        }
        if !missing {
            rows.push(row);
        }
    }

    Ok(TablePreview {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        rows,
    })
}
