use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chart-kind tokens accepted by the selector.
///
/// `Distribution` and `Histogram` both bind the column to the x axis; the
/// distinction is kept because the univariate widget offers them as separate
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Distribution,
    Histogram,
    TrendLine,
    BoxSummary,
    TabularPreview,
}

impl ChartKind {
    /// Kinds that are only defined over ordered (numeric or temporal) values.
    pub fn requires_ordered_axis(self) -> bool {
        matches!(self, ChartKind::TrendLine | ChartKind::BoxSummary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Distribution => "distribution",
            ChartKind::Histogram => "histogram",
            ChartKind::TrendLine => "trend-line",
            ChartKind::BoxSummary => "box-summary",
            ChartKind::TabularPreview => "tabular-preview",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "unknown chart kind `{0}` (expected distribution, histogram, trend-line, box-summary, or tabular-preview)"
)]
pub struct ChartKindParseError(pub String);

impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "distribution" | "dist" => Ok(ChartKind::Distribution),
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "trend-line" | "line" => Ok(ChartKind::TrendLine),
            "box-summary" | "box" => Ok(ChartKind::BoxSummary),
            "tabular-preview" | "table" => Ok(ChartKind::TabularPreview),
            other => Err(ChartKindParseError(other.to_string())),
        }
    }
}

/// A user's chart selection, validated against the current schema profile
/// before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    Univariate {
        column: String,
        kind: ChartKind,
    },
    Bivariate {
        x: String,
        y: String,
        group: Option<String>,
        kind: ChartKind,
    },
}

impl ChartRequest {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartRequest::Univariate { kind, .. } | ChartRequest::Bivariate { kind, .. } => *kind,
        }
    }

    /// Column names referenced by this request, grouping included.
    pub fn referenced_columns(&self) -> Vec<&str> {
        match self {
            ChartRequest::Univariate { column, .. } => vec![column.as_str()],
            ChartRequest::Bivariate { x, y, group, .. } => {
                let mut columns = vec![x.as_str(), y.as_str()];
                if let Some(group) = group {
                    columns.push(group.as_str());
                }
                columns
            }
        }
    }
}

/// Declarative chart description handed to the display layer. Never a
/// rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Selected columns with rows stringified for display. Rows containing a
/// missing value in any selected column have already been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What the selector hands back: a spec to render, or a preview to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "output", rename_all = "kebab-case")]
pub enum ChartOutput {
    Spec(ChartSpec),
    Preview(TablePreview),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens_parse() {
        assert_eq!("box".parse::<ChartKind>().unwrap(), ChartKind::BoxSummary);
        assert_eq!("trend-line".parse::<ChartKind>().unwrap(), ChartKind::TrendLine);
        assert_eq!("table".parse::<ChartKind>().unwrap(), ChartKind::TabularPreview);
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn ordered_axis_kinds() {
        assert!(ChartKind::TrendLine.requires_ordered_axis());
        assert!(ChartKind::BoxSummary.requires_ordered_axis());
        assert!(!ChartKind::Histogram.requires_ordered_axis());
        assert!(!ChartKind::TabularPreview.requires_ordered_axis());
    }

    #[test]
    fn referenced_columns_include_grouping() {
        let request = ChartRequest::Bivariate {
            x: "city".to_string(),
            y: "sales".to_string(),
            group: Some("region".to_string()),
            kind: ChartKind::BoxSummary,
        };
        assert_eq!(request.referenced_columns(), vec!["city", "sales", "region"]);
    }

    #[test]
    fn spec_serializes_without_empty_bindings() {
        let spec = ChartSpec {
            kind: ChartKind::Histogram,
            x: Some("age".to_string()),
            y: None,
            group: None,
        };
        let json = serde_json::to_string(&spec).expect("serialize spec");
        assert_eq!(json, r#"{"kind":"histogram","x":"age"}"#);
    }
}
