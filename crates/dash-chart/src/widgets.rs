//! The widget/session model for the display layer.
//!
//! `render_widgets` is a pure function from the current profile and the
//! previous selections to the widget specs and the selections to show.
//! Widget keys are stable across datasets, so a display layer that persists
//! state per key keeps the user's choices when a new file is processed.
//! Selections are only reset when the referenced column disappeared.

use serde::Serialize;

use dash_model::{ChartKind, ChartRequest, SchemaProfile};

/// Option shown in the grouping dropdown for "no grouping".
pub const NO_GROUP: &str = "(none)";

/// One dropdown/radio for the display layer to render: a stable key, a
/// label, the full option set, and the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: String,
}

/// Current selections across both analysis sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub uni_column: Option<String>,
    pub uni_kind: ChartKind,
    pub x: Option<String>,
    pub y: Option<String>,
    pub group: Option<String>,
    pub bi_kind: ChartKind,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            uni_column: None,
            uni_kind: ChartKind::Distribution,
            x: None,
            y: None,
            group: None,
            bi_kind: ChartKind::TabularPreview,
        }
    }
}

impl Selections {
    /// The univariate request these selections describe, if a column is
    /// selected.
    pub fn univariate_request(&self) -> Option<ChartRequest> {
        self.uni_column.as_ref().map(|column| ChartRequest::Univariate {
            column: column.clone(),
            kind: self.uni_kind,
        })
    }

    /// The bivariate request these selections describe, if both axes are
    /// selected.
    pub fn bivariate_request(&self) -> Option<ChartRequest> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some(ChartRequest::Bivariate {
                x: x.clone(),
                y: y.clone(),
                group: self.group.clone(),
                kind: self.bi_kind,
            }),
            _ => None,
        }
    }
}

const UNI_KINDS: [ChartKind; 4] = [
    ChartKind::Distribution,
    ChartKind::Histogram,
    ChartKind::TrendLine,
    ChartKind::BoxSummary,
];

const BI_KINDS: [ChartKind; 4] = [
    ChartKind::TabularPreview,
    ChartKind::BoxSummary,
    ChartKind::TrendLine,
    ChartKind::Distribution,
];

/// Computes the widget set for the current profile, carrying over previous
/// selections that are still valid and defaulting the rest.
pub fn render_widgets(
    profile: &SchemaProfile,
    previous: &Selections,
) -> (Vec<WidgetSpec>, Selections) {
    // Frame order, from the summaries; the class sets are sorted and would
    // lose it.
    let all: Vec<String> = profile.summaries.iter().map(|s| s.name.clone()).collect();
    let numeric: Vec<String> = all
        .iter()
        .filter(|name| profile.is_numeric_or_temporal(name.as_str()))
        .cloned()
        .collect();
    let categorical: Vec<String> = all
        .iter()
        .filter(|name| profile.is_categorical(name.as_str()))
        .cloned()
        .collect();

    let selections = Selections {
        uni_column: carry_over(&previous.uni_column, &all),
        uni_kind: previous.uni_kind,
        x: carry_over(&previous.x, &all),
        y: carry_over(&previous.y, &numeric),
        group: previous
            .group
            .as_ref()
            .filter(|g| categorical.contains(*g))
            .cloned(),
        bi_kind: previous.bi_kind,
    };

    let widgets = vec![
        WidgetSpec {
            key: "uni-column",
            label: "Column",
            options: all.clone(),
            selected: selections.uni_column.clone().unwrap_or_default(),
        },
        WidgetSpec {
            key: "uni-kind",
            label: "Plot type",
            options: kind_options(&UNI_KINDS),
            selected: selections.uni_kind.to_string(),
        },
        WidgetSpec {
            key: "bi-x",
            label: "X-axis column",
            options: all,
            selected: selections.x.clone().unwrap_or_default(),
        },
        WidgetSpec {
            key: "bi-y",
            label: "Y-axis column (numeric/date only)",
            options: numeric,
            selected: selections.y.clone().unwrap_or_default(),
        },
        WidgetSpec {
            key: "bi-group",
            label: "Legend (categorical)",
            options: std::iter::once(NO_GROUP.to_string())
                .chain(categorical)
                .collect(),
            selected: selections
                .group
                .clone()
                .unwrap_or_else(|| NO_GROUP.to_string()),
        },
        WidgetSpec {
            key: "bi-kind",
            label: "Chart type",
            options: kind_options(&BI_KINDS),
            selected: selections.bi_kind.to_string(),
        },
    ];

    (widgets, selections)
}

/// Keeps a previous selection when still offered, otherwise falls back to
/// the first option.
fn carry_over(previous: &Option<String>, options: &[String]) -> Option<String> {
    match previous {
        Some(value) if options.contains(value) => Some(value.clone()),
        _ => options.first().cloned(),
    }
}

fn kind_options(kinds: &[ChartKind]) -> Vec<String> {
    kinds.iter().map(|kind| kind.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_model::Dataset;
    use dash_profile::classify;
    use polars::prelude::*;

    fn profile_for(df: DataFrame) -> SchemaProfile {
        classify(&Dataset::new("demo", df)).unwrap()
    }

    #[test]
    fn defaults_pick_first_options() {
        let profile = profile_for(df!("a" => [1i64, 2], "b" => ["x", "y"]).unwrap());
        let (widgets, selections) = render_widgets(&profile, &Selections::default());

        assert_eq!(selections.uni_column.as_deref(), Some("a"));
        assert_eq!(selections.y.as_deref(), Some("a"));
        assert_eq!(selections.group, None);

        let group_widget = widgets.iter().find(|w| w.key == "bi-group").unwrap();
        assert_eq!(group_widget.selected, NO_GROUP);
        assert_eq!(group_widget.options, vec![NO_GROUP.to_string(), "b".to_string()]);
    }

    #[test]
    fn selections_survive_a_compatible_new_dataset() {
        let profile = profile_for(df!("a" => [1i64], "b" => ["x"], "c" => [2i64]).unwrap());
        let previous = Selections {
            uni_column: Some("c".to_string()),
            x: Some("b".to_string()),
            y: Some("c".to_string()),
            group: Some("b".to_string()),
            ..Selections::default()
        };
        let (_, selections) = render_widgets(&profile, &previous);
        assert_eq!(selections.uni_column.as_deref(), Some("c"));
        assert_eq!(selections.x.as_deref(), Some("b"));
        assert_eq!(selections.y.as_deref(), Some("c"));
        assert_eq!(selections.group.as_deref(), Some("b"));
    }

    #[test]
    fn vanished_columns_reset_to_defaults() {
        let profile = profile_for(df!("a" => [1i64], "b" => ["x"]).unwrap());
        let previous = Selections {
            uni_column: Some("gone".to_string()),
            y: Some("gone".to_string()),
            group: Some("gone".to_string()),
            ..Selections::default()
        };
        let (_, selections) = render_widgets(&profile, &previous);
        assert_eq!(selections.uni_column.as_deref(), Some("a"));
        assert_eq!(selections.y.as_deref(), Some("a"));
        assert_eq!(selections.group, None);
    }

    #[test]
    fn widget_keys_are_stable() {
        let profile = profile_for(df!("a" => [1i64]).unwrap());
        let (widgets, _) = render_widgets(&profile, &Selections::default());
        let keys: Vec<&str> = widgets.iter().map(|w| w.key).collect();
        assert_eq!(
            keys,
            vec!["uni-column", "uni-kind", "bi-x", "bi-y", "bi-group", "bi-kind"]
        );
    }

    #[test]
    fn requests_built_from_selections() {
        let profile = profile_for(df!("a" => [1i64], "b" => ["x"]).unwrap());
        let (_, selections) = render_widgets(&profile, &Selections::default());

        let uni = selections.univariate_request().unwrap();
        assert_eq!(
            uni,
            dash_model::ChartRequest::Univariate {
                column: "a".to_string(),
                kind: ChartKind::Distribution,
            }
        );
        assert!(selections.bivariate_request().is_some());
    }
}
