use std::collections::BTreeSet;

use serde::Serialize;

/// Which axis roles a column may legally fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// Numeric or date/time typed; valid on ordered axes.
    NumericOrTemporal,
    /// Everything else: text, boolean, categorical.
    Categorical,
}

/// Derived, read-only statistics for one column.
///
/// Recomputed from scratch whenever the dataset changes; never updated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Declared dtype as rendered by polars (e.g. `i64`, `str`, `datetime[us]`).
    pub dtype: String,
    pub null_count: usize,
    /// Null percentage of the row count, rounded to two decimal places.
    pub null_percent: f64,
    /// Distinct non-null values.
    pub distinct_count: usize,
}

/// The classifier's view of a dataset: two disjoint column buckets plus
/// per-column summaries in frame order.
#[derive(Debug, Clone, Default)]
pub struct SchemaProfile {
    pub numeric_or_temporal: BTreeSet<String>,
    pub categorical: BTreeSet<String>,
    pub summaries: Vec<ColumnSummary>,
}

impl SchemaProfile {
    pub fn class_of(&self, column: &str) -> Option<ColumnClass> {
        if self.numeric_or_temporal.contains(column) {
            Some(ColumnClass::NumericOrTemporal)
        } else if self.categorical.contains(column) {
            Some(ColumnClass::Categorical)
        } else {
            None
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.class_of(column).is_some()
    }

    pub fn is_numeric_or_temporal(&self, column: &str) -> bool {
        self.numeric_or_temporal.contains(column)
    }

    pub fn is_categorical(&self, column: &str) -> bool {
        self.categorical.contains(column)
    }
}
