use polars::prelude::DataFrame;

/// An in-memory dataset: a polars frame plus the label it was loaded under.
///
/// Created only by the loader; mutated only by the type editor and the
/// column-drop operation. Lives for one session and is never persisted.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Source label (file stem or share-link file id), used in logs and
    /// summaries.
    pub source: String,
    pub data: DataFrame,
}

impl Dataset {
    pub fn new(source: impl Into<String>, data: DataFrame) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.get_column_names().iter().any(|c| c.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn column_names_preserve_frame_order() {
        let df = df!("b" => [1i64, 2], "a" => ["x", "y"]).unwrap();
        let dataset = Dataset::new("demo", df);
        assert_eq!(dataset.column_names(), vec!["b", "a"]);
        assert_eq!(dataset.row_count(), 2);
        assert!(dataset.has_column("a"));
        assert!(!dataset.has_column("c"));
    }
}
