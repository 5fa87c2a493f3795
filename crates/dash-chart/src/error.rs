use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while validating a chart request. Each one blocks only the
/// specific render that triggered it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The request references a column the dataset no longer has.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// The selection is incompatible with the column classification.
    #[error("{0}")]
    InvalidSelection(String),

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
}

impl ChartError {
    /// Inline warning text for the display layer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownColumn(column) => {
                format!("Column `{column}` is not in the current dataset.")
            }
            Self::InvalidSelection(message) => message.clone(),
            Self::Polars(_) => "The chart data could not be assembled.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
