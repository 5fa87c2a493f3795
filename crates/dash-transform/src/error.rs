use polars::prelude::PolarsError;
use thiserror::Error;

use dash_model::TargetType;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// The column's values could not be coerced to the requested type. The
    /// column is left unchanged.
    #[error("could not convert `{column}` to {target}: {reason}")]
    Coercion {
        column: String,
        target: TargetType,
        reason: String,
    },

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
