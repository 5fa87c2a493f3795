//! Shared data model for the data exploration studio.

pub mod chart;
pub mod dataset;
pub mod summary;
pub mod types;
pub mod value;

pub use chart::{ChartKind, ChartOutput, ChartRequest, ChartSpec, TablePreview};
pub use dataset::Dataset;
pub use summary::{ColumnClass, ColumnSummary, SchemaProfile};
pub use types::{TargetType, TargetTypeParseError};
pub use value::{any_to_string, format_numeric};
