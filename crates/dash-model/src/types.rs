use std::fmt;
use std::str::FromStr;

use polars::prelude::{DataType, TimeUnit};
use thiserror::Error;

/// The fixed menu of types a column can be reassigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// Generic text.
    Text,
    Int64,
    Float64,
    Boolean,
    /// Date/time with microsecond precision.
    Timestamp,
}

impl TargetType {
    pub const ALL: [TargetType; 5] = [
        TargetType::Text,
        TargetType::Int64,
        TargetType::Float64,
        TargetType::Boolean,
        TargetType::Timestamp,
    ];

    /// The polars dtype this menu entry coerces to.
    pub fn polars_dtype(self) -> DataType {
        match self {
            TargetType::Text => DataType::String,
            TargetType::Int64 => DataType::Int64,
            TargetType::Float64 => DataType::Float64,
            TargetType::Boolean => DataType::Boolean,
            TargetType::Timestamp => DataType::Datetime(TimeUnit::Microseconds, None),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Text => "text",
            TargetType::Int64 => "int64",
            TargetType::Float64 => "float64",
            TargetType::Boolean => "bool",
            TargetType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown target type `{0}` (expected text, int64, float64, bool, or timestamp)")]
pub struct TargetTypeParseError(pub String);

impl FromStr for TargetType {
    type Err = TargetTypeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "str" | "string" => Ok(TargetType::Text),
            "int64" | "int" => Ok(TargetType::Int64),
            "float64" | "float" => Ok(TargetType::Float64),
            "bool" | "boolean" => Ok(TargetType::Boolean),
            "timestamp" | "datetime" => Ok(TargetType::Timestamp),
            other => Err(TargetTypeParseError(other.to_string())),
        }
    }
}
