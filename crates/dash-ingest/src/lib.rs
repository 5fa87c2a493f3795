//! Dataset loading.
//!
//! Parses delimited text through the polars CSV reader and spreadsheets
//! through calamine. When no file extension is available the loader tries
//! delimited text first and falls back to spreadsheet parsing.

pub mod csv;
pub mod error;
pub mod loader;
pub mod spreadsheet;

pub use error::{IngestError, Result};
pub use loader::{DeclaredFormat, load_bytes, load_path};
