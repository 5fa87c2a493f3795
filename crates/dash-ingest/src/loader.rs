//! Format dispatch and the csv-then-spreadsheet fallback.

use std::path::Path;

use dash_model::Dataset;

use crate::csv::read_csv_bytes;
use crate::error::{IngestError, Result};
use crate::spreadsheet::read_spreadsheet_bytes;

/// Parser selected from a declared file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredFormat {
    Delimited,
    Spreadsheet,
}

impl DeclaredFormat {
    /// Maps an extension to a parser. Unknown extensions return `None` and
    /// take the fallback path.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Delimited),
            "xlsx" | "xlsm" | "xlsb" | "xls" => Some(Self::Spreadsheet),
            _ => None,
        }
    }
}

/// Loads a dataset from raw bytes.
///
/// With a recognized extension the matching parser runs alone and its error
/// is final. Without one, delimited parsing is attempted first; on failure
/// the payload is re-read from the start as a spreadsheet. Both failing is
/// an `UnrecognizedFormat` error carrying both messages.
pub fn load_bytes(bytes: &[u8], declared_ext: Option<&str>, label: &str) -> Result<Dataset> {
    let format = declared_ext.and_then(DeclaredFormat::from_extension);
    let df = match format {
        Some(DeclaredFormat::Delimited) => read_csv_bytes(bytes)?,
        Some(DeclaredFormat::Spreadsheet) => read_spreadsheet_bytes(bytes)?,
        None => match read_csv_bytes(bytes) {
            Ok(df) => df,
            Err(csv_error) => match read_spreadsheet_bytes(bytes) {
                Ok(df) => df,
                Err(spreadsheet_error) => {
                    return Err(IngestError::UnrecognizedFormat {
                        csv: csv_error.to_string(),
                        spreadsheet: spreadsheet_error.to_string(),
                    });
                }
            },
        },
    };

    tracing::info!(label, rows = df.height(), columns = df.width(), "loaded dataset");
    Ok(Dataset::new(label, df))
}

/// Loads a dataset from a local file, using the file stem as its label.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str());
    let label = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    load_bytes(&bytes, ext, label)
}
