//! Delimited-text parsing via the polars CSV reader.
//!
//! Declared column types come from polars schema inference. With date
//! parsing enabled the policy is: integers -> Int64, decimals -> Float64,
//! true/false -> Boolean, ISO-8601 dates and datetimes -> Date/Datetime
//! (eagerly), everything else -> String.

use std::io::Cursor;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Parses delimited text from an in-memory payload.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::Csv(e.to_string()))?;

    if df.width() == 0 {
        return Err(IngestError::Csv("no columns found".to_string()));
    }
    tracing::debug!(rows = df.height(), columns = df.width(), "parsed csv payload");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, TimeUnit};

    #[test]
    fn infers_int_float_string_and_bool() {
        let df = read_csv_bytes(b"a,b,c,d\n1,1.5,x,true\n2,2.5,y,false\n").unwrap();
        assert_eq!(df.column("a").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("b").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("c").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("d").unwrap().dtype(), &DataType::Boolean);
    }

    #[test]
    fn parses_iso_dates_eagerly() {
        let df = read_csv_bytes(b"day,stamp\n2024-01-01,2024-01-01T08:30:00\n").unwrap();
        assert_eq!(df.column("day").unwrap().dtype(), &DataType::Date);
        assert!(matches!(
            df.column("stamp").unwrap().dtype(),
            DataType::Datetime(TimeUnit::Microseconds, None)
        ));
    }

    #[test]
    fn empty_cells_become_nulls() {
        let df = read_csv_bytes(b"a,b\n1,x\n,y\n").unwrap();
        assert_eq!(df.column("a").unwrap().null_count(), 1);
        assert_eq!(df.column("b").unwrap().null_count(), 0);
    }

    #[test]
    fn rejects_non_text_payloads() {
        assert!(read_csv_bytes(&[0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe, 0x00]).is_err());
    }
}
