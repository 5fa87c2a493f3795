//! Spreadsheet parsing via calamine.
//!
//! The first worksheet is read; its first row supplies the headers. Each
//! column gets the narrowest uniform type its cells allow: Int64, Float64
//! (when integers and decimals mix), Boolean, Datetime, otherwise String.
//! Empty cells are nulls.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::NaiveDateTime;
use polars::prelude::{
    Column, DataFrame, Int64Chunked, IntoColumn, IntoSeries, NamedFrom, NewChunkedArray, Series,
    TimeUnit,
};

use crate::error::{IngestError, Result};

/// Parses the first worksheet of a spreadsheet payload into a frame.
pub fn read_spreadsheet_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    let df = range_to_dataframe(&range)?;
    tracing::debug!(
        rows = df.height(),
        columns = df.width(),
        "parsed spreadsheet payload"
    );
    Ok(df)
}

/// One parsed cell, before a column type has been chosen.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Text(String),
}

/// Builds a frame from a worksheet range: headers from the first row, one
/// uniformly typed column per header.
pub fn range_to_dataframe(range: &Range<Data>) -> Result<DataFrame> {
    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| IngestError::Spreadsheet("worksheet is empty".to_string()))?;

    let headers: Vec<String> = header_row.iter().map(header_text).collect();
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, slot) in cells.iter_mut().enumerate() {
            slot.push(parse_cell(row.get(idx).unwrap_or(&Data::Empty)));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| build_column(&name, &values))
        .collect();

    DataFrame::new(columns).map_err(|e| IngestError::Spreadsheet(e.to_string()))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn parse_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Null,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => {
            // Excel stores most numbers as floats; fold exact integers back.
            if v.fract() == 0.0 && v.abs() < (i64::MAX as f64) {
                Cell::Int(*v as i64)
            } else {
                Cell::Float(*v)
            }
        }
        Data::Bool(v) => Cell::Bool(*v),
        Data::DateTime(v) => match v.as_datetime() {
            Some(dt) => Cell::DateTime(dt),
            None => Cell::Float(v.as_f64()),
        },
        Data::DateTimeIso(s) => match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            Ok(dt) => Cell::DateTime(dt),
            Err(_) => Cell::Text(s.clone()),
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{e:?}")),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Cell::Null
            } else {
                Cell::Text(trimmed.to_string())
            }
        }
    }
}

/// Column type decision over the parsed cells, narrowest first.
fn build_column(name: &str, values: &[Cell]) -> Column {
    let non_null = values.iter().filter(|c| **c != Cell::Null).count();

    let all = |pred: fn(&Cell) -> bool| {
        non_null > 0
            && values
                .iter()
                .all(|cell| *cell == Cell::Null || pred(cell))
    };

    if all(|c| matches!(c, Cell::Int(_))) {
        let data: Vec<Option<i64>> = values
            .iter()
            .map(|cell| match cell {
                Cell::Int(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), data).into_column();
    }

    if all(|c| matches!(c, Cell::Int(_) | Cell::Float(_))) {
        let data: Vec<Option<f64>> = values
            .iter()
            .map(|cell| match cell {
                Cell::Int(v) => Some(*v as f64),
                Cell::Float(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), data).into_column();
    }

    if all(|c| matches!(c, Cell::Bool(_))) {
        let data: Vec<Option<bool>> = values
            .iter()
            .map(|cell| match cell {
                Cell::Bool(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), data).into_column();
    }

    if all(|c| matches!(c, Cell::DateTime(_))) {
        let micros = values.iter().map(|cell| match cell {
            Cell::DateTime(dt) => Some(dt.and_utc().timestamp_micros()),
            _ => None,
        });
        let chunked = Int64Chunked::from_iter_options(name.into(), micros);
        return chunked
            .into_datetime(TimeUnit::Microseconds, None)
            .into_series()
            .into_column();
    }

    let data: Vec<Option<String>> = values
        .iter()
        .map(|cell| match cell {
            Cell::Null => None,
            Cell::Int(v) => Some(v.to_string()),
            Cell::Float(v) => Some(v.to_string()),
            Cell::Bool(v) => Some(v.to_string()),
            Cell::DateTime(dt) => Some(dt.to_string()),
            Cell::Text(s) => Some(s.clone()),
        })
        .collect();
    Series::new(name.into(), data).into_column()
}
