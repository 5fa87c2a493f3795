//! Integration tests for dataset loading.

use std::io::Write;

use dash_ingest::{IngestError, load_bytes, load_path};
use polars::prelude::DataType;

#[test]
fn loads_csv_from_path_with_label_from_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "region,amount").unwrap();
    writeln!(file, "north,10").unwrap();
    writeln!(file, "south,12").unwrap();
    drop(file);

    let dataset = load_path(&path).unwrap();
    assert_eq!(dataset.source, "sales");
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(
        dataset.data.column("amount").unwrap().dtype(),
        &DataType::Int64
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_path(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}

#[test]
fn undeclared_extension_falls_back_to_csv_parse() {
    let dataset = load_bytes(b"a,b\n1,x\n2,y\n", None, "remote").unwrap();
    assert_eq!(dataset.column_names(), vec!["a", "b"]);
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn binary_garbage_fails_both_parsers() {
    let payload = [0x00u8, 0xff, 0x13, 0x37, 0x00, 0x01];
    let err = load_bytes(&payload, None, "garbage").unwrap_err();
    assert!(matches!(err, IngestError::UnrecognizedFormat { .. }));
}

#[test]
fn declared_csv_extension_does_not_fall_back() {
    let payload = [0x00u8, 0xff, 0x13, 0x37];
    let err = load_bytes(&payload, Some("csv"), "broken").unwrap_err();
    assert!(matches!(err, IngestError::Csv(_)));
}

#[test]
fn loading_twice_yields_identical_frames() {
    let bytes = b"a,b\n1,x\n2,y\n,x\n";
    let first = load_bytes(bytes, Some("csv"), "one").unwrap();
    let second = load_bytes(bytes, Some("csv"), "two").unwrap();
    assert!(first.data.equals_missing(&second.data));
}
