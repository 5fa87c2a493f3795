//! Mutations must be visible to the next classification pass.

use dash_model::{Dataset, TargetType};
use dash_profile::classify;
use dash_transform::{drop_column, retype, retype_all};
use polars::prelude::*;

fn dataset() -> Dataset {
    let df = df!(
        "a" => [Some(1i64), Some(2), None],
        "b" => ["x", "y", "x"],
    )
    .unwrap();
    Dataset::new("demo", df)
}

#[test]
fn retype_moves_column_between_buckets() {
    let mut dataset = dataset();
    assert!(classify(&dataset).unwrap().is_numeric_or_temporal("a"));

    retype(&mut dataset, "a", TargetType::Text).unwrap();
    let profile = classify(&dataset).unwrap();
    assert!(profile.is_categorical("a"));
    assert!(!profile.is_numeric_or_temporal("a"));
}

#[test]
fn failed_retype_changes_nothing_in_the_profile() {
    let mut dataset = dataset();
    let before = classify(&dataset).unwrap();

    let warnings = retype_all(&mut dataset, &[("b".to_string(), TargetType::Int64)]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column, "b");

    let after = classify(&dataset).unwrap();
    assert_eq!(before.summaries, after.summaries);
    assert_eq!(before.categorical, after.categorical);
}

#[test]
fn dropped_column_leaves_both_buckets() {
    let mut dataset = dataset();
    drop_column(&mut dataset, "a").unwrap();

    let profile = classify(&dataset).unwrap();
    assert!(!profile.numeric_or_temporal.contains("a"));
    assert!(!profile.categorical.contains("a"));
    assert!(profile.categorical.contains("b"));
    assert_eq!(profile.summaries.len(), 1);
}
