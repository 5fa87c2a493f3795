//! End-to-end pipeline tests over temporary files.

use std::io::Write;
use std::path::PathBuf;

use dash_cli::pipeline::{
    ChartRun, chart_file, parse_assignment, profile_files, profile_path, retype_file,
};
use dash_model::{ChartKind, ChartOutput, ChartRequest, TargetType};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn profiles_a_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "people.csv", "name,age\nida,34\njon,28\n");

    let report = profile_path(&path).unwrap();
    assert_eq!(report.dataset.source, "people");
    assert!(report.profile.is_numeric_or_temporal("age"));
    assert!(report.profile.is_categorical("name"));
}

#[test]
fn batch_continues_past_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_fixture(&dir, "good.csv", "a\n1\n");
    let missing = dir.path().join("missing.csv");

    let run = profile_files(&[missing.clone(), good]);
    assert_eq!(run.reports.len(), 1);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].path, missing);
    assert!(!run.all_failed());
}

#[test]
fn retype_reports_bad_columns_but_applies_good_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "mixed.csv", "label,count\nx,1\ny,2\n");

    let assignments = vec![
        parse_assignment("label=int64").unwrap(),
        parse_assignment("count=float64").unwrap(),
    ];
    let (report, warnings) = retype_file(&path, &assignments).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column, "label");
    assert!(report.profile.is_categorical("label"));
    assert!(report.profile.is_numeric_or_temporal("count"));
}

#[test]
fn chart_requests_resolve_or_reject() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "data.csv", "label,count\nx,1\ny,2\n");

    let accepted = chart_file(
        &path,
        &ChartRequest::Bivariate {
            x: "label".to_string(),
            y: "count".to_string(),
            group: None,
            kind: ChartKind::TrendLine,
        },
    )
    .unwrap();
    let ChartRun::Accepted(ChartOutput::Spec(spec)) = accepted else {
        panic!("expected an accepted spec");
    };
    assert_eq!(spec.y.as_deref(), Some("count"));

    let rejected = chart_file(
        &path,
        &ChartRequest::Univariate {
            column: "label".to_string(),
            kind: ChartKind::BoxSummary,
        },
    )
    .unwrap();
    assert!(matches!(rejected, ChartRun::Rejected(_)));
}

#[test]
fn retype_moves_columns_across_buckets_for_later_requests() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "events.csv", "when,value\n20240101,5\n20240102,6\n");

    // The 8-digit stamps load as integers; pushing them to text makes the
    // column categorical for every later selector call.
    let (report, warnings) =
        retype_file(&path, &[("when".to_string(), TargetType::Text)]).unwrap();
    assert!(warnings.is_empty());
    assert!(report.profile.is_categorical("when"));
    assert!(!report.profile.is_numeric_or_temporal("when"));
}
