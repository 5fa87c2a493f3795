//! Orchestration: one synchronous pass per user request.
//!
//! Every function loads, classifies, and (where applicable) mutates a
//! dataset that is owned by the call and threaded explicitly through the
//! steps. Failures are scoped to the smallest unit that caused them: a bad
//! file never aborts its batch, a bad column never aborts a retype pass,
//! and a rejected chart request only blocks that chart.

use std::path::{Path, PathBuf};

use anyhow::Context;

use dash_chart::{ChartError, select};
use dash_fetch::{DriveClient, resolve_share_link};
use dash_ingest::{load_bytes, load_path};
use dash_model::{ChartOutput, ChartRequest, Dataset, SchemaProfile, TargetType};
use dash_profile::classify;
use dash_transform::{CoercionWarning, retype_all};

/// A loaded and classified dataset.
pub struct FileReport {
    pub dataset: Dataset,
    pub profile: SchemaProfile,
}

/// One file that could not be processed; the rest of the batch continues.
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of profiling a batch of files.
pub struct ProfileRun {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl ProfileRun {
    /// True when nothing at all could be processed.
    pub fn all_failed(&self) -> bool {
        self.reports.is_empty() && !self.failures.is_empty()
    }
}

/// Loads and classifies one local file.
pub fn profile_path(path: &Path) -> anyhow::Result<FileReport> {
    let dataset = load_path(path).with_context(|| format!("load {}", path.display()))?;
    let profile = classify(&dataset)?;
    Ok(FileReport { dataset, profile })
}

/// Profiles each file independently, in the given order. A failing file is
/// recorded and the batch keeps going.
pub fn profile_files(paths: &[PathBuf]) -> ProfileRun {
    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match profile_path(path) {
            Ok(report) => reports.push(report),
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "skipping file");
                failures.push(FileFailure {
                    path: path.clone(),
                    message: format!("{error:#}"),
                });
            }
        }
    }
    ProfileRun { reports, failures }
}

/// Resolves a share link, downloads the payload, and profiles it. The
/// downloaded bytes carry no extension, so loading takes the fallback path.
pub fn fetch_and_profile(link: &str) -> anyhow::Result<FileReport> {
    let resolution = resolve_share_link(link)?;
    let client = DriveClient::new()?;
    let bytes = client.fetch(&resolution)?;
    let dataset = load_bytes(&bytes, None, &resolution.file_id)?;
    let profile = classify(&dataset)?;
    Ok(FileReport { dataset, profile })
}

/// Applies a batch of type assignments to a file, then re-classifies.
/// Returns the refreshed report plus one warning per column that could not
/// be coerced.
pub fn retype_file(
    path: &Path,
    assignments: &[(String, TargetType)],
) -> anyhow::Result<(FileReport, Vec<CoercionWarning>)> {
    let mut dataset = load_path(path).with_context(|| format!("load {}", path.display()))?;
    let warnings = retype_all(&mut dataset, assignments);
    let profile = classify(&dataset)?;
    Ok((FileReport { dataset, profile }, warnings))
}

/// Outcome of a chart request against a file.
pub enum ChartRun {
    Accepted(ChartOutput),
    /// The selection was incompatible with the column classification; the
    /// message is an inline warning, not a hard failure.
    Rejected(String),
}

/// Validates a chart request against an already-classified dataset.
pub fn chart_report(report: &FileReport, request: &ChartRequest) -> anyhow::Result<ChartRun> {
    match select(&report.dataset, &report.profile, request) {
        Ok(output) => Ok(ChartRun::Accepted(output)),
        Err(error @ (ChartError::UnknownColumn(_) | ChartError::InvalidSelection(_))) => {
            tracing::warn!(%error, "chart request rejected");
            Ok(ChartRun::Rejected(error.user_message()))
        }
        Err(other) => Err(other.into()),
    }
}

/// Loads a file, classifies it, and validates the chart request against it.
pub fn chart_file(path: &Path, request: &ChartRequest) -> anyhow::Result<ChartRun> {
    let report = profile_path(path)?;
    chart_report(&report, request)
}

/// Parses one `column=type` assignment from the command line.
pub fn parse_assignment(raw: &str) -> anyhow::Result<(String, TargetType)> {
    let (column, target) = raw
        .split_once('=')
        .with_context(|| format!("expected `column=type`, got `{raw}`"))?;
    let target: TargetType = target
        .parse()
        .map_err(|e: dash_model::TargetTypeParseError| anyhow::anyhow!(e))?;
    Ok((column.trim().to_string(), target))
}
