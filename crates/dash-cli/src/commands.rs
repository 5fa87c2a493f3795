//! Subcommand execution and exit-code mapping.

use anyhow::Context;

use dash_cli::pipeline::{
    ChartRun, chart_report, fetch_and_profile, parse_assignment, profile_files, profile_path,
    retype_file,
};
use dash_model::{ChartOutput, ChartRequest};
use dash_profile::numeric_describe;

use crate::cli::{ChartArgs, FetchArgs, ProfileArgs, RetypeArgs};
use crate::render::{print_describe, print_preview, print_report, print_warnings};

/// Profiles each file in order; failures are reported and skipped. Fails
/// the run only when no file could be processed.
pub fn run_profile(args: &ProfileArgs) -> anyhow::Result<bool> {
    let run = profile_files(&args.files);
    for report in &run.reports {
        print_report(report);
        println!();
    }
    for failure in &run.failures {
        eprintln!("error: {}: {}", failure.path.display(), failure.message);
    }
    Ok(!run.all_failed())
}

pub fn run_fetch(args: &FetchArgs) -> anyhow::Result<()> {
    let report = fetch_and_profile(&args.link)?;
    print_report(&report);
    Ok(())
}

pub fn run_retype(args: &RetypeArgs) -> anyhow::Result<()> {
    let assignments = args
        .assignments
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let (report, warnings) = retype_file(&args.file, &assignments)?;
    print_warnings(&warnings);
    print_report(&report);
    Ok(())
}

/// Validates the chart selection and prints the spec (or preview) as JSON.
/// A rejected selection prints an inline warning and is not a hard failure.
pub fn run_chart(args: &ChartArgs) -> anyhow::Result<()> {
    let request = build_request(args);
    let report = profile_path(&args.file)?;
    match chart_report(&report, &request)? {
        ChartRun::Accepted(output) => {
            match &output {
                ChartOutput::Preview(preview) => print_preview(preview),
                ChartOutput::Spec(_) => {
                    let json = serde_json::to_string_pretty(&output)
                        .context("serialize chart output")?;
                    println!("{json}");
                }
            }
            if args.describe {
                let described = numeric_describe(&report.dataset, &request.referenced_columns())?;
                print_describe(&described);
            }
            Ok(())
        }
        ChartRun::Rejected(message) => {
            eprintln!("warning: {message}");
            Ok(())
        }
    }
}

fn build_request(args: &ChartArgs) -> ChartRequest {
    match &args.y {
        Some(y) => ChartRequest::Bivariate {
            x: args.x.clone(),
            y: y.clone(),
            group: args.group.clone(),
            kind: args.kind.into(),
        },
        None => ChartRequest::Univariate {
            column: args.x.clone(),
            kind: args.kind.into(),
        },
    }
}
