//! Terminal rendering: summary, preview, and describe tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dash_cli::pipeline::FileReport;
use dash_model::{TablePreview, format_numeric};
use dash_profile::NumericDescribe;
use dash_transform::CoercionWarning;

pub fn print_report(report: &FileReport) {
    println!("Dataset: {} ({} rows)", report.dataset.source, report.dataset.row_count());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
        header_cell("Null %"),
        header_cell("Distinct"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for summary in &report.profile.summaries {
        let null_cell = if summary.null_count > 0 {
            Cell::new(summary.null_count).fg(Color::Yellow)
        } else {
            Cell::new(summary.null_count)
        };
        table.add_row(vec![
            Cell::new(&summary.name).add_attribute(Attribute::Bold),
            Cell::new(&summary.dtype),
            null_cell,
            Cell::new(format!("{:.2}", summary.null_percent)),
            Cell::new(summary.distinct_count),
        ]);
    }
    println!("{table}");

    let numeric: Vec<&str> = report
        .profile
        .numeric_or_temporal
        .iter()
        .map(String::as_str)
        .collect();
    let categorical: Vec<&str> = report
        .profile
        .categorical
        .iter()
        .map(String::as_str)
        .collect();
    println!("Numeric/temporal: {}", join_or_dash(&numeric));
    println!("Categorical:      {}", join_or_dash(&categorical));
}

pub fn print_preview(preview: &TablePreview) {
    let mut table = Table::new();
    table.set_header(preview.columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.clone());
    }
    println!("{table}");
    println!("{} row(s) after dropping incomplete rows", preview.rows.len());
}

pub fn print_describe(described: &[NumericDescribe]) {
    if described.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for entry in described {
        table.add_row(vec![
            Cell::new(&entry.column).add_attribute(Attribute::Bold),
            Cell::new(entry.count),
            stat_cell(entry.mean),
            stat_cell(entry.std),
            stat_cell(entry.min),
            stat_cell(entry.max),
        ]);
    }
    println!("{table}");
}

pub fn print_warnings(warnings: &[CoercionWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric(v)),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn join_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
