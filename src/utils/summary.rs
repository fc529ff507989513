use crate::compute::RunSummary;
use crate::models::mode::Mode;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use std::path::PathBuf;

/// Outcome of processing one input file.
#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layer: Option<String>,
    pub mode: Mode,
    pub result: Result<RunSummary, String>,
}

fn header(name: &str) -> Cell {
    Cell::new(name)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn format_extent(summary: &RunSummary) -> String {
    match summary.extent {
        Some(e) => format!("{:.4}, {:.4} : {:.4}, {:.4}", e.minx, e.miny, e.maxx, e.maxy),
        None => "none".to_string(),
    }
}

pub fn build_summary_table(reports: &[RunReport]) -> (Table, Vec<String>) {
    let mut table = Table::new();
    table
        .set_header(vec![
            header(""),
            header("Input"),
            header("Layer"),
            header("Mode"),
            header("Records"),
            header("Skipped"),
            header("Extent"),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let mut warnings = Vec::new();
    for report in reports {
        let input = report.input.display().to_string();
        let layer = report.layer.clone().unwrap_or_default();

        let row = match &report.result {
            Ok(summary) => {
                let mut status = "✅";
                if summary.skipped > 0 {
                    warnings.push(format!(
                        "  ⚠️{}: {} feature(s) without coordinates were skipped",
                        input, summary.skipped
                    ));
                    status = "⚠️";
                }
                if summary.records == 0 {
                    warnings.push(format!("  ⚠️{}: no extent written", input));
                    status = "⚠️";
                }
                vec![
                    Cell::new(status).set_alignment(CellAlignment::Center),
                    Cell::new(&input),
                    Cell::new(layer),
                    Cell::new(report.mode).set_alignment(CellAlignment::Center),
                    Cell::new(summary.records).set_alignment(CellAlignment::Center),
                    Cell::new(summary.skipped).set_alignment(CellAlignment::Center),
                    Cell::new(format_extent(summary)),
                ]
            }
            Err(err) => {
                warnings.push(format!("  ❌{}: {}", input, err));
                vec![
                    Cell::new("❌").set_alignment(CellAlignment::Center),
                    Cell::new(&input),
                    Cell::new(layer),
                    Cell::new(report.mode).set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-"),
                ]
            }
        };
        table.add_row(row);
    }

    (table, warnings)
}

pub fn print_run_summary(reports: &[RunReport]) {
    let (table, warnings) = build_summary_table(reports);
    println!("\nExtent summary:\n{}", table);

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("{}", warning);
        }
    }
    println!();
}
