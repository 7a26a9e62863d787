//! Run summary. Everything here goes to stderr so stdout carries only the
//! ontology document when one is printed.

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use cellax_cli::generate::GenerateResult;
use cellax_cli::table::{align_column, apply_table_style, dim_cell, header_cell};
use cellax_engine::{EngineError, RunOutcome};

pub fn print_summary(result: &GenerateResult) {
    let report = &result.report;
    if let RunOutcome::Failed(error) = &report.outcome {
        print_error("error", error);
        return;
    }

    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rules evaluated"), Cell::new(stats.rules_evaluated)]);
    table.add_row(vec![Cell::new("Rules skipped"), count_cell(stats.rules_skipped)]);
    table.add_row(vec![Cell::new("Cells visited"), Cell::new(stats.locations_visited)]);
    table.add_row(vec![
        Cell::new("Renderings"),
        Cell::new(stats.renderings_produced),
    ]);
    table.add_row(vec![
        Cell::new("Unique renderings"),
        Cell::new(stats.unique_renderings),
    ]);
    table.add_row(vec![
        header_cell("Axioms"),
        Cell::new(stats.axioms).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    match (&report.outcome, &result.target) {
        (RunOutcome::MergedIntoNew(id), _) => eprintln!("Added to new ontology {id}"),
        (RunOutcome::MergedIntoCurrent, Some(id)) => eprintln!("Added to current ontology {id}"),
        (RunOutcome::MergedIntoCurrent, None) => eprintln!("Added to current ontology"),
        (RunOutcome::Discarded, _) => eprintln!("Discarded, nothing was changed"),
        (RunOutcome::Failed(_), _) => {}
    }
    if let Some(path) = &result.saved_to {
        eprintln!("Saved: {}", path.display());
    }
    if let Some(error) = &report.log_error {
        print_error("warning", error);
    }
}

fn print_error(prefix: &str, error: &EngineError) {
    eprintln!("{prefix}: {error}");
    if let Some(hint) = error.suggestion() {
        eprintln!("hint: {hint}");
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}
