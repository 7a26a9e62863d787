//! Tables shown before the merge decision.

use comfy_table::{Cell, CellAlignment, Table};

use cellax_engine::MergePreview;

use crate::table::{align_column, apply_table_style, dim_cell, header_cell};

/// Axioms listed before eliding the rest.
pub const DEFAULT_PREVIEW_LIMIT: usize = 25;

/// Numbered axiom listing, eliding everything past `limit`.
pub fn preview_table(preview: &MergePreview, limit: usize) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("#"), header_cell("Axiom")]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, axiom) in preview.axioms.iter().take(limit).enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(axiom.as_str())]);
    }
    let hidden = preview.axioms.len().saturating_sub(limit);
    if hidden > 0 {
        table.add_row(vec![dim_cell("…"), dim_cell(format!("{hidden} more"))]);
    }
    table
}

/// One-line description of what is about to be merged.
pub fn preview_headline(preview: &MergePreview) -> String {
    let target = match &preview.active {
        Some(active) => format!("active ontology {active}"),
        None => "no active ontology".to_string(),
    };
    format!(
        "{} axioms from {} renderings ({target})",
        preview.axioms.len(),
        preview.rendering_count
    )
}
