//! Shared comfy-table styling.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_table_uses_round_corners() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
        apply_table_style(&mut table);
        table.add_row(vec![Cell::new("Axioms"), dim_cell(3)]);
        align_column(&mut table, 1, CellAlignment::Right);

        let rendered = table.force_no_tty().to_string();
        assert!(rendered.starts_with('╭'));
        assert!(rendered.contains("Stage"));
        assert!(rendered.contains("Axioms"));
    }

    #[test]
    fn test_align_column_ignores_missing_column() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Only")]);
        align_column(&mut table, 4, CellAlignment::Right);
        assert_eq!(table.column_count(), 1);
    }
}
