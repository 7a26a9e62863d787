//! Accessor traits the transformation engine reads sheets through.
//!
//! The engine never owns a workbook. It receives a [`DataSource`], asks it
//! for a [`SheetAccessor`] when resolving wildcard boundaries, and moves the
//! source's current location before every render call.

use cellax_model::Location;

/// Read-only view of one sheet.
pub trait SheetAccessor {
    fn name(&self) -> &str;

    /// Zero-based index of the last populated cell in `row`, or `None` if the
    /// row is absent or blank.
    fn row_last_column(&self, row: u32) -> Option<u32>;

    /// Zero-based index of the last row holding a populated cell, or `None`
    /// for an empty sheet.
    fn last_row_index(&self) -> Option<u32>;

    /// Text of a populated cell.
    fn cell(&self, column: u32, row: u32) -> Option<&str>;
}

/// A workbook plus the evaluation position renderers read from.
pub trait DataSource {
    fn sheet(&self, name: &str) -> Option<&dyn SheetAccessor>;

    /// Establish the position the next render call evaluates against.
    fn set_current_location(&mut self, location: Location);

    fn current_location(&self) -> Option<&Location>;

    fn cell_value(&self, location: &Location) -> Option<&str> {
        self.sheet(&location.sheet_name)?
            .cell(location.column, location.row)
    }

    /// Value of the cell at the current location.
    fn current_value(&self) -> Option<&str> {
        let location = self.current_location()?;
        self.cell_value(location)
    }
}
