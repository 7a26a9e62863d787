//! In-memory sheets and workbooks.

use cellax_model::Location;

use crate::error::{Result, SheetError};
use crate::traits::{DataSource, SheetAccessor};

/// A rectangular-ish grid of optional text cells.
///
/// Blank and whitespace-only values are stored as empty cells, so they never
/// count towards a row's last populated column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Build a sheet from row-major string values.
    pub fn from_rows<R, C, S>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|value| normalize(value.into())).collect())
            .collect();
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Set a single cell, growing the grid as needed.
    pub fn set_cell(&mut self, column: u32, row: u32, value: impl Into<String>) {
        let (column, row) = (column as usize, row as usize);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, None);
        }
        cells[column] = normalize(value.into());
    }

    /// Number of physical rows, including trailing blank ones.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of populated cells.
    pub fn populated_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}

fn normalize(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl SheetAccessor for Sheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_last_column(&self, row: u32) -> Option<u32> {
        let cells = self.rows.get(row as usize)?;
        let last = cells.iter().rposition(Option::is_some)?;
        u32::try_from(last).ok()
    }

    fn last_row_index(&self) -> Option<u32> {
        let last = self
            .rows
            .iter()
            .rposition(|row| row.iter().any(Option::is_some))?;
        u32::try_from(last).ok()
    }

    fn cell(&self, column: u32, row: u32) -> Option<&str> {
        self.rows
            .get(row as usize)?
            .get(column as usize)?
            .as_deref()
    }
}

/// Ordered collection of uniquely named sheets plus the evaluation position.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    current: Option<Location>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheets(sheets: impl IntoIterator<Item = Sheet>) -> Result<Self> {
        let mut workbook = Self::new();
        for sheet in sheets {
            workbook.add_sheet(sheet)?;
        }
        Ok(workbook)
    }

    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<()> {
        if self.get_sheet(&sheet.name).is_some() {
            return Err(SheetError::DuplicateSheet { name: sheet.name });
        }
        self.sheets.push(sheet);
        Ok(())
    }

    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl DataSource for Workbook {
    fn sheet(&self, name: &str) -> Option<&dyn SheetAccessor> {
        self.get_sheet(name).map(|sheet| sheet as &dyn SheetAccessor)
    }

    fn set_current_location(&mut self, location: Location) {
        self.current = Some(location);
    }

    fn current_location(&self) -> Option<&Location> {
        self.current.as_ref()
    }
}
