use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::{column_index_to_name, row_index_to_label};

/// A single cell position: sheet name plus zero-based column and row.
///
/// Ordering compares sheet, then column, then row, which is the order the
/// traversal visits cells of a region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub sheet_name: String,
    pub column: u32,
    pub row: u32,
}

impl Location {
    pub fn new(sheet_name: impl Into<String>, column: u32, row: u32) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            column,
            row,
        }
    }

    /// Same sheet and column, different row.
    #[must_use]
    pub fn with_row(&self, row: u32) -> Self {
        Self::new(self.sheet_name.clone(), self.column, row)
    }

    /// Same sheet, different column and row.
    #[must_use]
    pub fn with_cell(&self, column: u32, row: u32) -> Self {
        Self::new(self.sheet_name.clone(), column, row)
    }

    /// Column letters of this location (e.g. `"C"`).
    pub fn column_name(&self) -> String {
        column_index_to_name(self.column)
    }

    /// A1-style reference without the sheet (e.g. `"C7"`).
    pub fn to_a1(&self) -> String {
        format!(
            "{}{}",
            column_index_to_name(self.column),
            row_index_to_label(self.row)
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet_name, self.to_a1())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_a1_notation() {
        let loc = Location::new("Persons", 2, 6);
        assert_eq!(loc.to_a1(), "C7");
        assert_eq!(loc.to_string(), "Persons!C7");
    }

    #[test]
    fn test_equality_requires_all_fields() {
        let a = Location::new("S", 1, 1);
        assert_eq!(a, Location::new("S", 1, 1));
        assert_ne!(a, Location::new("T", 1, 1));
        assert_ne!(a, Location::new("S", 2, 1));
        assert_ne!(a, Location::new("S", 1, 2));
    }

    #[test]
    fn test_ordering_is_column_then_row() {
        let mut locs = vec![
            Location::new("S", 1, 0),
            Location::new("S", 0, 2),
            Location::new("S", 0, 0),
        ];
        locs.sort();
        assert_eq!(
            locs,
            vec![
                Location::new("S", 0, 0),
                Location::new("S", 0, 2),
                Location::new("S", 1, 0),
            ]
        );
    }
}
