//! Integration tests for CSV workbooks.

use std::fs;

use cellax_model::Location;
use cellax_sheet::{DataSource, SheetAccessor, SheetError, open_workbook};
use tempfile::TempDir;

#[test]
fn directory_becomes_multi_sheet_workbook() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Persons.csv"), "name\nalice\nbob\n").unwrap();
    fs::write(dir.path().join("Cities.csv"), "city,country\nParis,FR\n").unwrap();

    let mut workbook = open_workbook(dir.path()).unwrap();

    let names: Vec<_> = workbook.sheet_names().collect();
    assert_eq!(names, vec!["Cities", "Persons"]);

    let cities = workbook.sheet("Cities").unwrap();
    assert_eq!(cities.row_last_column(0), Some(1));
    assert_eq!(cities.last_row_index(), Some(1));

    workbook.set_current_location(Location::new("Persons", 0, 2));
    assert_eq!(workbook.current_value(), Some("bob"));
}

#[test]
fn single_file_becomes_single_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b,c\n").unwrap();

    let workbook = open_workbook(&path).unwrap();

    assert_eq!(workbook.len(), 1);
    assert_eq!(workbook.sheet("data").unwrap().row_last_column(0), Some(2));
}

#[test]
fn empty_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = open_workbook(dir.path()).unwrap_err();
    assert!(matches!(err, SheetError::EmptyWorkbook { .. }));
}

#[test]
fn missing_path_is_not_found() {
    let err = open_workbook(std::path::Path::new("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, SheetError::NotFound { .. }));
}
