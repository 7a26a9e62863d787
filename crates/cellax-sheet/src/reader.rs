//! CSV sheet ingestion.
//!
//! Every CSV file becomes one sheet named after its file stem. No header row
//! is assumed: row 1 of the file is row 1 of the sheet, matching how rules
//! address cells.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SheetError};
use crate::workbook::{Sheet, Workbook};

/// Read one CSV file into a sheet named after the file stem.
pub fn read_csv_sheet(path: &Path) -> Result<Sheet> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.trim().is_empty())
        .ok_or_else(|| SheetError::InvalidSheetName {
            path: path.to_path_buf(),
        })?
        .to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let sheet = Sheet::from_rows(name, rows);
    debug!(
        path = %path.display(),
        rows = sheet.row_count(),
        cells = sheet.populated_cells(),
        "read csv sheet"
    );
    Ok(sheet)
}

/// Read every `*.csv` file in `dir`, sorted by file name, as one workbook.
pub fn read_csv_workbook(dir: &Path) -> Result<Workbook> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(SheetError::EmptyWorkbook {
            path: dir.to_path_buf(),
        });
    }
    let mut workbook = Workbook::new();
    for file in &files {
        workbook.add_sheet(read_csv_sheet(file)?)?;
    }
    info!(path = %dir.display(), sheets = workbook.len(), "loaded workbook");
    Ok(workbook)
}

/// Open a workbook from either a single CSV file or a directory of them.
pub fn open_workbook(path: &Path) -> Result<Workbook> {
    if path.is_dir() {
        read_csv_workbook(path)
    } else if path.is_file() {
        Workbook::from_sheets([read_csv_sheet(path)?])
    } else {
        Err(SheetError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SheetError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SheetError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn csv_error(path: &Path, source: csv::Error) -> SheetError {
    SheetError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SheetAccessor;
    use tempfile::TempDir;

    #[test]
    fn test_read_csv_sheet_keeps_first_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Persons.csv");
        fs::write(&path, "name,age\nalice,30\nbob\n").unwrap();

        let sheet = read_csv_sheet(&path).unwrap();

        assert_eq!(sheet.name(), "Persons");
        assert_eq!(sheet.cell(0, 0), Some("name"));
        assert_eq!(sheet.cell(1, 1), Some("30"));
        assert_eq!(sheet.row_last_column(2), Some(0));
        assert_eq!(sheet.last_row_index(), Some(2));
    }

    #[test]
    fn test_list_csv_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.csv", "a.CSV", "notes.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }
}
