//! Sheet access for the transformation engine.
//!
//! # Features
//!
//! - **Accessor traits**: [`SheetAccessor`] and [`DataSource`], the only view of
//!   spreadsheet content the engine depends on
//! - **In-memory workbook**: [`Sheet`] and [`Workbook`] implementations
//! - **CSV ingestion**: one CSV file per sheet, no header row assumed
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cellax_sheet::{DataSource, open_workbook};
//!
//! let workbook = open_workbook(Path::new("data/persons.csv"))?;
//! let sheet = workbook.sheet("persons").unwrap();
//! let last_row = sheet.last_row_index();
//! ```

mod error;
mod reader;
mod traits;
mod workbook;

// === Error Types ===
pub use error::{Result, SheetError};

// === Accessors ===
pub use traits::{DataSource, SheetAccessor};

// === Workbooks ===
pub use workbook::{Sheet, Workbook};

// === CSV Reading ===
pub use reader::{open_workbook, read_csv_sheet, read_csv_workbook};
