//! Conversion between spreadsheet notation and zero-based indices.
//!
//! Columns are written as letters (`A`, `B`, ..., `Z`, `AA`, ...) and rows as
//! 1-based labels. Internally both are stored zero-based.

use crate::error::{ModelError, Result};

/// Marker used in a rule's end column or end row to request run-time resolution.
pub const WILDCARD: &str = "+";

/// Returns true if the textual coordinate is the wildcard marker.
pub fn is_wildcard(value: &str) -> bool {
    value.trim() == WILDCARD
}

/// Convert a column name such as `"C"` or `"AB"` to a zero-based index.
///
/// Letters are case-insensitive.
pub fn column_name_to_index(name: &str) -> Result<u32> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::InvalidColumn {
            name: name.to_string(),
        });
    }
    let mut col: u32 = 0;
    for b in trimmed.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(ModelError::InvalidColumn {
                name: name.to_string(),
            });
        }
        let v = u32::from(b.to_ascii_uppercase() - b'A') + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(v))
            .ok_or_else(|| ModelError::InvalidColumn {
                name: name.to_string(),
            })?;
    }
    Ok(col - 1)
}

/// Convert a zero-based column index back to its letter name.
pub fn column_index_to_name(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Convert a 1-based row label such as `"3"` to a zero-based index.
pub fn row_label_to_index(label: &str) -> Result<u32> {
    let invalid = || ModelError::InvalidRow {
        label: label.to_string(),
    };
    let number: u32 = label.trim().parse().map_err(|_| invalid())?;
    number.checked_sub(1).ok_or_else(invalid)
}

/// Convert a zero-based row index back to its 1-based label.
pub fn row_index_to_label(index: u32) -> String {
    (u64::from(index) + 1).to_string()
}
