//! Single-step advancement through a region.
//!
//! A region is walked down the rows of its first column, then down the rows
//! of the next column starting again at the start row, until the end
//! location. The caller visits a location, stops if it equals the end, and
//! only then calls [`advance`].

use cellax_model::Location;

use crate::error::TraversalExhausted;

/// The location visited after `current` within `start..=end`.
///
/// Fails when `current` is already the last location of the region.
pub fn advance(
    current: &Location,
    start: &Location,
    end: &Location,
) -> Result<Location, TraversalExhausted> {
    if current.row < end.row {
        return Ok(current.with_row(current.row + 1));
    }
    if current.row == end.row && current.column < end.column {
        return Ok(current.with_cell(current.column + 1, start.row));
    }
    Err(TraversalExhausted {
        location: current.clone(),
    })
}
