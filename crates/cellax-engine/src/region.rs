//! Resolution of a rule's declared range into a concrete region.
//!
//! Start coordinates are always literal. An open end column resolves to the
//! last populated cell of the *start* row, an open end row to the last
//! populated row of the sheet. Resolution happens per rule at evaluation
//! time; nothing is cached between rules.

use cellax_model::{Location, TransformationRule, column_name_to_index, row_label_to_index};
use cellax_sheet::{DataSource, SheetAccessor};
use tracing::debug;

use crate::error::RuleDefinitionError;
use crate::traversal::advance;

/// A resolved rectangle on one sheet with `start <= end` on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    start: Location,
    end: Location,
}

impl Region {
    pub fn start(&self) -> &Location {
        &self.start
    }

    pub fn end(&self) -> &Location {
        &self.end
    }

    pub fn width(&self) -> u32 {
        self.end.column - self.start.column + 1
    }

    pub fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of cells in the region.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn contains(&self, location: &Location) -> bool {
        location.sheet_name == self.start.sheet_name
            && (self.start.column..=self.end.column).contains(&location.column)
            && (self.start.row..=self.end.row).contains(&location.row)
    }

    /// Lazily yield every location in traversal order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        std::iter::successors(Some(self.start.clone()), move |current| {
            if *current == self.end {
                None
            } else {
                advance(current, &self.start, &self.end).ok()
            }
        })
    }
}

/// Look up the rule's sheet in `source` and resolve its region there.
pub fn resolve_in(
    rule: &TransformationRule,
    source: &dyn DataSource,
) -> Result<Region, RuleDefinitionError> {
    let sheet = source
        .sheet(&rule.sheet_name)
        .ok_or_else(|| RuleDefinitionError::UnknownSheet {
            sheet: rule.sheet_name.clone(),
            rule: rule.to_string(),
        })?;
    resolve(rule, sheet)
}

/// Resolve `rule` against the live contents of `sheet`.
pub fn resolve(
    rule: &TransformationRule,
    sheet: &dyn SheetAccessor,
) -> Result<Region, RuleDefinitionError> {
    let invalid = |source| RuleDefinitionError::InvalidAddress {
        rule: rule.to_string(),
        source,
    };

    let start_column = column_name_to_index(&rule.start_column).map_err(invalid)?;
    let start_row = row_label_to_index(&rule.start_row).map_err(invalid)?;

    let end_column = if rule.has_end_column_wildcard() {
        sheet
            .row_last_column(start_row)
            .ok_or_else(|| RuleDefinitionError::EmptyStartRow {
                sheet: rule.sheet_name.clone(),
                row: rule.start_row.trim().to_string(),
                rule: rule.to_string(),
            })?
    } else {
        column_name_to_index(&rule.end_column).map_err(invalid)?
    };

    let end_row = if rule.has_end_row_wildcard() {
        sheet
            .last_row_index()
            .ok_or_else(|| RuleDefinitionError::EmptySheet {
                sheet: rule.sheet_name.clone(),
                rule: rule.to_string(),
            })?
    } else {
        row_label_to_index(&rule.end_row).map_err(invalid)?
    };

    if start_column > end_column {
        return Err(RuleDefinitionError::StartColumnAfterEndColumn {
            rule: rule.to_string(),
        });
    }
    if start_row > end_row {
        return Err(RuleDefinitionError::StartRowAfterEndRow {
            rule: rule.to_string(),
        });
    }

    let region = Region {
        start: Location::new(rule.sheet_name.clone(), start_column, start_row),
        end: Location::new(rule.sheet_name.clone(), end_column, end_row),
    };
    debug!(
        rule = %rule,
        start = %region.start,
        end = %region.end,
        cells = region.cell_count(),
        "resolved region"
    );
    Ok(region)
}
