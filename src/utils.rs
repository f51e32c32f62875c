//! Assorted utilities and helpers.

use crate::error::{LabError, Result};

/// Number of cells in a `rows × (target + 1)` table, or `None` on overflow.
#[inline]
pub fn table_cells(rows: usize, target: usize) -> Option<usize> {
    target.checked_add(1)?.checked_mul(rows)
}

/// Check a `rows × (target + 1)` table against a cell budget.
///
/// Returns the cell count when it fits.
pub fn check_table_budget(rows: usize, target: usize, limit: usize) -> Result<usize> {
    match table_cells(rows, target) {
        Some(cells) if cells <= limit => Ok(cells),
        cells => Err(LabError::TableTooLarge { cells, limit }),
    }
}
