//! Duplicate row elimination.

use std::collections::HashSet;

use crate::types::{Cell, CellKey, Grid};

/// Returns a new grid without rows that duplicate an earlier row.
///
/// Two rows are duplicates when they have the same length and every cell has the same
/// [`Cell::canonical_key`]. The first occurrence is kept and survivors keep their input order.
pub fn remove_duplicate_rows(grid: &Grid) -> Grid {
    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(grid.row_count());
    grid.filter_rows(|row| seen.insert(row_key(row)))
}

/// Canonical key of a whole row; the row length is implied by the key length.
pub fn row_key(row: &[Cell]) -> Vec<CellKey> {
    row.iter().map(Cell::canonical_key).collect()
}
