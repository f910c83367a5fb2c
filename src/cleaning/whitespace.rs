//! Whitespace normalization.

use crate::types::{Cell, Grid};

/// Returns a new grid with leading/trailing Unicode whitespace stripped from every text cell.
///
/// Non-text cells pass through unchanged; the grid shape is preserved.
pub fn trim_grid(grid: &Grid) -> Grid {
    grid.map_cells(trim_cell)
}

/// Trim a single cell.
pub fn trim_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::Text(s.trim().to_string()),
        other => other.clone(),
    }
}
