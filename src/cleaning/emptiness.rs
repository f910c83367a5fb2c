//! Empty row removal and blank cell replacement.
//!
//! Both rules use [`Cell::is_blank`]: a cell is blank when it is [`Cell::Empty`] or text whose
//! trimmed content has zero length. Rows are removed first, so emptiness is judged before any
//! placeholder is written.

use crate::types::{Cell, Grid};

/// Returns `true` when every cell of `row` is blank. A zero-length row is blank.
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

/// Returns a new grid without rows whose cells are all blank.
pub fn remove_empty_rows(grid: &Grid) -> Grid {
    grid.filter_rows(|row| !is_blank_row(row))
}

/// Returns a new grid where every blank cell is replaced with `Text(placeholder)`.
///
/// Non-blank cells and row lengths are unchanged.
pub fn fill_empty_cells(grid: &Grid, placeholder: &str) -> Grid {
    grid.map_cells(|cell| {
        if cell.is_blank() {
            Cell::text(placeholder)
        } else {
            cell.clone()
        }
    })
}
