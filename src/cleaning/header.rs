//! Header row location.

use crate::types::Grid;

use super::emptiness::is_blank_row;

/// Index of the first row that is not entirely blank.
///
/// Returns `0` when there is no such row, including for a grid with no rows. Callers must check
/// the row count before treating the index as a real row.
pub fn locate_header_row(grid: &Grid) -> usize {
    grid.rows().position(|row| !is_blank_row(row)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::locate_header_row;
    use crate::types::{Cell, Grid};

    #[test]
    fn finds_first_non_blank_row() {
        let grid = Grid::new(vec![
            vec![Cell::Empty],
            vec![Cell::text("  ")],
            vec![Cell::text("Name"), Cell::text("Age")],
            vec![Cell::text("Alice"), Cell::Number(30.0)],
        ]);
        assert_eq!(locate_header_row(&grid), 2);
    }

    #[test]
    fn defaults_to_zero() {
        assert_eq!(locate_header_row(&Grid::default()), 0);
        assert_eq!(locate_header_row(&Grid::new(vec![vec![Cell::Empty]; 4])), 0);
    }
}
