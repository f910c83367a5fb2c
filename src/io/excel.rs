#![cfg(feature = "excel")]

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{CleanResult, CleaningError};
use crate::types::{Cell, Grid};

/// Read one worksheet of a workbook (`.xlsx`, `.xls`, `.ods`, etc.) into a [`Grid`].
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - Reads the sheet's used range; leading blank rows/columns outside it are not represented
/// - Date/time cells become their serial number, ISO dates/durations and error cells become text
pub fn read_excel_grid_from_path(path: impl AsRef<Path>, sheet_name: Option<&str>) -> CleanResult<Grid> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| CleaningError::UnsupportedFormat {
                message: "workbook has no sheets".to_string(),
            })?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Grid::new(rows))
}

fn convert_cell(c: &Data) -> Cell {
    match c {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Boolean(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Text(c.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use calamine::Data;

    use super::convert_cell;
    use crate::types::Cell;

    #[test]
    fn converts_scalar_cells() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Boolean(true));
        assert_eq!(convert_cell(&Data::String(" a ".to_string())), Cell::text(" a "));
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-01-31".to_string())),
            Cell::text("2024-01-31")
        );
    }
}
