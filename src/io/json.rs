//! JSON grid source and sink.
//!
//! A JSON grid is an array of rows, each row an array of scalars: `null`, booleans, numbers and
//! strings map to the matching [`Cell`] kinds. Nested arrays/objects are rejected.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CleanResult, CleaningError};
use crate::types::{Cell, CleaningResult, Grid};

/// Read a JSON grid from a file.
pub fn read_json_grid_from_path(path: impl AsRef<Path>) -> CleanResult<Grid> {
    let text = fs::read_to_string(path)?;
    read_json_grid_from_str(&text)
}

/// Read a JSON grid from an in-memory string.
pub fn read_json_grid_from_str(input: &str) -> CleanResult<Grid> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let rows = match value {
        serde_json::Value::Array(rows) => rows,
        _ => {
            return Err(CleaningError::UnsupportedFormat {
                message: "json grid must be an array of row arrays".to_string(),
            });
        }
    };

    let mut out: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let cells = row.as_array().ok_or_else(|| CleaningError::UnsupportedFormat {
            message: format!("row {row_idx} is not a json array"),
        })?;
        let mut out_row = Vec::with_capacity(cells.len());
        for (col_idx, v) in cells.iter().enumerate() {
            out_row.push(convert_json_value(row_idx, col_idx, v)?);
        }
        out.push(out_row);
    }

    Ok(Grid::new(out))
}

fn convert_json_value(row: usize, column: usize, v: &serde_json::Value) -> CleanResult<Cell> {
    match v {
        serde_json::Value::Null => Ok(Cell::Empty),
        serde_json::Value::Bool(b) => Ok(Cell::Boolean(*b)),
        serde_json::Value::Number(n) => n.as_f64().map(Cell::Number).ok_or_else(|| {
            CleaningError::InvalidCell {
                row,
                column,
                message: format!("number {n} is not representable as f64"),
            }
        }),
        serde_json::Value::String(s) => Ok(Cell::Text(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(CleaningError::InvalidCell {
            row,
            column,
            message: "nested arrays/objects are not cells".to_string(),
        }),
    }
}

/// Write a grid as a JSON array of arrays.
pub fn write_json_grid<W: Write>(writer: W, grid: &Grid) -> CleanResult<()> {
    serde_json::to_writer(writer, grid)?;
    Ok(())
}

/// Write a full [`CleaningResult`] (grid plus metadata) as pretty-printed JSON.
///
/// Field names are camelCase: `cleanedGrid`, `headerRowIndex`, `originalRowCount`,
/// `cleanedRowCount`.
pub fn write_json_result<W: Write>(writer: W, result: &CleaningResult) -> CleanResult<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_json_grid_from_str, write_json_grid};
    use crate::error::CleaningError;
    use crate::types::{Cell, Grid};

    #[test]
    fn reads_scalars() {
        let grid = read_json_grid_from_str(r#"[[null, "x", 1, true], []]"#).unwrap();
        assert_eq!(
            grid.rows,
            vec![
                vec![Cell::Empty, Cell::text("x"), Cell::Number(1.0), Cell::Boolean(true)],
                vec![],
            ]
        );
    }

    #[test]
    fn rejects_nested_values_with_position() {
        let err = read_json_grid_from_str(r#"[["a"], ["b", {"c": 1}]]"#).unwrap_err();
        assert!(matches!(err, CleaningError::InvalidCell { row: 1, column: 1, .. }));
    }

    #[test]
    fn rejects_non_array_rows() {
        let err = read_json_grid_from_str(r#"[{"a": 1}]"#).unwrap_err();
        assert!(err.to_string().contains("row 0 is not a json array"));
    }

    #[test]
    fn writes_array_of_arrays() {
        let grid = Grid::new(vec![vec![Cell::text("X"), Cell::text("N/A")]]);
        let mut out = Vec::new();
        write_json_grid(&mut out, &grid).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"[["X","N/A"]]"#);
    }
}
