//! CSV grid source and sink.
//!
//! Every record becomes a row, including the header record; locating the header is left to
//! [`crate::cleaning::locate_header_row`]. Records may have different lengths.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::CleanResult;
use crate::types::{Cell, Grid};

/// Options for reading and writing CSV grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Infer numbers, booleans and empty fields instead of reading every field as text.
    ///
    /// With inference on, a zero-length field is [`Cell::Empty`], `true`/`false` in any case is
    /// [`Cell::Boolean`], and a field that parses as a finite `f64` is [`Cell::Number`]. Codes with
    /// a leading zero before another digit (`007`, `-01`) stay text so they survive unchanged.
    /// Anything else (including fields with surrounding spaces) stays text, verbatim.
    pub infer_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
        }
    }
}

/// Read a CSV file into a [`Grid`].
pub fn read_csv_grid_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> CleanResult<Grid> {
    let file = File::open(path)?;
    read_csv_grid_from_reader(file, options)
}

/// Read CSV data from any reader into a [`Grid`].
pub fn read_csv_grid_from_reader<R: Read>(reader: R, options: &CsvOptions) -> CleanResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|raw| parse_field(raw, options.infer_types))
                .collect(),
        );
    }

    Ok(Grid::new(rows))
}

fn parse_field(raw: &str, infer_types: bool) -> Cell {
    if !infer_types {
        return Cell::text(raw);
    }
    if raw.is_empty() {
        return Cell::Empty;
    }
    if raw.eq_ignore_ascii_case("true") {
        return Cell::Boolean(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Cell::Boolean(false);
    }
    if has_leading_zero(raw) {
        return Cell::text(raw);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::text(raw),
    }
}

fn has_leading_zero(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw).as_bytes();
    digits.len() > 1 && digits[0] == b'0' && digits[1].is_ascii_digit()
}

/// Write `grid` as CSV to any writer. Cells are rendered with their [`std::fmt::Display`] form.
pub fn write_csv_grid<W: Write>(writer: W, grid: &Grid, options: &CsvOptions) -> CleanResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(options.delimiter)
        .from_writer(writer);

    for row in grid.rows() {
        wtr.write_record(row.iter().map(|c| c.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `grid` as CSV to a file, replacing it if it exists.
pub fn write_csv_grid_to_path(
    path: impl AsRef<Path>,
    grid: &Grid,
    options: &CsvOptions,
) -> CleanResult<()> {
    let file = File::create(path)?;
    write_csv_grid(file, grid, options)
}
