//! Unified grid source/sink entrypoints.
//!
//! [`read_grid_from_path`] and [`write_grid_to_path`] pick the format from
//! [`GridFileOptions::format`] or, when that is `None`, from the file extension.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{CleanResult, CleaningError};
use crate::types::Grid;

use super::csv::{read_csv_grid_from_path, write_csv_grid, CsvOptions};
use super::json::{read_json_grid_from_path, write_json_grid};

/// Supported grid file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values; read and written with a tab delimiter.
    Tsv,
    /// JSON array of row arrays.
    Json,
    /// Spreadsheet/workbook formats (read-only, feature-gated behind `excel`).
    Excel,
}

impl GridFormat {
    /// Parse a grid format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> CleanResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CleaningError::UnsupportedFormat {
                message: format!("cannot infer format: path has no extension ({})", path.display()),
            })?;

        Self::from_extension(ext).ok_or_else(|| CleaningError::UnsupportedFormat {
            message: format!(
                "cannot infer format from extension '{ext}' for path ({})",
                path.display()
            ),
        })
    }
}

/// Options controlling unified grid reading/writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridFileOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<GridFormat>,
    /// CSV-specific options.
    pub csv: CsvOptions,
    /// Worksheet to read from a workbook; `None` reads the first sheet.
    pub sheet: Option<String>,
}

/// Read a grid from `path`.
///
/// # Examples
///
/// ```no_run
/// use grid_cleaning::cleaning::clean;
/// use grid_cleaning::io::{read_grid_from_path, GridFileOptions};
///
/// # fn main() -> Result<(), grid_cleaning::CleaningError> {
/// let raw = read_grid_from_path("contacts.csv", &GridFileOptions::default())?;
/// let result = clean(&raw)?;
/// println!("rows={} -> {}", result.original_row_count, result.cleaned_row_count);
/// # Ok(())
/// # }
/// ```
pub fn read_grid_from_path(path: impl AsRef<Path>, options: &GridFileOptions) -> CleanResult<Grid> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => GridFormat::from_path(path)?,
    };

    match fmt {
        GridFormat::Csv => read_csv_grid_from_path(path, &options.csv),
        GridFormat::Tsv => read_csv_grid_from_path(path, &tab_separated(options.csv)),
        GridFormat::Json => read_json_grid_from_path(path),
        GridFormat::Excel => read_excel_dispatch(path, options.sheet.as_deref()),
    }
}

/// Write a grid to `path` as CSV or JSON, replacing the file if it exists.
///
/// Excel output is not supported and returns [`CleaningError::UnsupportedFormat`].
pub fn write_grid_to_path(path: impl AsRef<Path>, grid: &Grid, options: &GridFileOptions) -> CleanResult<()> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => GridFormat::from_path(path)?,
    };

    match fmt {
        GridFormat::Csv => write_csv_grid(BufWriter::new(File::create(path)?), grid, &options.csv),
        GridFormat::Tsv => write_csv_grid(
            BufWriter::new(File::create(path)?),
            grid,
            &tab_separated(options.csv),
        ),
        GridFormat::Json => write_json_grid(BufWriter::new(File::create(path)?), grid),
        GridFormat::Excel => Err(CleaningError::UnsupportedFormat {
            message: format!("writing excel workbooks is not supported ({})", path.display()),
        }),
    }
}

fn tab_separated(csv: CsvOptions) -> CsvOptions {
    CsvOptions { delimiter: b'\t', ..csv }
}

fn read_excel_dispatch(path: &Path, sheet: Option<&str>) -> CleanResult<Grid> {
    // Avoid unused warnings when the feature is off.
    let _ = (path, sheet);

    #[cfg(feature = "excel")]
    {
        super::excel::read_excel_grid_from_path(path, sheet)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(CleaningError::UnsupportedFormat {
            message: "excel sources not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::GridFormat;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(GridFormat::from_extension("CSV"), Some(GridFormat::Csv));
        assert_eq!(GridFormat::from_extension("tsv"), Some(GridFormat::Tsv));
        assert_eq!(GridFormat::from_extension("json"), Some(GridFormat::Json));
        assert_eq!(GridFormat::from_extension("xlsx"), Some(GridFormat::Excel));
        assert_eq!(GridFormat::from_extension("parquet"), None);
    }

    #[test]
    fn format_from_path_requires_extension() {
        let err = GridFormat::from_path(Path::new("no_extension")).unwrap_err();
        assert!(err.to_string().contains("path has no extension"));
    }
}
