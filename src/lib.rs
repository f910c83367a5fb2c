//! `grid-cleaning` turns a raw two-dimensional grid of spreadsheet cells into a normalized,
//! deduplicated, presentation-ready grid, plus metadata describing what changed.
//!
//! The primary entrypoint is [`cleaning::clean`], which runs five pure stages in a fixed order:
//!
//! 1. trim leading/trailing whitespace from text cells
//! 2. rewrite non-blank text cells to title case
//! 3. drop rows that repeat an earlier row (first occurrence wins)
//! 4. drop rows whose cells are all blank
//! 5. replace every remaining blank cell with the placeholder `"N/A"`
//!
//! and then locates the header row (the first row that is not entirely blank).
//!
//! ## Cell model
//!
//! Cells are [`types::Cell`]s: [`types::Cell::Text`], [`types::Cell::Number`],
//! [`types::Cell::Boolean`] or [`types::Cell::Empty`]. A cell is *blank* when it is `Empty` or
//! text whose trimmed content is empty. Duplicate detection compares cells by kind and value, so
//! the text `"5"` never matches the number `5`, and `Empty` never matches `""`.
//!
//! ## Quick example
//!
//! ```rust
//! use grid_cleaning::cleaning::clean;
//! use grid_cleaning::types::{Cell, Grid};
//!
//! # fn main() -> Result<(), grid_cleaning::CleaningError> {
//! let raw = Grid::new(vec![
//!     vec![Cell::Empty, Cell::Empty],
//!     vec![Cell::text("x"), Cell::Empty],
//! ]);
//!
//! let result = clean(&raw)?;
//! assert_eq!(result.cleaned_grid.rows, vec![vec![Cell::text("X"), Cell::text("N/A")]]);
//! assert_eq!(result.header_row_index, 0);
//! assert_eq!(result.cleaned_row_count, 1);
//! # Ok(())
//! # }
//! ```
//!
//! A grid with no rows is rejected with [`CleaningError::EmptyInput`]; nothing else about the
//! input is validated.
//!
//! ## Modules
//!
//! - [`cleaning`]: the pipeline stages, orchestration and cleaning observers
//! - [`types`]: grid, cell and result types
//! - [`io`]: CSV/JSON (and, with the `excel` feature, workbook) grid sources and sinks
//! - [`execution`]: parallel cleaning of many independent grids
//! - [`summary`]: optional, best-effort summarization of a cleaned grid
//! - [`settings`]: serializable run settings
//! - [`error`]: error types

pub mod cleaning;
pub mod error;
pub mod execution;
pub mod io;
pub mod settings;
pub mod summary;
pub mod types;

pub use cleaning::{clean, clean_with_options, CleaningOptions};
pub use error::{CleanResult, CleaningError, CleaningSeverity};
pub use types::{Cell, CleaningResult, Grid};
