//! The cleaning pipeline.
//!
//! Each stage is a pure function from a borrowed [`crate::types::Grid`] to a new grid. Most
//! callers should use [`clean`] (or [`clean_with_options`]), which runs every stage in order and
//! assembles a [`crate::types::CleaningResult`].
//!
//! Individual stages are also available:
//!
//! - [`trim_grid`]: strip leading/trailing whitespace from text cells
//! - [`normalize_casing`]: title-case non-blank text cells
//! - [`remove_duplicate_rows`]: keep the first occurrence of every distinct row
//! - [`remove_empty_rows`] / [`fill_empty_cells`]: drop all-blank rows, then fill blank cells
//! - [`locate_header_row`]: index of the first non-blank row
//!
//! ## Example: running stages by hand
//!
//! ```rust
//! use grid_cleaning::cleaning::{fill_empty_cells, remove_empty_rows, trim_grid};
//! use grid_cleaning::types::{Cell, Grid};
//!
//! let raw = Grid::new(vec![
//!     vec![Cell::Empty, Cell::Empty],
//!     vec![Cell::text(" x "), Cell::Empty],
//! ]);
//!
//! let trimmed = trim_grid(&raw);
//! let filled = fill_empty_cells(&remove_empty_rows(&trimmed), "N/A");
//! assert_eq!(filled.rows, vec![vec![Cell::text("x"), Cell::text("N/A")]]);
//! ```

pub mod casing;
pub mod dedup;
pub mod emptiness;
pub mod header;
pub mod observability;
pub mod pipeline;
pub mod whitespace;

pub use casing::{normalize_casing, title_case};
pub use dedup::remove_duplicate_rows;
pub use emptiness::{fill_empty_cells, is_blank_row, remove_empty_rows};
pub use header::locate_header_row;
pub use observability::{
    CleaningObserver, CleaningStats, CompositeObserver, FileObserver, LogObserver, StageReport, StdErrObserver,
};
pub use pipeline::{clean, clean_with_options, CleaningOptions, CleaningStage, DEFAULT_PLACEHOLDER};
pub use whitespace::trim_grid;
