//! Grid sources and sinks.
//!
//! These sit outside the cleaning core: they materialize a [`crate::types::Grid`] before
//! [`crate::cleaning::clean`] runs and persist the cleaned grid afterwards. No presentation
//! (bold headers, colors, column widths) is applied.
//!
//! Most callers should use [`read_grid_from_path`] / [`write_grid_to_path`] (from [`unified`]).
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]
//! - `excel` (Cargo feature `excel`)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod json;
pub mod unified;

pub use unified::{read_grid_from_path, write_grid_to_path, GridFormat, GridFileOptions};
