//! Core data model types for grid cleaning.
//!
//! A [`Grid`] is an ordered list of rows, each row an ordered list of [`Cell`]s. Rows may have
//! different lengths; nothing in this crate pads or truncates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value in a [`Grid`].
///
/// Serializes untagged: `null`, `true`/`false`, a JSON number or a JSON string, which is the
/// shape a spreadsheet host hands over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value (a host `null`/`undefined`).
    Empty,
    /// Boolean.
    Boolean(bool),
    /// Numeric value.
    Number(f64),
    /// Text, possibly empty or whitespace-only.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns `true` for [`Cell::Empty`] and for text whose trimmed content is empty.
    ///
    /// Numbers and booleans are never blank, including `0` and `false`.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Boolean(_) => false,
        }
    }

    /// Canonical key used for duplicate detection.
    ///
    /// Keys compare by cell kind first, so `Text("5")` never equals `Number(5.0)` and
    /// `Empty` never equals `Text("")`.
    pub fn canonical_key(&self) -> CellKey {
        match self {
            Self::Empty => CellKey::Empty,
            Self::Boolean(b) => CellKey::Boolean(*b),
            Self::Number(n) => CellKey::Number(canonical_bits(*n)),
            Self::Text(s) => CellKey::Text(s.clone()),
        }
    }
}

/// All NaNs share one key and `-0.0` keys as `0.0`, so key equality stays an equivalence.
fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

/// Hashable, totally ordered serialization of a [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    /// Key of [`Cell::Empty`].
    Empty,
    /// Key of [`Cell::Boolean`].
    Boolean(bool),
    /// Key of [`Cell::Number`] (IEEE-754 bits after canonicalization).
    Number(u64),
    /// Key of [`Cell::Text`].
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// In-memory two-dimensional grid of cells, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    /// Row-major cell storage. Row lengths may differ.
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid from rows.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Create a new grid by applying `mapper` to every cell. Row shapes are preserved.
    pub fn map_cells<F>(&self, mut mapper: F) -> Self
    where
        F: FnMut(&Cell) -> Cell,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(&mut mapper).collect())
            .collect();
        Self { rows }
    }

    /// Create a new grid containing only rows that match `predicate`, in their original order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self { rows }
    }

    /// The first `n` rows (or fewer), as a borrowed slice.
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

/// Output of the cleaning pipeline: the cleaned grid plus metadata about the run.
///
/// Invariants: `cleaned_row_count == cleaned_grid.row_count()`,
/// `cleaned_row_count <= original_row_count`, and `header_row_index < cleaned_row_count`
/// whenever `cleaned_row_count > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningResult {
    /// The cleaned grid.
    pub cleaned_grid: Grid,
    /// Index of the first row that is not entirely blank (0 for an empty grid).
    pub header_row_index: usize,
    /// Row count of the raw input.
    pub original_row_count: usize,
    /// Row count of [`Self::cleaned_grid`].
    pub cleaned_row_count: usize,
}

impl CleaningResult {
    /// Number of rows removed by deduplication and empty-row removal.
    pub fn rows_removed(&self) -> usize {
        self.original_row_count - self.cleaned_row_count
    }
}
