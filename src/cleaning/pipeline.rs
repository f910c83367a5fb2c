//! Pipeline orchestration: raw grid in, [`CleaningResult`] out.
//!
//! Stages run in a fixed order, each borrowing the previous snapshot and returning a new one:
//!
//! 1. [`CleaningStage::TrimWhitespace`]
//! 2. [`CleaningStage::NormalizeCasing`]
//! 3. [`CleaningStage::RemoveDuplicates`]
//! 4. [`CleaningStage::RemoveEmptyRows`]
//! 5. [`CleaningStage::FillEmptyCells`]
//!
//! Trimming and casing run before deduplication so that `"  alice "` and `"Alice"` collapse.
//! Placeholders are written after deduplication, so rows that only become identical once their
//! blanks read `"N/A"` are kept.

use std::fmt;
use std::sync::Arc;

use crate::error::{CleanResult, CleaningError, CleaningSeverity};
use crate::types::{Cell, CleaningResult, Grid};

use super::casing::normalize_casing;
use super::dedup::remove_duplicate_rows;
use super::emptiness::{fill_empty_cells, remove_empty_rows};
use super::header::locate_header_row;
use super::observability::{CleaningObserver, CleaningStats, StageReport};
use super::whitespace::trim_grid;

/// Placeholder written into blank cells unless [`CleaningOptions::placeholder`] says otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

/// The ordered stages of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleaningStage {
    /// Strip leading/trailing whitespace from text cells.
    TrimWhitespace,
    /// Rewrite non-blank text cells to title case.
    NormalizeCasing,
    /// Drop rows that repeat an earlier row.
    RemoveDuplicates,
    /// Drop rows whose cells are all blank.
    RemoveEmptyRows,
    /// Replace remaining blank cells with the placeholder.
    FillEmptyCells,
}

impl CleaningStage {
    /// All stages, in execution order.
    pub const ALL: [CleaningStage; 5] = [
        CleaningStage::TrimWhitespace,
        CleaningStage::NormalizeCasing,
        CleaningStage::RemoveDuplicates,
        CleaningStage::RemoveEmptyRows,
        CleaningStage::FillEmptyCells,
    ];

    /// Short, stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::TrimWhitespace => "trim_whitespace",
            Self::NormalizeCasing => "normalize_casing",
            Self::RemoveDuplicates => "remove_duplicates",
            Self::RemoveEmptyRows => "remove_empty_rows",
            Self::FillEmptyCells => "fill_empty_cells",
        }
    }

    fn apply(self, grid: &Grid, placeholder: &str) -> Grid {
        match self {
            Self::TrimWhitespace => trim_grid(grid),
            Self::NormalizeCasing => normalize_casing(grid),
            Self::RemoveDuplicates => remove_duplicate_rows(grid),
            Self::RemoveEmptyRows => remove_empty_rows(grid),
            Self::FillEmptyCells => fill_empty_cells(grid, placeholder),
        }
    }

    fn preserves_rows(self) -> bool {
        matches!(
            self,
            Self::TrimWhitespace | Self::NormalizeCasing | Self::FillEmptyCells
        )
    }
}

impl fmt::Display for CleaningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options controlling a cleaning run.
///
/// Use [`Default`] for the standard `"N/A"` placeholder and no observer.
#[derive(Clone)]
pub struct CleaningOptions {
    /// Text written into every blank cell that survives row removal.
    ///
    /// Must not be blank itself: a whitespace-only placeholder leaves blank text in the output,
    /// and cleaning that output again would then drop or refill those cells.
    /// [`crate::settings::CleaningSettings`] rejects such values when loading.
    pub placeholder: String,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn CleaningObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: CleaningSeverity,
}

impl fmt::Debug for CleaningOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningOptions")
            .field("placeholder", &self.placeholder)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            observer: None,
            alert_at_or_above: CleaningSeverity::Critical,
        }
    }
}

/// Clean `raw` with default options.
///
/// # Errors
///
/// Returns [`CleaningError::EmptyInput`] when `raw` has no rows.
///
/// # Examples
///
/// ```rust
/// use grid_cleaning::cleaning::clean;
/// use grid_cleaning::types::{Cell, Grid};
///
/// # fn main() -> Result<(), grid_cleaning::CleaningError> {
/// let raw = Grid::new(vec![
///     vec![Cell::text("  alice  "), Cell::text("30")],
///     vec![Cell::text("Alice"), Cell::text("30")],
///     vec![Cell::text(""), Cell::text("")],
/// ]);
///
/// let result = clean(&raw)?;
/// assert_eq!(result.cleaned_grid.rows, vec![vec![Cell::text("Alice"), Cell::text("30")]]);
/// assert_eq!(result.original_row_count, 3);
/// assert_eq!(result.cleaned_row_count, 1);
/// # Ok(())
/// # }
/// ```
pub fn clean(raw: &Grid) -> CleanResult<CleaningResult> {
    clean_with_options(raw, &CleaningOptions::default())
}

/// Clean `raw` with explicit options.
///
/// When an observer is configured, this function reports:
///
/// - `on_stage` after each of the five stages
/// - `on_success` with row counts on success
/// - `on_failure` on failure, and `on_alert` when the severity is >= `options.alert_at_or_above`
///
/// # Errors
///
/// Returns [`CleaningError::EmptyInput`] when `raw` has no rows. No other input is rejected.
pub fn clean_with_options(raw: &Grid, options: &CleaningOptions) -> CleanResult<CleaningResult> {
    if raw.is_empty() {
        let err = CleaningError::EmptyInput;
        report_failure(options, &err);
        return Err(err);
    }

    let original_row_count = raw.row_count();
    let mut current = raw.clone();
    for stage in CleaningStage::ALL {
        let next = stage.apply(&current, &options.placeholder);
        let report = StageReport {
            stage,
            rows_in: current.row_count(),
            rows_out: next.row_count(),
            cells_changed: if stage.preserves_rows() {
                count_changed_cells(&current, &next)
            } else {
                0
            },
        };
        log::trace!(
            "{stage}: {} -> {} rows, {} cells changed",
            report.rows_in,
            report.rows_out,
            report.cells_changed
        );
        if let Some(obs) = options.observer.as_ref() {
            obs.on_stage(&report);
        }
        current = next;
    }

    let header_row_index = locate_header_row(&current);
    let cleaned_row_count = current.row_count();

    if let Some(obs) = options.observer.as_ref() {
        obs.on_success(&CleaningStats {
            original_rows: original_row_count,
            cleaned_rows: cleaned_row_count,
            header_row_index,
        });
    }

    Ok(CleaningResult {
        cleaned_grid: current,
        header_row_index,
        original_row_count,
        cleaned_row_count,
    })
}

fn report_failure(options: &CleaningOptions, err: &CleaningError) {
    log::debug!("cleaning rejected input: {err}");
    if let Some(obs) = options.observer.as_ref() {
        let sev = err.severity();
        obs.on_failure(sev, err);
        if sev >= options.alert_at_or_above {
            obs.on_alert(sev, err);
        }
    }
}

fn count_changed_cells(before: &Grid, after: &Grid) -> usize {
    before
        .rows
        .iter()
        .zip(after.rows.iter())
        .map(|(a, b)| a.iter().zip(b.iter()).filter(|(x, y)| !same_cell(x, y)).count())
        .sum()
}

fn same_cell(a: &Cell, b: &Cell) -> bool {
    match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{clean, clean_with_options, CleaningOptions, CleaningStage};
    use crate::cleaning::observability::{CleaningObserver, StageReport};
    use crate::error::CleaningError;
    use crate::types::{Cell, Grid};

    #[derive(Default)]
    struct StageRecorder {
        reports: Mutex<Vec<StageReport>>,
    }

    impl CleaningObserver for StageRecorder {
        fn on_stage(&self, report: &StageReport) {
            self.reports.lock().unwrap().push(*report);
        }
    }

    #[test]
    fn rejects_grid_without_rows() {
        let err = clean(&Grid::default()).unwrap_err();
        assert!(matches!(err, CleaningError::EmptyInput));
    }

    #[test]
    fn stages_run_in_fixed_order_with_counts() {
        let recorder = Arc::new(StageRecorder::default());
        let opts = CleaningOptions {
            observer: Some(recorder.clone()),
            ..Default::default()
        };
        let raw = Grid::new(vec![
            vec![Cell::text("  alice  "), Cell::text("30")],
            vec![Cell::text("Alice"), Cell::text("30")],
            vec![Cell::text(""), Cell::text("")],
            vec![Cell::text("bob"), Cell::Empty],
        ]);

        let out = clean_with_options(&raw, &opts).unwrap();
        assert_eq!(out.cleaned_row_count, 2);

        let reports = recorder.reports.lock().unwrap().clone();
        let stages: Vec<CleaningStage> = reports.iter().map(|r| r.stage).collect();
        assert_eq!(stages, CleaningStage::ALL.to_vec());

        let rows: Vec<(usize, usize)> = reports.iter().map(|r| (r.rows_in, r.rows_out)).collect();
        assert_eq!(rows, vec![(4, 4), (4, 4), (4, 3), (3, 2), (2, 2)]);

        // trim: "  alice  "; casing: "alice" and "bob"; fill: the Empty next to Bob
        let changed: Vec<usize> = reports.iter().map(|r| r.cells_changed).collect();
        assert_eq!(changed, vec![1, 2, 0, 0, 1]);
    }

    #[test]
    fn custom_placeholder_is_used() {
        let opts = CleaningOptions {
            placeholder: "<missing>".to_string(),
            ..Default::default()
        };
        let raw = Grid::new(vec![vec![Cell::text("x"), Cell::Empty]]);
        let out = clean_with_options(&raw, &opts).unwrap();
        assert_eq!(
            out.cleaned_grid.rows[0],
            vec![Cell::text("X"), Cell::text("<missing>")]
        );
    }

    #[test]
    fn input_grid_is_not_modified() {
        let raw = Grid::new(vec![vec![Cell::text(" a ")], vec![Cell::Empty]]);
        let snapshot = raw.clone();
        let _ = clean(&raw).unwrap();
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn stage_names_are_stable() {
        let names: Vec<String> = CleaningStage::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "trim_whitespace",
                "normalize_casing",
                "remove_duplicates",
                "remove_empty_rows",
                "fill_empty_cells",
            ]
        );
    }
}
