use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{CleaningError, CleaningSeverity};

use super::pipeline::CleaningStage;

/// Row/cell counts for one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    /// The stage that just ran.
    pub stage: CleaningStage,
    /// Rows handed to the stage.
    pub rows_in: usize,
    /// Rows the stage produced.
    pub rows_out: usize,
    /// Cells whose value differs between input and output (row-preserving stages only).
    pub cells_changed: usize,
}

/// Summary reported when a pipeline run succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningStats {
    /// Rows in the raw input.
    pub original_rows: usize,
    /// Rows in the cleaned output.
    pub cleaned_rows: usize,
    /// Header row index of the cleaned output.
    pub header_row_index: usize,
}

/// Observer interface for cleaning runs.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait CleaningObserver: Send + Sync {
    /// Called after each pipeline stage.
    fn on_stage(&self, _report: &StageReport) {}

    /// Called when a run succeeds.
    fn on_success(&self, _stats: &CleaningStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _severity: CleaningSeverity, _error: &CleaningError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, severity: CleaningSeverity, error: &CleaningError) {
        self.on_failure(severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn CleaningObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn CleaningObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl CleaningObserver for CompositeObserver {
    fn on_stage(&self, report: &StageReport) {
        for o in &self.observers {
            o.on_stage(report);
        }
    }

    fn on_success(&self, stats: &CleaningStats) {
        for o in &self.observers {
            o.on_success(stats);
        }
    }

    fn on_failure(&self, severity: CleaningSeverity, error: &CleaningError) {
        for o in &self.observers {
            o.on_failure(severity, error);
        }
    }

    fn on_alert(&self, severity: CleaningSeverity, error: &CleaningError) {
        for o in &self.observers {
            o.on_alert(severity, error);
        }
    }
}

/// Logs cleaning events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl CleaningObserver for StdErrObserver {
    fn on_stage(&self, report: &StageReport) {
        eprintln!(
            "[clean][{}] rows={}->{} cells_changed={}",
            report.stage, report.rows_in, report.rows_out, report.cells_changed
        );
    }

    fn on_success(&self, stats: &CleaningStats) {
        eprintln!(
            "[clean][ok] rows={}->{} header_row={}",
            stats.original_rows, stats.cleaned_rows, stats.header_row_index
        );
    }

    fn on_failure(&self, severity: CleaningSeverity, error: &CleaningError) {
        eprintln!("[clean][{severity:?}] err={error}");
    }

    fn on_alert(&self, severity: CleaningSeverity, error: &CleaningError) {
        eprintln!("[ALERT][clean][{severity:?}] err={error}");
    }
}

/// Forwards cleaning events to the [`log`] facade.
///
/// Stage reports go to `debug`, successes to `info`, failures to `warn`/`error` by severity.
#[derive(Debug, Default)]
pub struct LogObserver;

impl CleaningObserver for LogObserver {
    fn on_stage(&self, report: &StageReport) {
        log::debug!(
            "stage {} rows {} -> {} ({} cells changed)",
            report.stage,
            report.rows_in,
            report.rows_out,
            report.cells_changed
        );
    }

    fn on_success(&self, stats: &CleaningStats) {
        log::info!(
            "cleaned grid: {} -> {} rows, header row {}",
            stats.original_rows,
            stats.cleaned_rows,
            stats.header_row_index
        );
    }

    fn on_failure(&self, severity: CleaningSeverity, error: &CleaningError) {
        if severity >= CleaningSeverity::Error {
            log::error!("cleaning failed ({severity:?}): {error}");
        } else {
            log::warn!("cleaning failed ({severity:?}): {error}");
        }
    }

    fn on_alert(&self, severity: CleaningSeverity, error: &CleaningError) {
        log::error!("ALERT: cleaning failed ({severity:?}): {error}");
    }
}

/// Appends cleaning events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl CleaningObserver for FileObserver {
    fn on_stage(&self, report: &StageReport) {
        self.append_line(&format!(
            "{} stage={} rows_in={} rows_out={} cells_changed={}",
            unix_ts(),
            report.stage,
            report.rows_in,
            report.rows_out,
            report.cells_changed
        ));
    }

    fn on_success(&self, stats: &CleaningStats) {
        self.append_line(&format!(
            "{} ok original_rows={} cleaned_rows={} header_row={}",
            unix_ts(),
            stats.original_rows,
            stats.cleaned_rows,
            stats.header_row_index
        ));
    }

    fn on_failure(&self, severity: CleaningSeverity, error: &CleaningError) {
        self.append_line(&format!(
            "{} fail severity={:?} err={}",
            unix_ts(),
            severity,
            error
        ));
    }

    fn on_alert(&self, severity: CleaningSeverity, error: &CleaningError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} err={}",
            unix_ts(),
            severity,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
