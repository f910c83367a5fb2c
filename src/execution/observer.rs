use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Execution events emitted by the batch engine.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    BatchStarted { grids: usize },
    ThrottleWaited { duration: Duration },
    GridStarted { index: usize, rows: usize },
    GridFinished { index: usize, cleaned_rows: usize },
    GridFailed { index: usize, error: String },
    BatchFinished {
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        eprintln!("{event:?}");
    }
}

/// Real-time metrics for a batch run.
///
/// The engine updates these counters during execution; callers can snapshot them at any time.
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    grids_started: AtomicU64,
    grids_finished: AtomicU64,
    grids_failed: AtomicU64,
    rows_in: AtomicU64,
    rows_out: AtomicU64,
    throttle_wait_ns: AtomicU64,

    active_grids: AtomicUsize,
    max_active_grids: AtomicUsize,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            grids_started: AtomicU64::new(0),
            grids_finished: AtomicU64::new(0),
            grids_failed: AtomicU64::new(0),
            rows_in: AtomicU64::new(0),
            rows_out: AtomicU64::new(0),
            throttle_wait_ns: AtomicU64::new(0),
            active_grids: AtomicUsize::new(0),
            max_active_grids: AtomicUsize::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);

        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.grids_started.store(0, Ordering::SeqCst);
        self.grids_finished.store(0, Ordering::SeqCst);
        self.grids_failed.store(0, Ordering::SeqCst);
        self.rows_in.store(0, Ordering::SeqCst);
        self.rows_out.store(0, Ordering::SeqCst);
        self.throttle_wait_ns.store(0, Ordering::SeqCst);
        self.active_grids.store(0, Ordering::SeqCst);
        self.max_active_grids.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns.store(duration_ns(elapsed), Ordering::SeqCst);
    }

    pub fn on_grid_start(&self, rows: usize) {
        let _ = self.grids_started.fetch_add(1, Ordering::SeqCst);
        let _ = self.rows_in.fetch_add(rows as u64, Ordering::SeqCst);
        let now = self.active_grids.fetch_add(1, Ordering::SeqCst) + 1;
        update_max_usize(&self.max_active_grids, now);
    }

    pub fn on_grid_end(&self, cleaned_rows: Option<usize>) {
        match cleaned_rows {
            Some(rows) => {
                let _ = self.grids_finished.fetch_add(1, Ordering::SeqCst);
                let _ = self.rows_out.fetch_add(rows as u64, Ordering::SeqCst);
            }
            None => {
                let _ = self.grids_failed.fetch_add(1, Ordering::SeqCst);
            }
        }
        let _ = self.active_grids.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn on_throttle_wait(&self, d: Duration) {
        let _ = self.throttle_wait_ns.fetch_add(duration_ns(d), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            grids_started: self.grids_started.load(Ordering::SeqCst),
            grids_finished: self.grids_finished.load(Ordering::SeqCst),
            grids_failed: self.grids_failed.load(Ordering::SeqCst),
            rows_in: self.rows_in.load(Ordering::SeqCst),
            rows_out: self.rows_out.load(Ordering::SeqCst),
            throttle_wait: Duration::from_nanos(self.throttle_wait_ns.load(Ordering::SeqCst)),
            max_active_grids: self.max_active_grids.load(Ordering::SeqCst),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn duration_ns(d: Duration) -> u64 {
    d.as_nanos().min(u64::MAX as u128) as u64
}

fn update_max_usize(dst: &AtomicUsize, now: usize) {
    dst.fetch_max(now, Ordering::SeqCst);
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub grids_started: u64,
    pub grids_finished: u64,
    pub grids_failed: u64,
    pub rows_in: u64,
    pub rows_out: u64,
    pub throttle_wait: Duration,
    pub max_active_grids: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, grids={}/{} (failed={}), rows={}->{}, max_active_grids={}, throttle_wait={:?}, elapsed={:?}",
            self.run_id,
            self.grids_finished,
            self.grids_started,
            self.grids_failed,
            self.rows_in,
            self.rows_out,
            self.max_active_grids,
            self.throttle_wait,
            self.elapsed
        )
    }
}
