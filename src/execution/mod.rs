//! Parallel batch cleaning of independent grids.
//!
//! The cleaning pipeline is synchronous and shares no state between runs, so independent grids
//! can be cleaned concurrently. This module provides:
//!
//! - A dedicated `rayon` thread pool per [`ExecutionEngine`]
//! - Throttling of how many grids are in flight at once
//! - Real-time metrics + observer hooks for monitoring

mod observer;
mod semaphore;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::cleaning::{clean_with_options, CleaningOptions};
use crate::error::CleanResult;
use crate::types::{CleaningResult, Grid};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, StdErrExecutionObserver,
};

use semaphore::Semaphore;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Upper bound on grids being cleaned at the same time.
    ///
    /// This is an additional throttle on top of `num_threads`.
    pub max_in_flight_grids: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self {
            num_threads: Some(n),
            max_in_flight_grids: n.max(1),
        }
    }
}

/// Cleans batches of grids on a private thread pool.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CleaningError::ThreadPool`] if the thread pool cannot be built.
    ///
    /// # Panics
    ///
    /// Panics if `max_in_flight_grids == 0` or `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> CleanResult<Self> {
        assert!(opts.max_in_flight_grids > 0, "max_in_flight_grids must be > 0");
        if let Some(n) = opts.num_threads {
            assert!(n > 0, "num_threads must be > 0 when set");
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let pool = ThreadPoolBuilder::new().num_threads(n_threads).build()?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Clean every grid in `grids`, in parallel.
    ///
    /// The output has one entry per input grid, in input order. Each grid is cleaned in
    /// isolation: an empty grid yields its own `Err` and does not affect the others.
    pub fn clean_batch(&self, grids: &[Grid], options: &CleaningOptions) -> Vec<CleanResult<CleaningResult>> {
        self.pool.install(|| self.clean_batch_impl(grids, options))
    }

    fn clean_batch_impl(&self, grids: &[Grid], options: &CleaningOptions) -> Vec<CleanResult<CleaningResult>> {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::BatchStarted { grids: grids.len() });

        let sem = Semaphore::new(self.opts.max_in_flight_grids);

        let out: Vec<CleanResult<CleaningResult>> = grids
            .par_iter()
            .enumerate()
            .map(|(index, grid)| {
                let waited = sem.acquire();
                if waited > Duration::ZERO {
                    self.metrics.on_throttle_wait(waited);
                    self.emit(ExecutionEvent::ThrottleWaited { duration: waited });
                }

                self.metrics.on_grid_start(grid.row_count());
                self.emit(ExecutionEvent::GridStarted {
                    index,
                    rows: grid.row_count(),
                });

                let result = clean_with_options(grid, options);
                match &result {
                    Ok(r) => {
                        self.emit(ExecutionEvent::GridFinished {
                            index,
                            cleaned_rows: r.cleaned_row_count,
                        });
                        self.metrics.on_grid_end(Some(r.cleaned_row_count));
                    }
                    Err(e) => {
                        log::warn!("grid {index} failed to clean: {e}");
                        self.emit(ExecutionEvent::GridFailed {
                            index,
                            error: e.to_string(),
                        });
                        self.metrics.on_grid_end(None);
                    }
                }

                sem.release();
                result
            })
            .collect();

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::BatchFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
