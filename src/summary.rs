//! Optional, best-effort summarization of a cleaned grid.
//!
//! A [`Summarizer`] is any function-shaped capability that turns a small sample of rows into
//! text, typically by calling a remote text model. This crate ships no client; callers plug one
//! in. Whatever the summarizer does, [`summarize_cleaned`] never fails: errors and blank replies
//! become `None` ("no summary available") and the cleaned data is never touched.

use thiserror::Error;

use crate::cleaning::{clean_with_options, CleaningOptions};
use crate::error::CleanResult;
use crate::types::{Cell, CleaningResult, Grid};

/// Number of cleaned rows handed to a summarizer unless configured otherwise.
pub const DEFAULT_SUMMARY_SAMPLE_ROWS: usize = 20;

/// Failure reported by a [`Summarizer`]. Never escapes [`summarize_cleaned`].
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The summarizer is not usable (e.g. missing credentials).
    #[error("summarizer unavailable: {message}")]
    Unavailable { message: String },

    /// The request to the backing service failed.
    #[error("summary request failed: {message}")]
    Request { message: String },

    /// The service answered with something that is not a summary.
    #[error("malformed summary response: {message}")]
    MalformedResponse { message: String },

    /// The sample could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a sample of cleaned rows into a short textual summary.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, sample: &[Vec<Cell>]) -> Result<String, SummaryError>;
}

impl<F> Summarizer for F
where
    F: Fn(&[Vec<Cell>]) -> Result<String, SummaryError> + Send + Sync,
{
    fn summarize(&self, sample: &[Vec<Cell>]) -> Result<String, SummaryError> {
        self(sample)
    }
}

/// Options for the optional summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// When `false`, the summarizer is never called.
    pub enabled: bool,
    /// Maximum number of cleaned rows sent to the summarizer.
    pub sample_rows: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_rows: DEFAULT_SUMMARY_SAMPLE_ROWS,
        }
    }
}

/// Build a plain-text prompt describing `sample`, with the rows embedded as JSON.
pub fn build_prompt(sample: &[Vec<Cell>]) -> Result<String, SummaryError> {
    let rows = serde_json::to_string(sample)?;
    Ok(format!(
        "Summarize the following cleaned table in two or three sentences. \
         The first row is the header. Rows ({}) as JSON arrays:\n{rows}",
        sample.len()
    ))
}

/// Ask `summarizer` for a summary of the first `sample_rows` rows of `cleaned`.
///
/// Returns `None` when disabled, when `cleaned` has no rows, or when the summarizer fails or
/// answers with blank text. Failures are logged at `warn` level and otherwise swallowed.
pub fn summarize_cleaned(
    cleaned: &Grid,
    enabled: bool,
    summarizer: &dyn Summarizer,
    sample_rows: usize,
) -> Option<String> {
    if !enabled {
        return None;
    }
    let sample = cleaned.head(sample_rows);
    if sample.is_empty() {
        log::debug!("skipping summary: cleaned grid has no rows");
        return None;
    }

    match summarizer.summarize(sample) {
        Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => {
            log::warn!("summary unavailable: summarizer returned blank text");
            None
        }
        Err(e) => {
            log::warn!("summary unavailable: {e}");
            None
        }
    }
}

/// A cleaning result plus its optional summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizedCleaning {
    /// The cleaning output, identical to what [`clean_with_options`] returns.
    pub result: CleaningResult,
    /// Summary text, or `None` when no summary is available.
    pub summary: Option<String>,
}

/// Clean `raw`, then (optionally) summarize the cleaned grid.
///
/// # Errors
///
/// Only cleaning errors are returned; summarizer failures yield `summary: None`.
pub fn clean_and_summarize(
    raw: &Grid,
    options: &CleaningOptions,
    summarizer: Option<&dyn Summarizer>,
    summary_options: &SummaryOptions,
) -> CleanResult<SummarizedCleaning> {
    let result = clean_with_options(raw, options)?;
    let summary = summarizer.and_then(|s| {
        summarize_cleaned(
            &result.cleaned_grid,
            summary_options.enabled,
            s,
            summary_options.sample_rows,
        )
    });
    Ok(SummarizedCleaning { result, summary })
}
