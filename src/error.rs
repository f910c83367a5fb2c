use thiserror::Error;

/// Convenience result type for cleaning and grid I/O operations.
pub type CleanResult<T> = Result<T, CleaningError>;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CleaningSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Error type returned by the cleaning pipeline and the grid sources/sinks around it.
///
/// [`crate::cleaning::clean`] itself only ever returns [`CleaningError::EmptyInput`]; every other
/// variant comes from reading or writing grids, loading settings, or setting up batch execution.
#[derive(Debug, Error)]
pub enum CleaningError {
    /// The raw grid is missing or has zero rows.
    #[error("empty input: the grid has no rows to clean")]
    EmptyInput,

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON read/write error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "excel")]
    /// Excel read error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// The file format could not be determined or is not supported.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// A source value cannot be represented as a [`crate::types::Cell`].
    #[error("invalid cell at row {row} column {column}: {message}")]
    InvalidCell {
        row: usize,
        column: usize,
        message: String,
    },

    /// Loaded settings are well-formed JSON but hold an unusable value.
    #[error("invalid settings: {message}")]
    InvalidSettings { message: String },

    /// The batch execution thread pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl CleaningError {
    /// Severity of this error for observers.
    ///
    /// I/O failures are [`CleaningSeverity::Critical`]; malformed input is
    /// [`CleaningSeverity::Error`]; an empty grid is only a [`CleaningSeverity::Warning`].
    pub fn severity(&self) -> CleaningSeverity {
        match self {
            Self::EmptyInput => CleaningSeverity::Warning,
            Self::Io(_) | Self::ThreadPool(_) => CleaningSeverity::Critical,
            Self::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => CleaningSeverity::Critical,
                _ => CleaningSeverity::Error,
            },
            Self::Json(err) if err.is_io() => CleaningSeverity::Critical,
            Self::Json(_) => CleaningSeverity::Error,
            #[cfg(feature = "excel")]
            Self::Excel(_) => CleaningSeverity::Error,
            Self::UnsupportedFormat { .. } | Self::InvalidCell { .. } | Self::InvalidSettings { .. } => {
                CleaningSeverity::Error
            }
        }
    }
}
