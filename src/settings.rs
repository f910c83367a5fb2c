//! Serializable settings for a cleaning run.
//!
//! Settings are plain JSON with every field optional:
//!
//! ```json
//! { "placeholder": "N/A", "summarize": false, "summary_sample_rows": 20 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cleaning::{CleaningOptions, DEFAULT_PLACEHOLDER};
use crate::error::{CleanResult, CleaningError};
use crate::summary::{SummaryOptions, DEFAULT_SUMMARY_SAMPLE_ROWS};

/// User-facing settings; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningSettings {
    /// Text written into blank cells; must contain a non-whitespace character.
    pub placeholder: String,
    /// Whether to request an optional summary after cleaning.
    pub summarize: bool,
    /// Number of cleaned rows sent to the summarizer.
    pub summary_sample_rows: usize,
}

impl Default for CleaningSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            summarize: false,
            summary_sample_rows: DEFAULT_SUMMARY_SAMPLE_ROWS,
        }
    }
}

impl CleaningSettings {
    /// Parse settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CleaningError::Json`] for malformed JSON and [`CleaningError::InvalidSettings`]
    /// when the values fail [`CleaningSettings::validate`].
    pub fn from_json_str(input: &str) -> CleanResult<Self> {
        let settings: Self = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> CleanResult<()> {
        if self.placeholder.trim().is_empty() {
            return Err(CleaningError::InvalidSettings {
                message: format!("placeholder {:?} is blank", self.placeholder),
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CleanResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Pipeline options for these settings (no observer attached).
    pub fn to_options(&self) -> CleaningOptions {
        CleaningOptions {
            placeholder: self.placeholder.clone(),
            ..Default::default()
        }
    }

    /// Summary options for these settings.
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            enabled: self.summarize,
            sample_rows: self.summary_sample_rows,
        }
    }
}
