//! Client-side input handling.
//!
//! Turns the raw text a user typed or uploaded into candidate names, and the
//! optional threshold string into a bounded float. Nothing here talks to the
//! scoring service.

mod extractor;
mod threshold;

pub use extractor::extract_names;
pub use threshold::{parse_threshold, THRESHOLD_HINT};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before a request is ever built.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Threshold '{0}' is not a number")]
    InvalidThreshold(String),

    #[error("Threshold {0} must be strictly between -1 and 1")]
    ThresholdOutOfRange(f64),

    #[error("No names to validate")]
    EmptyInput,

    #[error("Malformed name list: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Error parsing file {}: {reason}", path.display())]
    FileRead { path: PathBuf, reason: String },
}

impl InputError {
    /// True for errors that belong to the threshold field.
    pub fn is_threshold_error(&self) -> bool {
        matches!(
            self,
            InputError::InvalidThreshold(_) | InputError::ThresholdOutOfRange(_)
        )
    }
}
