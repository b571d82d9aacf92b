//! Submission form state.
//!
//! Holds what the input panel needs between user actions: the name text, the
//! raw threshold, the threshold error flag and the upload status messages.

use std::fs;
use std::path::Path;

use crate::input::{extract_names, parse_threshold, InputError};
use crate::types::ValidationRequest;

/// Progress message while an uploaded file is read.
pub const UPLOAD_PROGRESS_MESSAGE: &str = "Parsing file...";

/// Error message when an uploaded file cannot be read.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error parsing file";

/// File extensions accepted for upload.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Input panel state.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    /// Comma-separated names, typed or loaded from a file
    pub text: String,

    /// Raw threshold field
    pub threshold: String,

    threshold_has_error: bool,
    progress_message: Option<String>,
    error_message: Option<String>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the raw threshold field.
    pub fn with_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn threshold_has_error(&self) -> bool {
        self.threshold_has_error
    }

    pub fn progress_message(&self) -> Option<&str> {
        self.progress_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Validate the form and build a request.
    ///
    /// The threshold error flag is set when the threshold is rejected and
    /// cleared once a request is produced. Nothing is sent from here.
    pub fn submit(&mut self) -> Result<ValidationRequest, InputError> {
        if !self.can_submit() {
            return Err(InputError::EmptyInput);
        }

        let names = extract_names(&self.text)?;
        let threshold = match parse_threshold(&self.threshold) {
            Ok(threshold) => threshold,
            Err(e) => {
                tracing::debug!(threshold = %self.threshold, error = %e, "Threshold rejected");
                self.threshold_has_error = true;
                return Err(e);
            }
        };

        self.threshold_has_error = false;
        Ok(ValidationRequest::new(names, threshold))
    }

    /// Replace the text with the full content of an uploaded file.
    ///
    /// Only `.csv` and `.txt` files are accepted. On failure the text is left
    /// untouched and [`UPLOAD_ERROR_MESSAGE`] is shown until
    /// [`reset_upload`](Self::reset_upload) or the next successful load.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), InputError> {
        let path = path.as_ref();
        self.error_message = None;
        self.progress_message = Some(UPLOAD_PROGRESS_MESSAGE.to_string());

        match read_upload(path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), bytes = contents.len(), "Loaded name file");
                self.text = contents;
                self.progress_message = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load name file");
                self.progress_message = None;
                self.error_message = Some(UPLOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Clear upload status (retry or cancel).
    pub fn reset_upload(&mut self) {
        self.progress_message = None;
        self.error_message = None;
    }
}

fn read_upload(path: &Path) -> Result<String, InputError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false);

    if !accepted {
        return Err(InputError::FileRead {
            path: path.to_path_buf(),
            reason: format!("expected one of: {}", ACCEPTED_EXTENSIONS.join(", ")),
        });
    }

    fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
