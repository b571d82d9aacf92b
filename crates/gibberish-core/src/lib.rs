//! # gibberish-core
//!
//! Client-side core of the gibberish name detector.
//!
//! This crate turns user input into a scoring request and turns the scoring
//! service's answer into a sortable, exportable table. It never classifies
//! names itself and never performs network I/O.
//!
//! ## Pipeline
//!
//! 1. [`input::extract_names`] splits comma-separated text into names
//! 2. [`input::parse_threshold`] checks the optional threshold
//! 3. a runtime sends the [`ValidationRequest`] and yields a [`ValidationResult`]
//! 4. [`table::ResultTable`] projects it into [`table::DisplayRow`]s
//! 5. [`export::to_tabular_text`] renders the projection as CSV
//!
//! ## Example
//!
//! ```rust
//! use gibberish_core::{Column, NameRecord, ResultTable, SubmissionForm, ValidationResult};
//!
//! let mut form = SubmissionForm::new().with_text("alice,bob123,xk7qz");
//! let request = form.submit().unwrap();
//! assert_eq!(request.threshold, None);
//!
//! let result = ValidationResult {
//!     names: vec![
//!         NameRecord::new("alice", false, 0.01),
//!         NameRecord::new("bob123", true, 0.87),
//!         NameRecord::new("xk7qz", true, 0.95),
//!     ],
//!     threshold: 0.5,
//! };
//!
//! let mut table = ResultTable::new();
//! table.set_sort(Column::Gibberish);
//! let rows = table.project(&result);
//! assert_eq!(rows[0].name, "alice");
//! ```

pub mod export;
pub mod form;
pub mod input;
pub mod table;
pub mod types;

// Re-export main types at crate root
pub use export::{to_tabular_text, ExportError};
pub use form::SubmissionForm;
pub use input::{extract_names, parse_threshold, InputError};
pub use table::{
    Column, ColumnLabel, DisplayRow, ResultTable, SortDirection, SortSpec, UnknownColumn,
};
pub use types::{NameRecord, ValidationRequest, ValidationResult};

/// Build a request straight from raw text and a raw threshold field.
///
/// Shorthand for a one-shot [`SubmissionForm::submit`].
pub fn build_request(text: &str, threshold: &str) -> Result<ValidationRequest, InputError> {
    SubmissionForm::new()
        .with_text(text)
        .with_threshold(threshold)
        .submit()
}
