//! Result table presentation.
//!
//! A pure function of `(ValidationResult, SortSpec)` to display rows, plus
//! the tri-state header click that edits the [`SortSpec`].

mod column;
mod format;
mod presenter;
mod sort;

pub use column::{validity_label, Column, UnknownColumn, SCORE_DECIMALS};
pub use format::{collate, to_fixed};
pub use presenter::{ColumnLabel, DisplayRow, ResultTable};
pub use sort::{SortDirection, SortSpec};
