//! Result table projection.
//!
//! The table never caches sorted rows: every call to
//! [`ResultTable::project`] derives them from the result and the current
//! [`SortSpec`].

use serde::Serialize;

use super::{Column, SortDirection, SortSpec};
use crate::export::{to_tabular_text, ExportError};
use crate::types::{NameRecord, ValidationResult};

/// One display-ready row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub name: String,

    /// "Yes" (plausible) or "No" (gibberish)
    pub gibberish: String,

    /// Score with five decimals
    pub gibberish_score: String,
}

impl DisplayRow {
    pub fn from_record(record: &NameRecord) -> Self {
        Self {
            name: Column::Name.display(record),
            gibberish: Column::Gibberish.display(record),
            gibberish_score: Column::GibberishScore.display(record),
        }
    }

    /// Cell text for `column`.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Gibberish => &self.gibberish,
            Column::GibberishScore => &self.gibberish_score,
        }
    }
}

/// Header label paired with the column it reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabel {
    pub label: String,
    pub key: Column,
}

/// Sortable view over a [`ValidationResult`].
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    sort: SortSpec,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing sort state.
    pub fn with_sort(sort: SortSpec) -> Self {
        Self { sort }
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn direction(&self, column: Column) -> SortDirection {
        self.sort.direction(column)
    }

    /// Header click: advance `column` one step, reset every other column.
    pub fn set_sort(&mut self, column: Column) -> SortDirection {
        let direction = self.sort.cycle(column);
        tracing::debug!(column = %column, direction = ?direction, "Sort changed");
        direction
    }

    /// Records in display order.
    ///
    /// Ascending is a stable sort over service order. Descending reverses
    /// the whole ascending sequence, so tied records also swap places.
    pub fn sorted_records<'a>(&self, result: &'a ValidationResult) -> Vec<&'a NameRecord> {
        let mut records: Vec<&NameRecord> = result.names.iter().collect();

        if let Some((column, direction)) = self.sort.active() {
            records.sort_by(|a, b| column.compare(a, b));
            if direction == SortDirection::Descending {
                records.reverse();
            }
        }

        records
    }

    /// Display rows in current order.
    pub fn project(&self, result: &ValidationResult) -> Vec<DisplayRow> {
        self.sorted_records(result)
            .into_iter()
            .map(DisplayRow::from_record)
            .collect()
    }

    /// Header labels for a result with the given threshold, in display order.
    pub fn column_labels(threshold: f64) -> Vec<ColumnLabel> {
        Column::ALL
            .iter()
            .map(|&key| ColumnLabel {
                label: key.label(threshold),
                key,
            })
            .collect()
    }

    /// CSV text of exactly what the table currently shows.
    pub fn export(&self, result: &ValidationResult) -> Result<String, ExportError> {
        to_tabular_text(
            &self.project(result),
            &Self::column_labels(result.threshold),
        )
    }
}
