//! Column catalogue of the result table.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::{collate, to_fixed};
use crate::types::NameRecord;

/// Decimals shown for scores and the threshold.
pub const SCORE_DECIMALS: usize = 5;

/// Unknown column key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown column '{0}': expected one of name, gibberish, gibberishScore")]
pub struct UnknownColumn(pub String);

/// A result table column, keyed by the wire field it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Name,
    Gibberish,
    GibberishScore,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 3] = [Column::Name, Column::Gibberish, Column::GibberishScore];

    /// Field key, as used in the wire format and export headers.
    pub fn key(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Gibberish => "gibberish",
            Column::GibberishScore => "gibberishScore",
        }
    }

    /// Header label. The score header embeds the threshold the service used.
    pub fn label(self, threshold: f64) -> String {
        match self {
            Column::Name => "Name".to_string(),
            Column::Gibberish => "Valid?".to_string(),
            Column::GibberishScore => format!(
                "Gibberish Score (threshold = {})",
                to_fixed(threshold, SCORE_DECIMALS)
            ),
        }
    }

    /// Ascending order on raw records.
    ///
    /// Names use [`collate`]; plausible names come before gibberish ones;
    /// scores are numeric.
    pub fn compare(self, a: &NameRecord, b: &NameRecord) -> Ordering {
        match self {
            Column::Name => collate(&a.name, &b.name),
            Column::Gibberish => a.gibberish.cmp(&b.gibberish),
            Column::GibberishScore => a.gibberish_score.total_cmp(&b.gibberish_score),
        }
    }

    /// Cell text for a record.
    pub fn display(self, record: &NameRecord) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::Gibberish => validity_label(record.gibberish).to_string(),
            Column::GibberishScore => to_fixed(record.gibberish_score, SCORE_DECIMALS),
        }
    }
}

/// "Yes" when the name is plausible, "No" when it is gibberish.
pub fn validity_label(gibberish: bool) -> &'static str {
    if gibberish {
        "No"
    } else {
        "Yes"
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Column::Name),
            "gibberish" | "valid" => Ok(Column::Gibberish),
            "gibberishScore" | "gibberish_score" | "score" => Ok(Column::GibberishScore),
            other => Err(UnknownColumn(other.to_string())),
        }
    }
}
