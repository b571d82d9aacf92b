//! Core types shared by the input, table and runtime layers.
//!
//! The wire shapes mirror the scoring service contract:
//! requests are `{"names": [...]}` with the threshold travelling as a query
//! parameter, responses are `{"names": [NameRecord...], "threshold": f64}`.

use serde::{Deserialize, Serialize};

/// Outcome for a single submitted name, as returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// The name exactly as it was scored
    pub name: String,

    /// Whether the service classified the name as gibberish
    pub gibberish: bool,

    /// Confidence score; compared against the threshold by the service
    pub gibberish_score: f64,
}

impl NameRecord {
    /// Create a record (mostly useful for fixtures).
    pub fn new(name: impl Into<String>, gibberish: bool, gibberish_score: f64) -> Self {
        Self {
            name: name.into(),
            gibberish,
            gibberish_score,
        }
    }
}

/// A single submission to the scoring service.
///
/// `names` keeps duplicates and blank entries exactly as extracted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationRequest {
    /// Candidate names in input order
    pub names: Vec<String>,

    /// Optional decision boundary; `None` lets the service apply its default
    pub threshold: Option<f64>,
}

impl ValidationRequest {
    /// Create a request.
    pub fn new(names: Vec<String>, threshold: Option<f64>) -> Self {
        Self { names, threshold }
    }

    /// JSON body sent to the service. The threshold is never part of it.
    pub fn body(&self) -> RequestBody<'_> {
        RequestBody { names: &self.names }
    }
}

/// Serialized request body.
#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub names: &'a [String],
}

/// Scored names together with the threshold the service actually used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Per-name outcomes in service order
    pub names: Vec<NameRecord>,

    /// Echoed threshold
    pub threshold: f64,
}

impl ValidationResult {
    /// Number of names classified as gibberish.
    pub fn gibberish_count(&self) -> usize {
        self.names.iter().filter(|r| r.gibberish).count()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
