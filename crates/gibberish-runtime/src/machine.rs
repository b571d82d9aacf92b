//! Request lifecycle state machine.
//!
//! ```text
//! Idle | Success | Failure | Loading --begin--> Loading
//! Loading --resolve(Ok)--> Success   (result replaced, error cleared)
//! Loading --resolve(Err)--> Failure  (error set, previous result kept)
//! ```
//!
//! Every `begin` issues a ticket. Only the most recently issued ticket can
//! resolve; an older one arriving late is discarded, so overlapping
//! submissions cannot overwrite a newer answer with an older one.

use chrono::{DateTime, Utc};
use gibberish_core::ValidationResult;
use serde::Serialize;

use crate::service::ServiceError;

/// Lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Snapshot of the most recent request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestState {
    pub status: RequestStatus,

    /// Last successful result; survives later loads and failures
    pub result: Option<ValidationResult>,

    /// Message of the last failure; cleared by the next success
    pub error_message: Option<String>,

    /// When the last resolution was applied
    pub resolved_at: Option<DateTime<Utc>>,
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }
}

/// Handle for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What happened to a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Applied; the machine is now in this status
    Applied(RequestStatus),

    /// A newer submission was issued, or this one already resolved
    Stale,
}

/// The lifecycle state machine.
#[derive(Debug, Default)]
pub struct RequestMachine {
    state: RequestState,
    issued: u64,
    pending: Option<RequestTicket>,
}

impl RequestMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn status(&self) -> RequestStatus {
        self.state.status
    }

    /// Enter `Loading` for a new submission.
    ///
    /// Allowed from any state. The previous result and error stay in place
    /// until this submission resolves.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        let ticket = RequestTicket(self.issued);

        if let Some(superseded) = self.pending.replace(ticket) {
            tracing::debug!(
                superseded = superseded.sequence(),
                ticket = ticket.sequence(),
                "Submission issued while another was in flight"
            );
        }

        tracing::debug!(from = ?self.state.status, ticket = ticket.sequence(), "Request loading");
        self.state.status = RequestStatus::Loading;
        ticket
    }

    /// Apply the outcome of the submission identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ValidationResult, ServiceError>,
    ) -> Resolution {
        if self.pending != Some(ticket) {
            tracing::debug!(
                ticket = ticket.sequence(),
                latest = self.issued,
                "Discarding stale resolution"
            );
            return Resolution::Stale;
        }
        self.pending = None;
        self.state.resolved_at = Some(Utc::now());

        match outcome {
            Ok(result) => {
                tracing::info!(
                    ticket = ticket.sequence(),
                    names = result.names.len(),
                    "Request succeeded"
                );
                self.state.status = RequestStatus::Success;
                self.state.result = Some(result);
                self.state.error_message = None;
            }
            Err(e) => {
                tracing::warn!(ticket = ticket.sequence(), error = %e, "Request failed");
                self.state.status = RequestStatus::Failure;
                self.state.error_message = Some(e.to_string());
            }
        }

        Resolution::Applied(self.state.status)
    }
}
