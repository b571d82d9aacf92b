//! Scoring service abstraction.
//!
//! A [`ScoringService`] takes a [`ValidationRequest`] and yields the
//! service's [`ValidationResult`] untouched. Every failure, whatever its
//! cause, collapses into [`ServiceError::Unavailable`]; implementations log
//! the real cause and discard it.

use async_trait::async_trait;
use gibberish_core::{ValidationRequest, ValidationResult};
use thiserror::Error;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpScoringService;

/// The one message users see for any service failure.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Gibberish detection service unavailable";

/// Errors from a scoring service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Gibberish detection service unavailable")]
    Unavailable,
}

/// Anything that can score a batch of names.
///
/// One call per submission. Implementations impose no locking; callers
/// decide whether to allow overlapping submissions.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Score `request.names`, honoring `request.threshold` when present.
    async fn score_names(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ServiceError>;

    /// Service name for logs.
    fn name(&self) -> &str;
}
