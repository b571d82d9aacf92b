//! Validation session: submissions driven through the state machine.
//!
//! The session owns the [`RequestMachine`] and the [`ScoringService`]. A
//! submission enters `Loading`, awaits the service (the only suspension
//! point) and then applies the outcome. The lock is never held across the
//! await.

use std::sync::Arc;

use gibberish_core::{InputError, SubmissionForm, ValidationRequest, ValidationResult};
use parking_lot::RwLock;
use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::machine::{RequestMachine, RequestState, RequestStatus, RequestTicket, Resolution};
use crate::service::{ScoringService, ServiceError};

/// Errors building a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Scoring service not configured: {0}")]
    ServiceNotConfigured(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// One user's submission history: current request state plus the service.
#[derive(Clone)]
pub struct ValidationSession {
    service: Arc<dyn ScoringService>,
    machine: Arc<RwLock<RequestMachine>>,
}

impl std::fmt::Debug for ValidationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationSession")
            .field("service", &self.service.name())
            .field("status", &self.status())
            .finish()
    }
}

impl ValidationSession {
    /// Create a session around a scoring service.
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self {
            service,
            machine: Arc::new(RwLock::new(RequestMachine::new())),
        }
    }

    /// Snapshot of the current request state.
    pub fn state(&self) -> RequestState {
        self.machine.read().state().clone()
    }

    pub fn status(&self) -> RequestStatus {
        self.machine.read().status()
    }

    /// True while a submission is outstanding. Callers use this to disable
    /// re-submission; the session itself does not refuse overlapping calls.
    pub fn is_loading(&self) -> bool {
        self.machine.read().state().is_loading()
    }

    /// Send an already validated request and apply its outcome.
    ///
    /// Dropping the returned future before it completes resolves the
    /// submission as [`ServiceError::Unavailable`], so the session never
    /// stays `Loading`.
    pub async fn submit(&self, request: ValidationRequest) -> Resolution {
        let pending = InFlight::begin(self.machine.clone());
        tracing::info!(
            service = self.service.name(),
            ticket = pending.sequence(),
            names = request.names.len(),
            "Submitting names for scoring"
        );

        let outcome = self.service.score_names(&request).await;

        pending.resolve(outcome)
    }

    /// Validate the form and submit it.
    ///
    /// Input errors return before anything is sent and leave the request
    /// state untouched.
    pub async fn submit_form(&self, form: &mut SubmissionForm) -> Result<Resolution, InputError> {
        let request = form.submit()?;
        Ok(self.submit(request).await)
    }
}

/// A begun submission that has not resolved yet.
struct InFlight {
    machine: Arc<RwLock<RequestMachine>>,
    ticket: Option<RequestTicket>,
}

impl InFlight {
    fn begin(machine: Arc<RwLock<RequestMachine>>) -> Self {
        let ticket = machine.write().begin();
        Self {
            machine,
            ticket: Some(ticket),
        }
    }

    fn sequence(&self) -> u64 {
        self.ticket.map(|t| t.sequence()).unwrap_or_default()
    }

    fn resolve(mut self, outcome: Result<ValidationResult, ServiceError>) -> Resolution {
        match self.ticket.take() {
            Some(ticket) => self.machine.write().resolve(ticket, outcome),
            None => Resolution::Stale,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            tracing::warn!(ticket = ticket.sequence(), "Submission cancelled before it resolved");
            self.machine
                .write()
                .resolve(ticket, Err(ServiceError::Unavailable));
        }
    }
}

/// Builder for [`ValidationSession`].
#[derive(Default)]
pub struct ValidationSessionBuilder {
    service: Option<Arc<dyn ScoringService>>,
    config: Option<ClientConfig>,
}

impl ValidationSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific scoring service.
    pub fn service(mut self, service: Arc<dyn ScoringService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Configure the HTTP service (used when no service is set).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the session.
    pub fn build(self) -> Result<ValidationSession, SessionError> {
        if let Some(service) = self.service {
            return Ok(ValidationSession::new(service));
        }
        Self::http_service(self.config.unwrap_or_default()).map(ValidationSession::new)
    }

    #[cfg(feature = "http")]
    fn http_service(config: ClientConfig) -> Result<Arc<dyn ScoringService>, SessionError> {
        let service = crate::service::HttpScoringService::new(&config)?;
        Ok(Arc::new(service))
    }

    #[cfg(not(feature = "http"))]
    fn http_service(_config: ClientConfig) -> Result<Arc<dyn ScoringService>, SessionError> {
        Err(SessionError::ServiceNotConfigured(
            "HTTP scoring requires the 'http' feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gibberish_core::NameRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // Mock service for testing
    struct MockService {
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockService {
        fn ok() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ScoringService for MockService {
        async fn score_names(
            &self,
            request: &ValidationRequest,
        ) -> Result<ValidationResult, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ServiceError::Unavailable);
            }
            Ok(ValidationResult {
                names: request
                    .names
                    .iter()
                    .map(|n| NameRecord::new(n.clone(), n.len() > 5, n.len() as f64 / 10.0))
                    .collect(),
                threshold: request.threshold.unwrap_or(0.5),
            })
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    /// Answers after a delay taken from the first name, in milliseconds.
    struct DelayedService;

    #[async_trait]
    impl ScoringService for DelayedService {
        async fn score_names(
            &self,
            request: &ValidationRequest,
        ) -> Result<ValidationResult, ServiceError> {
            let delay: u64 = request.names[0].parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(ValidationResult {
                names: vec![NameRecord::new(request.names[0].clone(), false, 0.0)],
                threshold: 0.5,
            })
        }

        fn name(&self) -> &str {
            "delayed"
        }
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let session = ValidationSession::new(Arc::new(MockService::ok()));
        assert_eq!(session.status(), RequestStatus::Idle);

        let request = ValidationRequest::new(vec!["alice".to_string(), "xk7qzqq".to_string()], None);
        let resolution = session.submit(request).await;

        assert_eq!(resolution, Resolution::Applied(RequestStatus::Success));
        let state = session.state();
        let result = state.result.unwrap();
        assert_eq!(result.threshold, 0.5);
        assert_eq!(result.names[1].name, "xk7qzqq");
        assert!(result.names[1].gibberish);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_failed_submission_sets_fixed_message() {
        let session = ValidationSession::new(Arc::new(MockService::failing()));
        let request = ValidationRequest::new(vec!["alice".to_string()], Some(0.2));

        let resolution = session.submit(request).await;

        assert_eq!(resolution, Resolution::Applied(RequestStatus::Failure));
        let state = session.state();
        assert_eq!(
            state.error_message.as_deref(),
            Some("Gibberish detection service unavailable")
        );
        assert_eq!(state.result, None);
    }

    #[tokio::test]
    async fn test_invalid_form_issues_no_request() {
        let service = Arc::new(MockService::ok());
        let session = ValidationSession::new(service.clone());
        let mut form = SubmissionForm::new().with_text("alice").with_threshold("1");

        let result = session.submit_form(&mut form).await;

        assert!(matches!(result, Err(InputError::ThresholdOutOfRange(_))));
        assert!(form.threshold_has_error());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.status(), RequestStatus::Idle);
    }

    #[tokio::test]
    async fn test_form_submission() {
        let session = ValidationSession::new(Arc::new(MockService::ok()));
        let mut form = SubmissionForm::new()
            .with_text("alice,bob123,xk7qz")
            .with_threshold("0.3");

        let resolution = session.submit_form(&mut form).await.unwrap();

        assert_eq!(resolution, Resolution::Applied(RequestStatus::Success));
        let result = session.state().result.unwrap();
        assert_eq!(result.threshold, 0.3);
        assert_eq!(result.names.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_keep_latest() {
        let session = ValidationSession::new(Arc::new(DelayedService));
        let slow = ValidationRequest::new(vec!["50".to_string()], None);
        let fast = ValidationRequest::new(vec!["10".to_string()], None);

        let first = session.clone();
        let slow_task = tokio::spawn(async move { first.submit(slow).await });
        while !session.is_loading() {
            tokio::task::yield_now().await;
        }
        let fast_resolution = session.submit(fast).await;
        let slow_resolution = slow_task.await.unwrap();

        assert_eq!(fast_resolution, Resolution::Applied(RequestStatus::Success));
        assert_eq!(slow_resolution, Resolution::Stale);
        assert_eq!(session.state().result.unwrap().names[0].name, "10");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_does_not_stay_loading() {
        let session = ValidationSession::new(Arc::new(DelayedService));
        let request = ValidationRequest::new(vec!["60000".to_string()], None);

        let first = session.clone();
        let task = tokio::spawn(async move { first.submit(request).await });
        while !session.is_loading() {
            tokio::task::yield_now().await;
        }
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        let state = session.state();
        assert_eq!(state.status, RequestStatus::Failure);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Gibberish detection service unavailable")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_older_submission_leaves_newer_one_alone() {
        let session = ValidationSession::new(Arc::new(DelayedService));
        let slow = ValidationRequest::new(vec!["60000".to_string()], None);

        let first = session.clone();
        let task = tokio::spawn(async move { first.submit(slow).await });
        while !session.is_loading() {
            tokio::task::yield_now().await;
        }

        let second = session.clone();
        let fast = tokio::spawn(async move {
            second
                .submit(ValidationRequest::new(vec!["10".to_string()], None))
                .await
        });
        tokio::task::yield_now().await;
        task.abort();
        let _ = task.await;

        assert_eq!(
            fast.await.unwrap(),
            Resolution::Applied(RequestStatus::Success)
        );
        assert_eq!(session.state().result.unwrap().names[0].name, "10");
    }

    #[test]
    fn test_builder_prefers_explicit_service() {
        let session = ValidationSessionBuilder::new()
            .service(Arc::new(MockService::ok()))
            .config(ClientConfig::new("not-a-url"))
            .build()
            .unwrap();
        assert_eq!(session.status(), RequestStatus::Idle);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_rejects_bad_config() {
        let result = ValidationSessionBuilder::new()
            .config(ClientConfig::new("not-a-url"))
            .build();
        assert!(matches!(result, Err(SessionError::Config(_))));
    }
}
