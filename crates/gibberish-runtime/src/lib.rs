//! # gibberish-runtime
//!
//! Asynchronous side of the gibberish name detector: talking to the scoring
//! service and tracking the request lifecycle.
//!
//! ## Important
//!
//! The scoring service is an external collaborator. This crate never
//! classifies names; it sends them, and reduces every kind of failure to a
//! single "service unavailable" outcome.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gibberish_core::SubmissionForm;
//! use gibberish_runtime::{ClientConfig, ValidationSessionBuilder};
//!
//! let session = ValidationSessionBuilder::new()
//!     .config(ClientConfig::default().with_env_overrides())
//!     .build()?;
//!
//! let mut form = SubmissionForm::new().with_text("alice,bob123,xk7qz");
//! session.submit_form(&mut form).await?;
//!
//! if let Some(result) = session.state().result {
//!     println!("{} gibberish names", result.gibberish_count());
//! }
//! ```

pub mod config;
pub mod machine;
pub mod service;
pub mod session;

pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, SERVICE_URL_ENV};
pub use machine::{RequestMachine, RequestState, RequestStatus, RequestTicket, Resolution};
pub use service::{ScoringService, ServiceError, SERVICE_UNAVAILABLE_MESSAGE};
pub use session::{SessionError, ValidationSession, ValidationSessionBuilder};

#[cfg(feature = "http")]
pub use service::HttpScoringService;
