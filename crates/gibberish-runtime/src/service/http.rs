//! HTTP scoring service client.
//!
//! `POST {base_url}/gibberishScore[?threshold=<f64>]` with a JSON body of
//! `{"names": [...]}`. Only a 200 response with a parseable body counts as
//! success.

use async_trait::async_trait;
use gibberish_core::{ValidationRequest, ValidationResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::{ScoringService, ServiceError};
use crate::config::{ClientConfig, ConfigError};

/// Scoring service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScoringService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpScoringService {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ConfigError::Invalid(format!("HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint(),
            client,
        })
    }

    /// Full endpoint URL, without query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn score_names(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ServiceError> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&request.body());

        if let Some(threshold) = request.threshold {
            builder = builder.query(&[("threshold", threshold)]);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            names = request.names.len(),
            threshold = ?request.threshold,
            "Sending scoring request"
        );

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, timeout = e.is_timeout(), "Scoring request failed");
            ServiceError::Unavailable
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = %status, "Scoring service returned non-200");
            return Err(ServiceError::Unavailable);
        }

        let result = response.json::<ValidationResult>().await.map_err(|e| {
            tracing::warn!(error = %e, "Scoring response body could not be parsed");
            ServiceError::Unavailable
        })?;

        tracing::info!(
            names = result.names.len(),
            gibberish = result.gibberish_count(),
            threshold = result.threshold,
            "Scoring request succeeded"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        "http"
    }
}
