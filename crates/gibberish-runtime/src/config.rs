//! Client configuration.
//!
//! ## Configuration Format
//! ```yaml
//! base_url: "http://localhost:8080"   # service root, path is appended
//! timeout: "30s"                      # humantime duration
//! user_agent: "gibberish/0.1.0"       # optional
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const SERVICE_URL_ENV: &str = "GIBBERISH_SERVICE_URL";

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the scoring endpoint under the service root.
pub const SCORE_PATH: &str = "/gibberishScore";

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How to reach the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Whole-request timeout
    #[serde(with = "humantime_duration")]
    pub timeout: Duration,

    /// User-Agent header; the crate default when unset
    pub user_agent: Option<String>,
}

mod humantime_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse from YAML and validate.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a YAML file and validate.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Apply `GIBBERISH_SERVICE_URL` if set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!(base_url = %url, "Using service URL from environment");
                self.base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }

    /// Full URL of the scoring endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SCORE_PATH)
    }

    /// User-Agent to send.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("gibberish/{}", env!("CARGO_PKG_VERSION")))
    }
}
