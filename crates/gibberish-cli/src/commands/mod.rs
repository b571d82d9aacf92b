//! Subcommand implementations.

pub mod check;
pub mod config;

use anyhow::{Context, Result};
use gibberish_runtime::ClientConfig;

use crate::cli::ServiceArgs;

pub const EXIT_SUCCESS: u8 = 0;

/// Unexpected failure (I/O, configuration, export).
pub const EXIT_ERROR: u8 = 1;

/// Names or threshold were rejected before anything was sent.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// The scoring service could not be used.
pub const EXIT_UNAVAILABLE: u8 = 3;

/// Effective client config: file (or defaults), then environment, then `--url`.
pub fn load_config(args: &ServiceArgs) -> Result<ClientConfig> {
    let config = match &args.config {
        Some(path) => ClientConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    let mut config = config.with_env_overrides();
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }

    config.validate().context("Invalid service configuration")?;
    Ok(config)
}
