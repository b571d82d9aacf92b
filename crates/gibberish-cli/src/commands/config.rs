//! `gibberish config`

use anyhow::{Context, Result};

use super::{load_config, EXIT_SUCCESS};
use crate::cli::ServiceArgs;

pub fn run(args: &ServiceArgs) -> Result<u8> {
    let config = load_config(args)?;
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;

    print!("{yaml}");
    println!("# endpoint: {}", config.endpoint());
    Ok(EXIT_SUCCESS)
}
