//! gibberish CLI
//!
//! Usage:
//!   gibberish check "alice,bob123,xk7qz" --threshold 0.3 --sort gibberishScore
//!   gibberish check --file names.csv --format csv --export results/
//!   gibberish config --url http://scoring:8080

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod render;

use cli::{Cli, Command};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the table; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Check(args) => commands::check::run(args).await,
        Command::Config(args) => commands::config::run(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}
