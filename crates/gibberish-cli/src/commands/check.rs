//! `gibberish check`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gibberish_core::input::THRESHOLD_HINT;
use gibberish_core::{
    Column, DisplayRow, InputError, ResultTable, SortDirection, SubmissionForm, ValidationResult,
};
use gibberish_runtime::{RequestStatus, ValidationSessionBuilder};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use super::{load_config, EXIT_INVALID_INPUT, EXIT_SUCCESS, EXIT_UNAVAILABLE};
use crate::cli::{CheckArgs, OutputFormat};
use crate::render::{render_table, sort_summary, RenderOptions};

/// JSON shape of `--format json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    threshold: f64,
    sort_column: Option<Column>,
    sort_direction: SortDirection,
    rows: &'a [DisplayRow],
}

/// Returns the process exit code.
pub async fn run(args: CheckArgs) -> Result<u8> {
    let mut form = SubmissionForm::new().with_threshold(args.threshold.clone());

    if let Some(path) = &args.file {
        if let Err(e) = form.load_file(path) {
            return Ok(input_failure(&e));
        }
    } else if let Some(names) = &args.names {
        form.text = names.clone();
    } else {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read names from stdin")?;
        form.text = text;
    }

    if !form.can_submit() {
        return Ok(input_failure(&InputError::EmptyInput));
    }

    let config = load_config(&args.service)?;
    let session = ValidationSessionBuilder::new()
        .config(config)
        .build()
        .context("Failed to set up scoring client")?;

    if let Err(e) = session.submit_form(&mut form).await {
        return Ok(input_failure(&e));
    }

    let state = session.state();
    let result = match (state.status, state.result) {
        (RequestStatus::Success, Some(result)) => result,
        _ => {
            let message = state
                .error_message
                .unwrap_or_else(|| gibberish_runtime::SERVICE_UNAVAILABLE_MESSAGE.to_string());
            eprintln!("Error: {message}");
            return Ok(EXIT_UNAVAILABLE);
        }
    };

    let mut table = ResultTable::new();
    for column in &args.sort {
        table.set_sort(*column);
    }

    let options = RenderOptions {
        sort_markers: !args.plain,
        ..Default::default()
    };
    print!("{}", render_output(args.format, &table, &result, &options)?);

    if let Some(target) = &args.export {
        let path = export_path(target, Utc::now());
        let csv = table.export(&result)?;
        std::fs::write(&path, csv)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = result.names.len(), "Exported results");
        eprintln!("Exported {} rows to {}", result.names.len(), path.display());
    }

    Ok(EXIT_SUCCESS)
}

fn input_failure(error: &InputError) -> u8 {
    eprintln!("Error: {error}");
    if error.is_threshold_error() {
        eprintln!("Hint: {THRESHOLD_HINT}");
    }
    EXIT_INVALID_INPUT
}

/// Stdout text for the chosen format.
fn render_output(
    format: OutputFormat,
    table: &ResultTable,
    result: &ValidationResult,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = render_table(table, result, options);
            if let Some(summary) = sort_summary(table) {
                out.push_str(&summary);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Csv => Ok(table.export(result)?),
        OutputFormat::Json => {
            let rows = table.project(result);
            let active = table.sort_spec().active();
            let report = JsonReport {
                threshold: result.threshold,
                sort_column: active.map(|(column, _)| column),
                sort_direction: active.map(|(_, direction)| direction).unwrap_or_default(),
                rows: &rows,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// File to export into: `target` itself, or a timestamped file when it is a directory.
fn export_path(target: &Path, now: DateTime<Utc>) -> PathBuf {
    if target.is_dir() {
        target.join(format!("gibberish-results-{}.csv", now.format("%Y%m%dT%H%M%SZ")))
    } else {
        target.to_path_buf()
    }
}
