//! CSV export of the result table.
//!
//! Produces text only; writing it somewhere is the caller's job.

use thiserror::Error;

use crate::table::{ColumnLabel, DisplayRow};

/// Errors while rendering export text.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render rows as comma-separated text.
///
/// One header line of labels, then one line per row with fields picked by
/// each column's key, in the order given. Fields containing commas, quotes
/// or line breaks are quoted. Lines end with `\n`.
pub fn to_tabular_text(rows: &[DisplayRow], columns: &[ColumnLabel]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.label.as_str()))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| row.get(c.key)))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
