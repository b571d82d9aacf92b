//! Plain-text rendering of the result table.

use gibberish_core::{Column, ColumnLabel, ResultTable, SortDirection, ValidationResult};

/// Title printed above the table.
pub const RESULTS_TITLE: &str = "Gibberish Detection Results";

/// Presentation settings, passed in rather than read from global state.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Mark the sorted column header with ▲ / ▼
    pub sort_markers: bool,

    /// Separator between columns
    pub gap: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sort_markers: true,
            gap: 2,
        }
    }
}

fn header_text(label: &ColumnLabel, direction: SortDirection, options: &RenderOptions) -> String {
    if !options.sort_markers {
        return label.label.clone();
    }
    match direction {
        SortDirection::Unsorted => label.label.clone(),
        SortDirection::Ascending => format!("{} ▲", label.label),
        SortDirection::Descending => format!("{} ▼", label.label),
    }
}

/// Render the table as aligned text, in the table's current order.
pub fn render_table(table: &ResultTable, result: &ValidationResult, options: &RenderOptions) -> String {
    let labels = ResultTable::column_labels(result.threshold);
    let rows = table.project(result);

    let headers: Vec<String> = labels
        .iter()
        .map(|label| header_text(label, table.direction(label.key), options))
        .collect();

    // Names may contain line breaks; keep every row on one line
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            labels
                .iter()
                .map(|label| row.get(label.key).replace(['\r', '\n'], " "))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(RESULTS_TITLE);
    out.push('\n');
    write_line(&mut out, &headers, &widths, options.gap);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &rule, &widths, options.gap);
    for row in &cells {
        write_line(&mut out, row, &widths, options.gap);
    }

    out.push_str(&format!(
        "\n{} names, {} gibberish\n",
        result.names.len(),
        result.gibberish_count()
    ));
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize], gap: usize) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(&" ".repeat(gap));
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Status line for the active sort, if any.
pub fn sort_summary(table: &ResultTable) -> Option<String> {
    table.sort_spec().active().map(|(column, direction)| {
        let direction = match direction {
            SortDirection::Descending => "descending",
            _ => "ascending",
        };
        format!("sorted by {} ({direction})", column_name(column))
    })
}

fn column_name(column: Column) -> &'static str {
    match column {
        Column::Name => "name",
        Column::Gibberish => "validity",
        Column::GibberishScore => "score",
    }
}
