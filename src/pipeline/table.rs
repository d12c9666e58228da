//! Table conversion: one contiguous run of pipe-delimited lines → HTML table.
//!
//! A run is only converted when at least two non-separator rows remain
//! (a header and one body row). Anything shorter is returned verbatim, the
//! raw lines joined with `\n`. Ragged rows are emitted as they are.
//!
//! Body cells whose trimmed text is `high`, `medium` or `low` (any case)
//! are wrapped in a severity badge span. Cell text is otherwise copied
//! through untouched; inline Markdown is not converted inside tables.

use crate::config::RenderConfig;

/// Result of converting one table run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The run became an HTML table.
    Table { html: String, badges: usize },
    /// Fewer than two content rows; the raw run is passed through.
    Raw(String),
}

impl TableOutcome {
    pub fn html(&self) -> &str {
        match self {
            TableOutcome::Table { html, .. } => html,
            TableOutcome::Raw(raw) => raw,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            TableOutcome::Table { html, .. } => html,
            TableOutcome::Raw(raw) => raw,
        }
    }
}

/// Severity level recognised in a table body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Case-insensitive exact match on the trimmed cell text.
    pub fn parse(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.eq_ignore_ascii_case("high") {
            Some(Severity::High)
        } else if cell.eq_ignore_ascii_case("medium") {
            Some(Severity::Medium)
        } else if cell.eq_ignore_ascii_case("low") {
            Some(Severity::Low)
        } else {
            None
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
        }
    }
}

/// Convert a run of table lines with the default configuration.
pub fn convert_table(lines: &[&str]) -> String {
    convert_table_with(lines, &RenderConfig::default()).into_html()
}

/// Convert a run of table lines.
pub fn convert_table_with(lines: &[&str], config: &RenderConfig) -> TableOutcome {
    let rows: Vec<Vec<&str>> = lines
        .iter()
        .filter(|line| !is_separator_row(line))
        .map(|line| split_cells(line))
        .collect();

    if rows.len() < 2 {
        return TableOutcome::Raw(lines.join("\n"));
    }

    let mut badges = 0;
    let mut html = format!(
        "<div class=\"{}\"><table><thead><tr>",
        config.table_wrapper_class
    );
    for cell in &rows[0] {
        html.push_str("<th>");
        html.push_str(cell);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in &rows[1..] {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            match Severity::parse(cell).filter(|_| config.severity_badges) {
                Some(level) => {
                    badges += 1;
                    html.push_str("<span class=\"severity-badge ");
                    html.push_str(level.class());
                    html.push_str("\">");
                    html.push_str(cell);
                    html.push_str("</span>");
                }
                None => html.push_str(cell),
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");

    TableOutcome::Table { html, badges }
}

/// Trim whitespace and byte-order marks from both ends of a line.
///
/// A file saved with a BOM starts its first line with U+FEFF, which
/// `str::trim` keeps.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// True when the line both starts and ends with `|` after trimming.
pub fn is_table_line(line: &str) -> bool {
    let trimmed = trim_line(line);
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// A separator row contains only `|`, `-`, `:` and whitespace.
fn is_separator_row(line: &str) -> bool {
    let trimmed = trim_line(line);
    trimmed.starts_with('|')
        && trimmed
            .chars()
            .all(|c| c == '|' || c == '-' || c == ':' || c.is_whitespace())
}

/// Split a row on `|` and trim each cell. Only the empty pieces produced by
/// the row's own outer pipes are dropped; interior empty cells survive.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = trim_line(line).split('|').map(str::trim).collect();
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    cells
}
