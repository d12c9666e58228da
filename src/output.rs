//! Render result types.

use serde::{Deserialize, Serialize};

/// HTML fragment plus counters describing what the scanner emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Newline-joined HTML fragments, no document wrapper.
    pub html: String,
    pub stats: RenderStats,
}

/// Per-render block counters.
///
/// Counts reflect emitted HTML, so a pipe-delimited run that degraded to raw
/// text is counted in `tables_degraded`, never in `tables`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    pub headings: usize,
    /// `<p>` elements, including the lines of a block quote.
    pub paragraphs: usize,
    pub citations: usize,
    pub list_items: usize,
    /// `<ul>` and `<ol>` containers opened.
    pub lists: usize,
    /// `<blockquote>` containers opened.
    pub block_quotes: usize,
    pub tables: usize,
    pub tables_degraded: usize,
    pub horizontal_rules: usize,
    pub severity_badges: usize,
}

impl RenderStats {
    /// Total number of block-level constructs emitted.
    pub fn blocks(&self) -> usize {
        self.headings
            + self.paragraphs
            + self.citations
            + self.list_items
            + self.tables
            + self.tables_degraded
            + self.horizontal_rules
    }
}
