//! Preprocessing: deterministic cleanup of model-generated Markdown.
//!
//! Report Markdown comes back from a hosted model, and models occasionally
//! wrap the whole answer in a ` ```markdown ` fence, emit `\r\n` endings or
//! sprinkle zero-width characters through headings. Left alone, a fenced
//! answer would render as two literal fence paragraphs around the report.
//!
//! Only runs when [`crate::RenderConfig::clean_input`] is set.
//!
//! ## Rule Order
//!
//! Strip the outer fence first (its regex expects `\n` after the opening
//! fence, but tolerates `\r\n`), then normalise line endings, then remove
//! invisible characters.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Apply all preprocessing rules in order.
pub fn clean_input(input: &str) -> String {
    let s = strip_outer_fence(input);
    let s = normalise_line_endings(&s);
    remove_invisible_chars(&s)
}

// ── Rule 1: Strip outer markdown fence ───────────────────────────────────────

static RE_OUTER_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:markdown|md)?\r?\n(.*?)\r?\n```\s*$").unwrap());

fn strip_outer_fence(input: &str) -> Cow<'_, str> {
    match RE_OUTER_FENCE.captures(input.trim()) {
        Some(caps) => Cow::Owned(caps[1].to_string()),
        None => Cow::Borrowed(input),
    }
}

// ── Rule 2: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 3: Remove invisible Unicode characters ─────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
        ],
        "",
    )
}
