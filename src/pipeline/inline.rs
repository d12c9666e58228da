//! Inline conversion: emphasis, code spans and links inside block text.
//!
//! ## Pass Order
//!
//! Five regex passes run in a fixed order, most specific first:
//!
//! 1. `***text***` → `<strong><em>text</em></strong>`
//! 2. `**text**`   → `<strong>text</strong>`
//! 3. `*text*`     → `<em>text</em>`
//! 4. `` `text` `` → `<code>text</code>`
//! 5. `[label](url)` → `<a href="url" …>label</a>`
//!
//! Each pass consumes its own markers, so a later pass never sees the
//! asterisks an earlier pass already turned into tags. Unmatched markers
//! are left as literal text. No HTML escaping is performed.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Convert inline Markdown in `text`, opening links in a new tab.
pub fn convert_inline(text: &str) -> String {
    convert_inline_with(text, true)
}

/// Convert inline Markdown in `text`.
///
/// With `links_new_tab` set, anchors carry `target="_blank"` and
/// `rel="noopener noreferrer"`; otherwise they are plain `href` links.
pub fn convert_inline_with(text: &str, links_new_tab: bool) -> String {
    let s = RE_BOLD_ITALIC.replace_all(text, "<strong><em>${1}</em></strong>");
    let s = RE_BOLD.replace_all(&s, "<strong>${1}</strong>");
    let s = RE_ITALIC.replace_all(&s, "<em>${1}</em>");
    let s = RE_CODE.replace_all(&s, "<code>${1}</code>");
    let link = if links_new_tab {
        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#
    } else {
        r#"<a href="${2}">${1}</a>"#
    };
    RE_LINK.replace_all(&s, link).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passthrough() {
        assert_eq!(convert_inline("no markup here"), "no markup here");
    }

    #[test]
    fn mixed_emphasis_left_to_right() {
        assert_eq!(
            convert_inline("**bold** and *italic* and ***both***"),
            "<strong>bold</strong> and <em>italic</em> and <strong><em>both</em></strong>"
        );
    }

    #[test]
    fn italic_is_shortest_match() {
        assert_eq!(convert_inline("*a* b *c*"), "<em>a</em> b <em>c</em>");
    }

    #[test]
    fn code_span() {
        assert_eq!(
            convert_inline("run `cargo fmt` first"),
            "run <code>cargo fmt</code> first"
        );
    }

    #[test]
    fn link_new_tab() {
        assert_eq!(
            convert_inline("see [docs](https://example.org/a)"),
            r#"see <a href="https://example.org/a" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn link_same_tab() {
        assert_eq!(
            convert_inline_with("[x](/y)", false),
            r#"<a href="/y">x</a>"#
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(convert_inline("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(convert_inline("a `tick"), "a `tick");
        assert_eq!(convert_inline("[label] (url)"), "[label] (url)");
    }

    #[test]
    fn html_is_not_escaped() {
        assert_eq!(convert_inline("<b>x</b> & y"), "<b>x</b> & y");
    }

    #[test]
    fn bold_inside_link_label() {
        assert_eq!(
            convert_inline_with("[**Area**](#a)", false),
            r##"<a href="#a"><strong>Area</strong></a>"##
        );
    }
}
