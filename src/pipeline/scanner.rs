//! Block scanner: one top-to-bottom pass over the document's lines.
//!
//! Each line is classified by its trimmed leading token, in precedence
//! order (first match wins):
//!
//! | # | Block            | Shape                                   |
//! |---|------------------|-----------------------------------------|
//! | 1 | blank            | whitespace only                         |
//! | 2 | horizontal rule  | `---`, `----`, …                        |
//! | 3 | table run        | starts and ends with `\|`               |
//! | 4 | heading          | `#`–`####`, whitespace, text            |
//! | 5 | block quote line | `>` prefix                              |
//! | 6 | unordered item   | `-`, `*` or `+`, whitespace, text       |
//! | 7 | ordered item     | digits, `.`, whitespace, text           |
//! | 8 | citation         | whole line `*…*`, no inner asterisks    |
//! | 9 | paragraph        | anything else                           |
//!
//! Classification always happens before inline conversion, so an
//! emphasised dash inside a paragraph is never mistaken for a list marker.
//!
//! Open lists and block quotes are tracked by [`ContainerState`]; every
//! block passes through [`ContainerState::transition`] before its own HTML
//! is emitted, and [`ContainerState::close_all`] runs at end of input.

use crate::config::RenderConfig;
use crate::output::{RenderOutput, RenderStats};
use crate::pipeline::inline::convert_inline_with;
use crate::pipeline::table::{convert_table_with, is_table_line, trim_line, TableOutcome};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^---+$").unwrap());
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,4})\s+(.+)$").unwrap());
static RE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s*(.*)$").unwrap());
static RE_UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());
static RE_ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s+(.+)$").unwrap());
static RE_CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*([^*]+)\*$").unwrap());

// ── Blocks ───────────────────────────────────────────────────────────────────

/// One classified block. Text slices borrow from the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Blank,
    Rule,
    /// Raw lines of a table run, untrimmed.
    Table(Vec<&'a str>),
    Heading { level: u8, text: &'a str },
    Quote(&'a str),
    ListItem { ordered: bool, text: &'a str },
    Citation(&'a str),
    Paragraph(&'a str),
}

/// Discriminant of [`Block`], the input to [`ContainerState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Blank,
    Rule,
    Table,
    Heading,
    Quote,
    UnorderedItem,
    OrderedItem,
    Citation,
    Paragraph,
}

impl Block<'_> {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Blank => BlockKind::Blank,
            Block::Rule => BlockKind::Rule,
            Block::Table(_) => BlockKind::Table,
            Block::Heading { .. } => BlockKind::Heading,
            Block::Quote(_) => BlockKind::Quote,
            Block::ListItem { ordered: false, .. } => BlockKind::UnorderedItem,
            Block::ListItem { ordered: true, .. } => BlockKind::OrderedItem,
            Block::Citation(_) => BlockKind::Citation,
            Block::Paragraph(_) => BlockKind::Paragraph,
        }
    }
}

/// Classify a single line. A table line yields a one-line [`Block::Table`];
/// the scanner extends it with the rest of the run.
pub fn classify(line: &str) -> Block<'_> {
    let trimmed = trim_line(line);

    if trimmed.is_empty() {
        return Block::Blank;
    }
    if RE_RULE.is_match(trimmed) {
        return Block::Rule;
    }
    if is_table_line(trimmed) {
        return Block::Table(vec![line]);
    }
    if let Some(caps) = RE_HEADING.captures(trimmed) {
        let level = caps.get(1).map_or(1, |m| m.len()) as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        return Block::Heading { level, text };
    }
    if let Some(caps) = RE_QUOTE.captures(trimmed) {
        return Block::Quote(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = RE_UNORDERED.captures(trimmed) {
        let text = caps.get(1).map_or("", |m| m.as_str());
        return Block::ListItem { ordered: false, text };
    }
    if let Some(caps) = RE_ORDERED.captures(trimmed) {
        let text = caps.get(1).map_or("", |m| m.as_str());
        return Block::ListItem { ordered: true, text };
    }
    if let Some(caps) = RE_CITATION.captures(trimmed) {
        return Block::Citation(caps.get(1).map_or("", |m| m.as_str()));
    }
    Block::Paragraph(trimmed)
}

// ── Container state machine ──────────────────────────────────────────────────

/// Which list, if any, is currently open. Lists never nest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    None,
    UnorderedOpen,
    OrderedOpen,
}

/// Opening or closing tag of a container, emitted on a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerTag {
    OpenUnordered,
    CloseUnordered,
    OpenOrdered,
    CloseOrdered,
    OpenQuote,
    CloseQuote,
}

impl ContainerTag {
    pub fn html(self) -> &'static str {
        match self {
            ContainerTag::OpenUnordered => "<ul>",
            ContainerTag::CloseUnordered => "</ul>",
            ContainerTag::OpenOrdered => "<ol>",
            ContainerTag::CloseOrdered => "</ol>",
            ContainerTag::OpenQuote => "<blockquote>",
            ContainerTag::CloseQuote => "</blockquote>",
        }
    }
}

/// Open-container state: a list state plus an orthogonal quote flag.
///
/// Lists and quotes never interleave, so at most one of the two is open
/// between transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerState {
    pub list: ListState,
    pub quote_open: bool,
}

impl ContainerState {
    /// Move to the state required by `next`, returning the container tags to
    /// emit (in order) before the block's own HTML.
    ///
    /// | next            | list action                      | quote action   |
    /// |-----------------|----------------------------------|----------------|
    /// | quote line      | close                            | open if closed |
    /// | unordered item  | close `<ol>`, open `<ul>` if none | close          |
    /// | ordered item    | close `<ul>`, open `<ol>` if none | close          |
    /// | anything else   | close                            | close          |
    pub fn transition(&mut self, next: BlockKind) -> Vec<ContainerTag> {
        let mut tags = Vec::new();
        match next {
            BlockKind::Quote => {
                self.close_list(&mut tags);
                if !self.quote_open {
                    self.quote_open = true;
                    tags.push(ContainerTag::OpenQuote);
                }
            }
            BlockKind::UnorderedItem => {
                self.close_quote(&mut tags);
                match self.list {
                    ListState::UnorderedOpen => {}
                    ListState::OrderedOpen => {
                        tags.push(ContainerTag::CloseOrdered);
                        tags.push(ContainerTag::OpenUnordered);
                    }
                    ListState::None => tags.push(ContainerTag::OpenUnordered),
                }
                self.list = ListState::UnorderedOpen;
            }
            BlockKind::OrderedItem => {
                self.close_quote(&mut tags);
                match self.list {
                    ListState::OrderedOpen => {}
                    ListState::UnorderedOpen => {
                        tags.push(ContainerTag::CloseUnordered);
                        tags.push(ContainerTag::OpenOrdered);
                    }
                    ListState::None => tags.push(ContainerTag::OpenOrdered),
                }
                self.list = ListState::OrderedOpen;
            }
            BlockKind::Blank
            | BlockKind::Rule
            | BlockKind::Table
            | BlockKind::Heading
            | BlockKind::Citation
            | BlockKind::Paragraph => return self.close_all(),
        }
        tags
    }

    /// Close every open container; used at end of input.
    pub fn close_all(&mut self) -> Vec<ContainerTag> {
        let mut tags = Vec::new();
        self.close_list(&mut tags);
        self.close_quote(&mut tags);
        tags
    }

    fn close_list(&mut self, tags: &mut Vec<ContainerTag>) {
        match self.list {
            ListState::None => {}
            ListState::UnorderedOpen => tags.push(ContainerTag::CloseUnordered),
            ListState::OrderedOpen => tags.push(ContainerTag::CloseOrdered),
        }
        self.list = ListState::None;
    }

    fn close_quote(&mut self, tags: &mut Vec<ContainerTag>) {
        if self.quote_open {
            self.quote_open = false;
            tags.push(ContainerTag::CloseQuote);
        }
    }
}

// ── Scanner ──────────────────────────────────────────────────────────────────

/// Scan `markdown` and render it to an HTML fragment.
pub fn scan(markdown: &str, config: &RenderConfig) -> RenderOutput {
    if markdown.is_empty() {
        return RenderOutput::default();
    }

    let mut state = ContainerState::default();
    let mut stats = RenderStats::default();
    let mut parts: Vec<String> = Vec::new();
    let mut lines = markdown.split('\n').peekable();

    while let Some(line) = lines.next() {
        let mut block = classify(line);
        if let Block::Table(rows) = &mut block {
            while let Some(next) = lines.next_if(|l| is_table_line(l)) {
                rows.push(next);
            }
        }

        for tag in state.transition(block.kind()) {
            push_tag(&mut parts, &mut stats, tag);
        }
        emit(block, config, &mut parts, &mut stats);
    }

    for tag in state.close_all() {
        push_tag(&mut parts, &mut stats, tag);
    }

    debug!(
        "Rendered {} blocks ({} tables, {} degraded, {} badges)",
        stats.blocks(),
        stats.tables,
        stats.tables_degraded,
        stats.severity_badges
    );

    RenderOutput {
        html: parts.join("\n"),
        stats,
    }
}

fn push_tag(parts: &mut Vec<String>, stats: &mut RenderStats, tag: ContainerTag) {
    match tag {
        ContainerTag::OpenUnordered | ContainerTag::OpenOrdered => stats.lists += 1,
        ContainerTag::OpenQuote => stats.block_quotes += 1,
        _ => {}
    }
    parts.push(tag.html().to_string());
}

fn emit(block: Block<'_>, config: &RenderConfig, parts: &mut Vec<String>, stats: &mut RenderStats) {
    let inline = |text: &str| convert_inline_with(text, config.links_new_tab);

    match block {
        Block::Blank => {}
        Block::Rule => {
            stats.horizontal_rules += 1;
            parts.push("<hr/>".to_string());
        }
        Block::Table(rows) => match convert_table_with(&rows, config) {
            TableOutcome::Table { html, badges } => {
                stats.tables += 1;
                stats.severity_badges += badges;
                parts.push(html);
            }
            TableOutcome::Raw(raw) => {
                debug!("Table run of {} line(s) has no body row; passing through raw", rows.len());
                stats.tables_degraded += 1;
                parts.push(raw);
            }
        },
        Block::Heading { level, text } => {
            stats.headings += 1;
            parts.push(format!("<h{level}>{}</h{level}>", inline(text)));
        }
        Block::Quote(text) => {
            stats.paragraphs += 1;
            parts.push(format!("<p>{}</p>", inline(text)));
        }
        Block::ListItem { text, .. } => {
            stats.list_items += 1;
            parts.push(format!("<li>{}</li>", inline(text)));
        }
        Block::Citation(text) => {
            stats.citations += 1;
            parts.push(format!(
                "<p class=\"{}\"><em>{}</em></p>",
                config.citation_class,
                inline(text)
            ));
        }
        Block::Paragraph(text) => {
            stats.paragraphs += 1;
            parts.push(format!("<p>{}</p>", inline(text)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ContainerTag::*;

    fn render(md: &str) -> String {
        scan(md, &RenderConfig::default()).html
    }

    #[test]
    fn classify_precedence() {
        assert_eq!(classify("   "), Block::Blank);
        assert_eq!(classify(" ---- "), Block::Rule);
        assert_eq!(classify("| a |"), Block::Table(vec!["| a |"]));
        assert_eq!(classify("### Area"), Block::Heading { level: 3, text: "Area" });
        assert_eq!(classify("> note"), Block::Quote("note"));
        assert_eq!(classify("+ item"), Block::ListItem { ordered: false, text: "item" });
        assert_eq!(classify("12. item"), Block::ListItem { ordered: true, text: "item" });
        assert_eq!(classify("*Prepared by X*"), Block::Citation("Prepared by X"));
        assert_eq!(classify("plain"), Block::Paragraph("plain"));
    }

    #[test]
    fn classify_near_misses_fall_through() {
        assert_eq!(classify("##### deep"), Block::Paragraph("##### deep"));
        assert_eq!(classify("#tag"), Block::Paragraph("#tag"));
        assert_eq!(classify("-dash"), Block::Paragraph("-dash"));
        assert_eq!(classify("1.5 litres"), Block::Paragraph("1.5 litres"));
        assert_eq!(classify("*a* and *b*"), Block::Paragraph("*a* and *b*"));
        assert_eq!(classify("**bold line**"), Block::Paragraph("**bold line**"));
    }

    #[test]
    fn classify_list_item_with_emphasis() {
        assert_eq!(
            classify("* *x*"),
            Block::ListItem { ordered: false, text: "*x*" }
        );
    }

    #[test]
    fn transition_unordered_to_ordered() {
        let mut s = ContainerState::default();
        assert_eq!(s.transition(BlockKind::UnorderedItem), vec![OpenUnordered]);
        assert!(s.transition(BlockKind::UnorderedItem).is_empty());
        assert_eq!(s.transition(BlockKind::OrderedItem), vec![CloseUnordered, OpenOrdered]);
        assert_eq!(s.list, ListState::OrderedOpen);
    }

    #[test]
    fn transition_ordered_to_unordered() {
        let mut s = ContainerState {
            list: ListState::OrderedOpen,
            quote_open: false,
        };
        assert_eq!(s.transition(BlockKind::UnorderedItem), vec![CloseOrdered, OpenUnordered]);
        assert_eq!(s.list, ListState::UnorderedOpen);
    }

    #[test]
    fn transition_quote_closes_list() {
        let mut s = ContainerState {
            list: ListState::OrderedOpen,
            quote_open: false,
        };
        assert_eq!(s.transition(BlockKind::Quote), vec![CloseOrdered, OpenQuote]);
        assert!(s.transition(BlockKind::Quote).is_empty());
        assert_eq!(s.transition(BlockKind::UnorderedItem), vec![CloseQuote, OpenUnordered]);
    }

    #[test]
    fn transition_other_blocks_close_everything() {
        for kind in [
            BlockKind::Blank,
            BlockKind::Rule,
            BlockKind::Table,
            BlockKind::Heading,
            BlockKind::Citation,
            BlockKind::Paragraph,
        ] {
            let mut s = ContainerState {
                list: ListState::UnorderedOpen,
                quote_open: false,
            };
            assert_eq!(s.transition(kind), vec![CloseUnordered], "{kind:?}");
            assert_eq!(s, ContainerState::default());

            let mut s = ContainerState {
                list: ListState::None,
                quote_open: true,
            };
            assert_eq!(s.transition(kind), vec![CloseQuote], "{kind:?}");
        }
    }

    #[test]
    fn close_all_on_idle_state_is_empty() {
        assert!(ContainerState::default().close_all().is_empty());
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("  \n\t\n   "), "");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            render("# A\n## B\n### C\n#### D"),
            "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>\n<h4>D</h4>"
        );
    }

    #[test]
    fn list_opened_once_closed_once() {
        assert_eq!(
            render("- a\n- b\n- c"),
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn list_switch_closes_first() {
        assert_eq!(
            render("- a\n1. b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn quote_closed_by_blank_line() {
        assert_eq!(
            render("> one\n> two\n\nafter"),
            "<blockquote>\n<p>one</p>\n<p>two</p>\n</blockquote>\n<p>after</p>"
        );
    }

    #[test]
    fn quote_closed_at_end_of_input() {
        assert_eq!(render("> only"), "<blockquote>\n<p>only</p>\n</blockquote>");
    }

    #[test]
    fn table_run_closes_list() {
        let html = render("- a\n| H |\n| low |");
        assert!(html.starts_with("<ul>\n<li>a</li>\n</ul>\n<div class=\"table-wrapper\">"), "got: {html}");
    }

    #[test]
    fn degraded_table_passes_through() {
        let out = scan("| H |\n|---|", &RenderConfig::default());
        assert_eq!(out.html, "| H |\n|---|");
        assert_eq!(out.stats.tables_degraded, 1);
        assert_eq!(out.stats.tables, 0);
    }

    #[test]
    fn rule_and_citation() {
        assert_eq!(
            render("---\n*Generated from site notes*"),
            "<hr/>\n<p class=\"citation\"><em>Generated from site notes</em></p>"
        );
    }

    #[test]
    fn ordered_to_unordered_switch_closes_first() {
        assert_eq!(
            render("1. a\n- b"),
            "<ol>\n<li>a</li>\n</ol>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn leading_bom_is_trimmed() {
        assert_eq!(classify("\u{FEFF}# Title"), Block::Heading { level: 1, text: "Title" });
        assert_eq!(render("\u{FEFF}# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        assert_eq!(render("# T\r\n- a\r\n"), "<h1>T</h1>\n<ul>\n<li>a</li>\n</ul>");
    }

    #[test]
    fn stats_count_containers() {
        let out = scan("- a\n- b\n\n1. c\n> q\n> r", &RenderConfig::default());
        assert_eq!(out.stats.lists, 2);
        assert_eq!(out.stats.list_items, 3);
        assert_eq!(out.stats.block_quotes, 1);
        assert_eq!(out.stats.paragraphs, 2);
    }
}
