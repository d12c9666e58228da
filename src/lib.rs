//! # ddr-md2html
//!
//! Render machine-generated diagnostic report Markdown to an HTML fragment.
//!
//! ## Why not a CommonMark crate?
//!
//! The reports this crate renders come from a templated model prompt with a
//! fixed shape: numbered section headings, area subsections with bullet
//! lists, a severity table, an occasional block quote and a closing italic
//! attribution line. That subset needs a few renderings a general engine
//! does not give: `high` / `medium` / `low` table cells become coloured
//! severity badges, tables sit in a horizontal scroll container, and a
//! standalone italic line becomes a `citation` paragraph. A small
//! line-oriented renderer gets all of that in one pass.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Clean    optional: outer fence, CRLF, invisible chars
//!  ├─ 2. Scan     classify each line, track open lists / quotes
//!  ├─ 3. Tables   pipe runs → <table>, severity badges
//!  ├─ 4. Inline   bold, italic, code, links
//!  └─ 5. Output   newline-joined fragment + block counters
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let md = "## 4. Severity Assessment\n\
//!           | Area | Severity |\n\
//!           |------|----------|\n\
//!           | Hall | High |";
//! let html = ddr_md2html::render(md);
//! assert!(html.contains(r#"<span class="severity-badge severity-high">High</span>"#));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! The output is not sanitised. Raw HTML in the input passes straight
//! through, so escape or sanitise before embedding untrusted Markdown.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder};
pub use document::wrap_document;
pub use error::Md2HtmlError;
pub use output::{RenderOutput, RenderStats};
pub use pipeline::inline::convert_inline;
pub use pipeline::table::convert_table;
pub use render::{render, render_file, render_to_file, render_with_config, write_html};
