//! Pipeline stages for Markdown-to-HTML rendering.
//!
//! ## Data Flow
//!
//! ```text
//! markdown ──▶ preprocess ──▶ scanner ──┬──▶ inline ──┐
//! (string)     (opt-in)      (blocks)   └──▶ table  ──┴──▶ html fragment
//! ```
//!
//! 1. [`preprocess`]: optional cleanup of model quirks (outer fence,
//!    CRLF, invisible characters)
//! 2. [`scanner`]: single pass over lines, block classification and the
//!    open-container state machine
//! 3. [`table`]: pipe-table runs to `<table>`, severity badges
//! 4. [`inline`]: emphasis, code spans and links inside block text

pub mod inline;
pub mod preprocess;
pub mod scanner;
pub mod table;
