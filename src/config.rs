//! Configuration types for Markdown-to-HTML rendering.
//!
//! All rendering knobs live in [`RenderConfig`], built via its
//! [`RenderConfigBuilder`]. The default configuration reproduces the stock
//! report rendering exactly: severity badges on, `table-wrapper` and
//! `citation` class names, links opened in a new tab, no input cleanup.

use crate::error::Md2HtmlError;
use serde::{Deserialize, Serialize};

/// Configuration for a Markdown-to-HTML render.
///
/// Built via [`RenderConfig::builder()`] or using [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use ddr_md2html::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .severity_badges(false)
///     .citation_class("closing-note")
///     .build()
///     .unwrap();
/// assert_eq!(config.citation_class, "closing-note");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Wrap `high` / `medium` / `low` table body cells in a severity badge
    /// span. Default: true.
    pub severity_badges: bool,

    /// Class of the scroll container `<div>` around every table.
    /// Default: `"table-wrapper"`.
    pub table_wrapper_class: String,

    /// Class of the `<p>` emitted for a standalone italic line.
    /// Default: `"citation"`.
    pub citation_class: String,

    /// Emit `target="_blank" rel="noopener noreferrer"` on links. Default: true.
    pub links_new_tab: bool,

    /// Run the preprocess stage (outer fence stripping, line ending and
    /// invisible character cleanup) before scanning. Default: false.
    pub clean_input: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            severity_badges: true,
            table_wrapper_class: "table-wrapper".to_string(),
            citation_class: "citation".to_string(),
            links_new_tab: true,
            clean_input: false,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn severity_badges(mut self, v: bool) -> Self {
        self.config.severity_badges = v;
        self
    }

    pub fn table_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.config.table_wrapper_class = class.into();
        self
    }

    pub fn citation_class(mut self, class: impl Into<String>) -> Self {
        self.config.citation_class = class.into();
        self
    }

    pub fn links_new_tab(mut self, v: bool) -> Self {
        self.config.links_new_tab = v;
        self
    }

    pub fn clean_input(mut self, v: bool) -> Self {
        self.config.clean_input = v;
        self
    }

    /// Build the configuration, validating class names.
    pub fn build(self) -> Result<RenderConfig, Md2HtmlError> {
        let c = &self.config;
        validate_class("table wrapper", &c.table_wrapper_class)?;
        validate_class("citation", &c.citation_class)?;
        Ok(self.config)
    }
}

/// Class names are interpolated into attributes unescaped, so only a
/// conservative identifier alphabet is accepted.
fn validate_class(what: &str, class: &str) -> Result<(), Md2HtmlError> {
    if class.is_empty() {
        return Err(Md2HtmlError::InvalidConfig(format!(
            "{what} class must not be empty"
        )));
    }
    if let Some(bad) = class
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Md2HtmlError::InvalidConfig(format!(
            "{what} class '{class}' contains invalid character {bad:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_rendering() {
        let c = RenderConfig::default();
        assert!(c.severity_badges);
        assert!(c.links_new_tab);
        assert!(!c.clean_input);
        assert_eq!(c.table_wrapper_class, "table-wrapper");
        assert_eq!(c.citation_class, "citation");
    }

    #[test]
    fn builder_sets_fields() {
        let c = RenderConfig::builder()
            .severity_badges(false)
            .links_new_tab(false)
            .clean_input(true)
            .table_wrapper_class("scroll_x")
            .build()
            .unwrap();
        assert!(!c.severity_badges);
        assert!(!c.links_new_tab);
        assert!(c.clean_input);
        assert_eq!(c.table_wrapper_class, "scroll_x");
    }

    #[test]
    fn empty_class_rejected() {
        let err = RenderConfig::builder().citation_class("").build().unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "got: {err}");
    }

    #[test]
    fn quote_in_class_rejected() {
        let err = RenderConfig::builder()
            .table_wrapper_class("x\" onclick=\"y")
            .build()
            .unwrap_err();
        assert!(matches!(err, Md2HtmlError::InvalidConfig(_)));
    }

    #[test]
    fn config_serialises() {
        let json = serde_json::to_string(&RenderConfig::default()).unwrap();
        assert!(json.contains("\"severity_badges\":true"));
    }
}
