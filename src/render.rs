//! Rendering entry points.
//!
//! [`render`] and [`render_with_config`] are pure: no I/O, no shared state,
//! and no failure path. Every string, Markdown or not, renders to some
//! HTML fragment. [`render_file`] and [`render_to_file`] add the file
//! handling around them and are the only fallible functions.

use crate::config::RenderConfig;
use crate::error::Md2HtmlError;
use crate::output::{RenderOutput, RenderStats};
use crate::pipeline::{preprocess, scanner};
use std::path::Path;
use tracing::info;

/// Render a Markdown report to an HTML fragment with the default settings.
///
/// Empty or whitespace-only input yields an empty string.
///
/// # Example
/// ```rust
/// let html = ddr_md2html::render("# Title\n- a\n- b");
/// assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
/// ```
pub fn render(markdown: &str) -> String {
    render_with_config(markdown, &RenderConfig::default()).html
}

/// Render a Markdown report, returning the fragment plus block counters.
pub fn render_with_config(markdown: &str, config: &RenderConfig) -> RenderOutput {
    if config.clean_input {
        let cleaned = preprocess::clean_input(markdown);
        scanner::scan(&cleaned, config)
    } else {
        scanner::scan(markdown, config)
    }
}

/// Read a Markdown file and render it.
///
/// # Errors
/// Returns `Err(Md2HtmlError)` when the file cannot be read or is not UTF-8.
pub fn render_file(
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, Md2HtmlError> {
    let path = path.as_ref();
    info!("Rendering {}", path.display());
    let markdown =
        std::fs::read_to_string(path).map_err(|e| Md2HtmlError::from_read(path, e))?;
    Ok(render_with_config(&markdown, config))
}

/// Read a Markdown file, render it and write the fragment to `output`.
///
/// Parent directories of `output` are created as needed.
pub fn render_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderStats, Md2HtmlError> {
    let rendered = render_file(input, config)?;
    write_html(output, &rendered.html)?;
    Ok(rendered.stats)
}

/// Write `html` to `path`, creating parent directories.
pub fn write_html(path: impl AsRef<Path>, html: &str) -> Result<(), Md2HtmlError> {
    let path = path.as_ref();
    let write_err = |source| Md2HtmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, html).map_err(write_err)?;
    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
