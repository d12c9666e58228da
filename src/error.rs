//! Error types for the ddr-md2html library.
//!
//! The renderer itself has no failure states: [`crate::render`] and
//! [`crate::render_with_config`] accept any string and always return HTML.
//! Errors only arise at the edges, when reading a Markdown file, writing
//! the rendered output, or validating a [`crate::RenderConfig`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the ddr-md2html file-level wrappers.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file was read but its bytes are not valid UTF-8.
    #[error("File is not valid UTF-8 text: '{path}'")]
    InvalidUtf8 { path: PathBuf },

    /// Any other I/O failure while reading the input.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Md2HtmlError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Md2HtmlError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Md2HtmlError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Md2HtmlError::InvalidUtf8 { path },
            _ => Md2HtmlError::ReadFailed { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_is_classified() {
        let e = Md2HtmlError::from_read("report.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, Md2HtmlError::FileNotFound { .. }));
        assert!(e.to_string().contains("report.md"), "got: {e}");
    }

    #[test]
    fn invalid_data_maps_to_utf8() {
        let e = Md2HtmlError::from_read("bin.md", io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(e, Md2HtmlError::InvalidUtf8 { .. }));
    }

    #[test]
    fn other_errors_keep_source() {
        let e = Md2HtmlError::from_read("x.md", io::Error::other("disk on fire"));
        assert!(e.to_string().contains("disk on fire"));
    }

    #[test]
    fn invalid_config_display() {
        let e = Md2HtmlError::InvalidConfig("citation class must not be empty".into());
        assert!(e.to_string().starts_with("Invalid configuration"));
    }
}
