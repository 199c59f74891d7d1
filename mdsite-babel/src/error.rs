//! Error types for conversion and publishing operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting or publishing a document.
///
/// Every variant is fatal to the document being processed: there is no
/// partial rendering. Callers decide whether to skip, retry or halt a batch.
#[derive(Debug, Error)]
pub enum FormatError {
    /// An inline delimiter (`**`, `*` or `` ` ``) was opened but never closed
    #[error("Malformed inline markdown: unterminated `{delimiter}` in {text:?}")]
    MalformedInline { delimiter: String, text: String },
    /// A heading block has nothing after its `#` marker
    #[error("Invalid heading: {0:?}")]
    InvalidHeading(String),
    /// A quote block has a line without the `>` prefix
    #[error("Invalid quote block: line {0:?} lacks a '>' prefix")]
    InvalidQuote(String),
    /// A render node violates its serialization invariant
    #[error("Structural error: {0}")]
    Structural(String),
    /// A block kind has no compiler mapping
    #[error("Unknown block kind: {0}")]
    UnknownBlockKind(String),
    /// A document has no `# ` level-one heading to use as its title
    #[error("No title found: document has no line starting with '# '")]
    MissingTitle,
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}
