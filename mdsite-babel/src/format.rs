//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! Formats meet at the render-node tree: parsers produce one, serializers consume one.

use crate::error::FormatError;
use crate::formats::html::HtmlNode;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and the render tree.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, root: &HtmlNode) -> Result<String, FormatError> {
///         root.to_html()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → render tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (render tree → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a render tree
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<HtmlNode, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a render tree into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _root: &HtmlNode) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
