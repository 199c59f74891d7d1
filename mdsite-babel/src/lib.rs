//! Markdown to HTML conversion for mdsite
//!
//!     This crate turns documents written in a small markdown dialect into render-node trees,
//!     and render-node trees into HTML fragments. It also carries the glue to publish a whole
//!     content directory as a static site.
//!
//!     This is a pure lib, that is, it powers mdsite-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!     Diagnostics go through `tracing`; installing a subscriber is the caller's business.
//!
//! Architecture
//!
//!     The pipeline is strictly one way and runs in four stages:
//!
//!         source ──segment/classify──▶ blocks ──tokenize/compile──▶ HtmlNode tree ──serialize──▶ HTML
//!
//!     Each stage is a plain function over owned or borrowed data; nothing is shared or
//!     mutated after construction.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError, the single error type
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── blocks.rs       # Block segmenter and classifier
//!     │   │   ├── inline.rs       # Inline span tokenizer
//!     │   │   ├── parser.rs       # Block-to-node compiler
//!     │   │   └── mod.rs
//!     │   ├── html
//!     │   │   ├── node.rs         # Render-node model and serializer
//!     │   │   └── mod.rs
//!     │   └── treeviz             # Debug view of a render tree
//!     ├── ir                      # Inline spans and classified blocks
//!     ├── templates               # Page templates, title extraction
//!     └── publish.rs              # Static site pipeline
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── <area>/mod.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so they are
//!     included from tests/lib.rs.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait: a name, file
//!     extensions, and parse() and/or serialize(). Markdown only parses, HTML and treeviz
//!     only serialize; the render tree is where they meet.
//!
//! Library Choices
//!
//!     The dialect is small and its rules are not CommonMark's, so the parser is written here
//!     rather than delegated to a markdown crate. Links and images are matched with `regex`.
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod publish;
pub mod registry;
pub mod templates;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::HtmlNode;
pub use formats::markdown::parser::markdown_to_html_node;
pub use registry::FormatRegistry;
pub use templates::extract_title;

/// Convert a markdown document straight to an HTML fragment.
///
/// A document with no blocks yields an empty `<div></div>`: the bare root is
/// emitted directly since an element with no children is otherwise rejected
/// by the serializer.
pub fn markdown_to_html(markdown: &str) -> Result<String, FormatError> {
    let root = markdown_to_html_node(markdown)?;
    if root.children().is_empty() {
        if let Some(tag) = root.tag() {
            return Ok(format!("<{tag}></{tag}>"));
        }
    }
    root.to_html()
}
