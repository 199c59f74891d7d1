//! Markdown format implementation
//!
//! Import only: converts the mdsite markdown dialect into a render tree.
//!
//! # Supported Dialect
//!
//! The dialect is deliberately small. Blocks are separated by blank lines and
//! classified by their leading markers; inline text supports a fixed set of
//! non-nesting spans.
//!
//! | Markdown                | Render tree                     |
//! |-------------------------|---------------------------------|
//! | `# ` .. `###### `       | `h1` .. `h6`                    |
//! | ```` ``` ```` fences    | `pre` > `code`                  |
//! | `> ` lines              | `blockquote`                    |
//! | `* ` / `- ` lines       | `ul` > `li`                     |
//! | `1. `, `2. `, ...       | `ol` > `li`                     |
//! | anything else           | `p`                             |
//! | `**bold**`              | `b`                             |
//! | `*italic*`              | `i`                             |
//! | `` `code` ``            | `code`                          |
//! | `[text](url)`           | `a href="url"`                  |
//! | `![alt](url)`           | `img src="url" alt="alt"`       |
//!
//! Not supported: nested emphasis, reference links, tables, raw HTML, escapes.
//!
//! # Pipeline
//!
//!     source → blocks::classify → parser::block_to_html_node (inline::text_to_spans per text run) → `div` root
//!
//! # Implementation Status
//!
//! - [x] Import (Markdown → render tree)
//! - [ ] Export (not planned)

pub mod blocks;
pub mod inline;
pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::HtmlNode;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "mdsite markdown dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<HtmlNode, FormatError> {
        parser::markdown_to_html_node(source)
    }
}
