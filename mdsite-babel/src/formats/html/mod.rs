//! HTML format implementation
//!
//! Export only: serializes a render tree to an HTML fragment.
//!
//! The render tree ([`node::HtmlNode`]) is our own minimal model rather than a
//! DOM crate: nodes are write-once, strictly owned, and serialize with no
//! whitespace between children and no escaping of text or attribute values.
//!
//! # Serialization Rules
//!
//! | Node                         | Output                          |
//! |------------------------------|---------------------------------|
//! | leaf, no tag                 | raw value                       |
//! | leaf with tag                | `<tag a="v">value</tag>`        |
//! | parent                       | `<tag a="v">children…</tag>`    |
//! | leaf without value           | `FormatError::Structural`       |
//! | parent without tag/children  | `FormatError::Structural`       |
//!
//! Page chrome (doctype, head, title) is not produced here: pages get it from
//! a template, see [`crate::templates`].

pub mod node;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};

use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for HTML
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment rooted at a single div"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, root: &HtmlNode) -> Result<String, FormatError> {
        root.to_html()
    }
}
