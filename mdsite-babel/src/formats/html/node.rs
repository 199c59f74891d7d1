//! Render-node model
//!
//! The output tree of the markdown compiler. A node is either a leaf (optional
//! tag, text value) or a parent (tag, ordered children). Both may carry an
//! attribute list whose insertion order is preserved on output.
//!
//! The tree is built bottom-up, never mutated, and consumed by [`HtmlNode::to_html`].
//! Invalid shapes (a parent without tag or children, a leaf without value) are
//! representable so that they can be rejected at serialization time.

use crate::error::FormatError;
use crate::ir::nodes::{InlineSpan, SpanKind};
use serde::Serialize;

/// Attribute name/value pairs in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// A node holding a text value and no children.
///
/// An untagged leaf serializes to its raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Attributes,
}

/// A tagged node wrapping child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    /// Raw text emitted without a wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn to_html(&self) -> Result<String, FormatError> {
        let value = self.value.as_deref().ok_or_else(|| {
            FormatError::Structural("leaf node must have a value".to_string())
        })?;
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(wrap(tag, &self.attributes, value)),
        }
    }
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn to_html(&self) -> Result<String, FormatError> {
        let tag = self.tag.as_deref().ok_or_else(|| {
            FormatError::Structural("parent node must have a tag".to_string())
        })?;
        if self.children.is_empty() {
            return Err(FormatError::Structural(format!(
                "<{tag}> parent node must have children"
            )));
        }
        let mut inner = String::new();
        for child in &self.children {
            inner.push_str(&child.to_html()?);
        }
        Ok(wrap(tag, &self.attributes, &inner))
    }
}

impl HtmlNode {
    /// Serialize this node and its descendants to HTML.
    pub fn to_html(&self) -> Result<String, FormatError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// The text value of a leaf; parents have none.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// The children of a parent; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Look up an attribute value by name (first occurrence).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Build the render node for one inline span.
    pub fn from_span(span: &InlineSpan) -> HtmlNode {
        let target = span.target.clone().unwrap_or_default();
        let leaf = match span.kind {
            SpanKind::Text => LeafNode::text(span.text.as_str()),
            SpanKind::Bold => LeafNode::new(Some("b"), span.text.as_str()),
            SpanKind::Italic => LeafNode::new(Some("i"), span.text.as_str()),
            SpanKind::Code => LeafNode::new(Some("code"), span.text.as_str()),
            SpanKind::Link => {
                LeafNode::new(Some("a"), span.text.as_str()).with_attribute("href", target)
            }
            SpanKind::Image => LeafNode::new(Some("img"), "")
                .with_attribute("src", target)
                .with_attribute("alt", span.text.as_str()),
        };
        HtmlNode::Leaf(leaf)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Render attributes as ` name="value"` pairs. Values are emitted verbatim.
fn attributes_to_html(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

fn wrap(tag: &str, attributes: &[(String, String)], content: &str) -> String {
    let attrs = attributes_to_html(attributes);
    format!("<{tag}{attrs}>{content}</{tag}>")
}
