//! Core data structures for the Intermediate Representation (IR).

use crate::error::FormatError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One atomic piece of inline content.
///
/// `target` holds the destination URL and is only ever set for links and
/// images; use the constructors to keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl InlineSpan {
    fn untargeted(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            target: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::untargeted(SpanKind::Text, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::untargeted(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::untargeted(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::untargeted(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            target: Some(url.into()),
        }
    }

    /// Whether later tokenizer passes may still split this span.
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Text
    }
}

/// Structural kind of a blank-line delimited block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Paragraph,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::UnorderedList,
        BlockKind::OrderedList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered_list",
            BlockKind::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = FormatError;

    /// Inverse of [`BlockKind::as_str`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| FormatError::UnknownBlockKind(name.to_string()))
    }
}

/// A trimmed block of source text together with its classification.
///
/// Borrowed from the source document; produced by segmentation and consumed
/// straight away by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}
