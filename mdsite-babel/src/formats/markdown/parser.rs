//! Markdown parser (markdown → render tree)
//!
//! Compiles classified blocks into render nodes. Every block kind has one
//! construction routine; all human-readable text goes through the inline
//! tokenizer and ends up as leaf children of the block's container.
//!
//! | Block kind     | Render tree                      |
//! |----------------|----------------------------------|
//! | paragraph      | `p` (lines joined with spaces)   |
//! | heading        | `h1`..`h6`                       |
//! | code           | `pre` > `code`                   |
//! | quote          | `blockquote`                     |
//! | unordered_list | `ul` > `li`*                     |
//! | ordered_list   | `ol` > `li`*                     |
//!
//! The whole document is wrapped in a single `div`.

use super::blocks::{classify, heading_level};
use super::inline::text_to_spans;
use crate::error::FormatError;
use crate::formats::html::{HtmlNode, ParentNode};
use crate::ir::nodes::{Block, BlockKind};
use tracing::debug;

const ROOT_TAG: &str = "div";

/// Convert a whole markdown document into a `div` rooted render tree.
///
/// A document without blocks yields a root with no children; see
/// [`crate::markdown_to_html`] for how that case is serialized.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, FormatError> {
    let blocks = classify(markdown);
    debug!(blocks = blocks.len(), "compiling markdown document");
    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(ROOT_TAG, children).into())
}

/// Compile one classified block.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, FormatError> {
    let node = match block.kind {
        BlockKind::Paragraph => paragraph_to_html_node(block.text)?,
        BlockKind::Heading => heading_to_html_node(block.text)?,
        BlockKind::Code => code_to_html_node(block.text)?,
        BlockKind::Quote => quote_to_html_node(block.text)?,
        BlockKind::UnorderedList => ulist_to_html_node(block.text)?,
        BlockKind::OrderedList => olist_to_html_node(block.text)?,
    };
    Ok(node.into())
}

/// Tokenize inline text into render-node children.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, FormatError> {
    Ok(text_to_spans(text)?
        .iter()
        .map(HtmlNode::from_span)
        .collect())
}

pub fn paragraph_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let paragraph = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(ParentNode::new("p", text_to_children(&paragraph)?))
}

pub fn heading_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let level = heading_level(block);
    let text = block
        .get(level + 1..)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| FormatError::InvalidHeading(block.to_string()))?;
    Ok(ParentNode::new(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

/// The fence and the one character after it are stripped, then the closing fence.
pub fn code_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let body = block.strip_prefix("```").unwrap_or(block);
    let start = body
        .chars()
        .next()
        .map_or(0, |first| first.len_utf8());
    let end = body.len().saturating_sub(3);
    let text = body.get(start..end).unwrap_or("").trim();
    let code = ParentNode::new("code", text_to_children(text)?);
    Ok(ParentNode::new("pre", vec![code.into()]))
}

pub fn quote_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let lines = block
        .split('\n')
        .map(|line| {
            line.strip_prefix('>')
                .map(str::trim)
                .ok_or_else(|| FormatError::InvalidQuote(line.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

pub fn ulist_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let items = block
        .split('\n')
        .map(|line| list_item(line.get(2..).unwrap_or("")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("ul", items))
}

pub fn olist_to_html_node(block: &str) -> Result<ParentNode, FormatError> {
    let items = block
        .split('\n')
        .map(|line| list_item(line.split_once(". ").map_or(line, |(_, rest)| rest)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, FormatError> {
    Ok(ParentNode::new("li", text_to_children(text)?).into())
}
