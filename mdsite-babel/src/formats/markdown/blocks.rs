//! Block segmentation and classification
//!
//! A document is a sequence of blocks separated by blank lines. Each block is
//! trimmed as a whole (not line by line) and classified from its text alone,
//! with the first matching rule winning:
//!
//! | Order | Kind           | Rule                                                     |
//! |-------|----------------|----------------------------------------------------------|
//! | 1     | heading        | 1-6 `#` then a space, the `#` run being the first word   |
//! | 2     | code           | opens and closes with distinct ```` ``` ```` fences      |
//! | 3     | quote          | every line starts with `>`                               |
//! | 4     | unordered_list | every line starts with `* ` or `- `                      |
//! | 5     | ordered_list   | line `n` starts with `n. `, numbering from 1 with no gap |
//! | 6     | paragraph      | anything else                                            |
//!
//! Malformed markers are never an error here: a list with one odd line is
//! simply a paragraph.

use crate::ir::nodes::{Block, BlockKind};
use tracing::trace;

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Split a document into trimmed, non-empty blocks, preserving order.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single trimmed block.
pub fn block_to_block_type(block: &str) -> BlockKind {
    let kind = if is_heading(block) {
        BlockKind::Heading
    } else if is_code(block) {
        BlockKind::Code
    } else if all_lines(block, |line| line.starts_with('>')) {
        BlockKind::Quote
    } else if all_lines(block, |line| {
        line.starts_with("* ") || line.starts_with("- ")
    }) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    trace!(%kind, block, "classified block");
    kind
}

/// Segment and classify a whole document.
pub fn classify(markdown: &str) -> Vec<Block<'_>> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| Block {
            kind: block_to_block_type(text),
            text,
        })
        .collect()
}

/// Number of leading `#` characters of a heading block.
pub(crate) fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}

fn is_heading(block: &str) -> bool {
    let Some((marker, _)) = block.split_once(' ') else {
        return false;
    };
    let level = marker.len();
    (1..=MAX_HEADING_LEVEL).contains(&level) && marker.chars().all(|c| c == '#')
}

/// Opening and closing fences must not overlap, so a lone ```` ``` ```` is not code.
fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(index, line)| ordered_item_number(line) == Some(index + 1))
}

/// The number before the first `". "` of an ordered list line.
fn ordered_item_number(line: &str) -> Option<usize> {
    let (prefix, _) = line.split_once(". ")?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

fn all_lines(block: &str, predicate: impl Fn(&str) -> bool) -> bool {
    block.split('\n').all(predicate)
}
