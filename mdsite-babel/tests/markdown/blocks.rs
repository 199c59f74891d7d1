//! Segmentation and classification through the public API

use mdsite_babel::formats::markdown::blocks::{block_to_block_type, classify, markdown_to_blocks};
use mdsite_babel::ir::nodes::BlockKind;

#[test]
fn test_kitchensink_block_kinds() {
    let markdown = crate::common::fixture("kitchensink.md");
    let kinds: Vec<BlockKind> = classify(&markdown).iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Quote,
            BlockKind::Heading,
            BlockKind::UnorderedList,
            BlockKind::Heading,
            BlockKind::OrderedList,
            BlockKind::Code,
        ]
    );
}

#[test]
fn test_ordered_list_gap_is_paragraph() {
    assert_eq!(block_to_block_type("1. a\n2. b\n3. c"), BlockKind::OrderedList);
    assert_eq!(block_to_block_type("1. a\n3. b"), BlockKind::Paragraph);
}

#[test]
fn test_unordered_list_kind() {
    assert_eq!(block_to_block_type("* a\n* b\n* c"), BlockKind::UnorderedList);
}

#[test]
fn test_whitespace_only_document_has_no_blocks() {
    assert!(markdown_to_blocks(" \n\n\t\n\n").is_empty());
    assert!(classify("").is_empty());
}

#[test]
fn test_block_kind_names() {
    let names: Vec<&str> = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::UnorderedList,
        BlockKind::OrderedList,
    ]
    .iter()
    .map(BlockKind::as_str)
    .collect();
    assert_eq!(
        names,
        vec![
            "paragraph",
            "heading",
            "code",
            "quote",
            "unordered_list",
            "ordered_list"
        ]
    );
}
