//! Property tests over the conversion pipeline

use mdsite_babel::formats::markdown::blocks::{block_to_block_type, markdown_to_blocks};
use mdsite_babel::formats::markdown::inline::text_to_spans;
use mdsite_babel::ir::nodes::{BlockKind, InlineSpan};
use mdsite_babel::markdown_to_html;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_segmenting_preserves_block_order(blocks in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,3}", 0..8)) {
        let document = blocks.join("\n\n");
        prop_assert_eq!(markdown_to_blocks(&document), blocks);
    }

    #[test]
    fn test_rejoined_blocks_segment_identically(document in "[a-z#*> \n]{0,80}") {
        let blocks = markdown_to_blocks(&document);
        let rejoined = blocks.join("\n\n");
        prop_assert_eq!(markdown_to_blocks(&rejoined), blocks);
    }

    #[test]
    fn test_plain_text_is_single_span(text in "[a-zA-Z0-9 .,;:?'\"-]{1,64}") {
        prop_assert_eq!(text_to_spans(&text).unwrap(), vec![InlineSpan::text(text.as_str())]);
    }

    #[test]
    fn test_whole_bold_input_has_no_empty_text(inner in "[a-zA-Z0-9 ]{1,20}") {
        let spans = text_to_spans(&format!("**{inner}**")).unwrap();
        prop_assert_eq!(spans, vec![InlineSpan::bold(inner.as_str())]);
    }

    #[test]
    fn test_numbered_lines_are_ordered_lists(count in 1usize..15) {
        let block = (1..=count)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(block_to_block_type(&block), BlockKind::OrderedList);
    }

    #[test]
    fn test_conversion_never_panics(document in "[a-z#*`>\\-\\[\\]()!1. \né]{0,120}") {
        let _ = markdown_to_html(&document);
    }
}
