//! Block compilation tests (classified block → render node)

use crate::common::{compile, leaf_values};
use mdsite_babel::formats::markdown::inline::text_to_spans;
use mdsite_babel::formats::markdown::parser::block_to_html_node;
use mdsite_babel::ir::nodes::{Block, BlockKind, InlineSpan, SpanKind};
use mdsite_babel::FormatError;

#[test]
fn test_heading_round_trip() {
    let root = compile("# Heading");
    assert_eq!(root.tag(), Some("div"));
    assert_eq!(root.children().len(), 1);

    let heading = &root.children()[0];
    assert_eq!(heading.tag(), Some("h1"));
    assert_eq!(leaf_values(heading), vec!["Heading"]);
}

#[test]
fn test_unordered_list_items() {
    let root = compile("* a\n* b\n* c");
    let list = &root.children()[0];
    assert_eq!(list.tag(), Some("ul"));
    assert_eq!(list.children().len(), 3);
    for (item, expected) in list.children().iter().zip(["a", "b", "c"]) {
        assert_eq!(item.tag(), Some("li"));
        assert_eq!(leaf_values(item), vec![expected]);
    }
}

#[test]
fn test_code_fence_wraps_pre_code() {
    let root = compile("```\nx\n```");
    let pre = &root.children()[0];
    assert_eq!(pre.tag(), Some("pre"));
    assert_eq!(pre.children().len(), 1);

    let code = &pre.children()[0];
    assert_eq!(code.tag(), Some("code"));
    assert_eq!(leaf_values(code), vec!["x"]);
}

#[test]
fn test_image_extracted_before_link() {
    let spans = text_to_spans("![a](u) [b](u)").unwrap();
    assert_eq!(
        spans,
        vec![
            InlineSpan::image("a", "u"),
            InlineSpan::text(" "),
            InlineSpan::link("b", "u"),
        ]
    );
    assert!(spans.iter().all(|s| s.kind != SpanKind::Link || s.text == "b"));
}

#[test]
fn test_link_and_image_attributes() {
    let root = compile("[b](https://boot.dev) ![a](/img.png)");
    let paragraph = &root.children()[0];

    let link = &paragraph.children()[0];
    assert_eq!(link.tag(), Some("a"));
    assert_eq!(link.attribute("href"), Some("https://boot.dev"));
    assert_eq!(link.value(), Some("b"));

    let image = &paragraph.children()[2];
    assert_eq!(image.tag(), Some("img"));
    assert_eq!(image.value(), Some(""));
    let names: Vec<&str> = image.attributes().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["src", "alt"]);
}

#[test]
fn test_unterminated_code_span_is_malformed() {
    let err = text_to_spans("a `b").unwrap_err();
    match err {
        FormatError::MalformedInline { delimiter, text } => {
            assert_eq!(delimiter, "`");
            assert_eq!(text, "a `b");
        }
        other => panic!("Expected MalformedInline, got {other:?}"),
    }
}

#[test]
fn test_malformed_block_aborts_conversion() {
    let block = Block {
        kind: BlockKind::Paragraph,
        text: "half **bold",
    };
    assert!(matches!(
        block_to_html_node(&block),
        Err(FormatError::MalformedInline { .. })
    ));
}

#[test]
fn test_quote_compiled_without_marker_is_invalid() {
    let block = Block {
        kind: BlockKind::Quote,
        text: "> ok\nnot quoted",
    };
    assert!(matches!(
        block_to_html_node(&block),
        Err(FormatError::InvalidQuote(_))
    ));
}

#[test]
fn test_bold_wins_over_italic() {
    let root = compile("**a *b* c**");
    assert_eq!(root.to_html().unwrap(), "<div><p><b>a *b* c</b></p></div>");
}
