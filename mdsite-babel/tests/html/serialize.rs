//! Render tree → HTML

use insta::assert_snapshot;
use mdsite_babel::formats::html::{HtmlNode, LeafNode, ParentNode};
use mdsite_babel::{FormatError, FormatRegistry};

#[test]
fn test_nested_parents() {
    let node: HtmlNode = ParentNode::new(
        "p",
        vec![
            LeafNode::new(Some("b"), "Bold text").into(),
            LeafNode::text("Normal text").into(),
            LeafNode::new(Some("i"), "italic text").into(),
            ParentNode::new("span", vec![LeafNode::text("nested").into()])
                .with_attribute("class", "note")
                .into(),
        ],
    )
    .into();
    assert_snapshot!(
        node.to_html().unwrap(),
        @r#"<p><b>Bold text</b>Normal text<i>italic text</i><span class="note">nested</span></p>"#
    );
}

#[test]
fn test_attributes_keep_insertion_order() {
    let node = LeafNode::new(Some("a"), "Click me!")
        .with_attribute("href", "https://www.google.com")
        .with_attribute("target", "_blank");
    assert_eq!(
        node.to_html().unwrap(),
        r#"<a href="https://www.google.com" target="_blank">Click me!</a>"#
    );
}

#[test]
fn test_text_is_not_escaped() {
    let node = LeafNode::text("a < b & \"c\"");
    assert_eq!(node.to_html().unwrap(), "a < b & \"c\"");
}

#[test]
fn test_childless_parent_is_structural_error() {
    let node = ParentNode::new("ul", Vec::new());
    assert!(matches!(node.to_html(), Err(FormatError::Structural(_))));
}

#[test]
fn test_untagged_parent_is_structural_error() {
    let node = ParentNode {
        tag: None,
        children: vec![LeafNode::text("x").into()],
        attributes: Vec::new(),
    };
    assert!(matches!(node.to_html(), Err(FormatError::Structural(_))));
}

#[test]
fn test_valueless_leaf_is_structural_error() {
    let node = LeafNode {
        tag: Some("b".to_string()),
        value: None,
        attributes: Vec::new(),
    };
    assert!(matches!(node.to_html(), Err(FormatError::Structural(_))));
}

#[test]
fn test_error_in_deep_child_propagates() {
    let node = ParentNode::new(
        "div",
        vec![ParentNode::new("p", vec![ParentNode::new("b", Vec::new()).into()]).into()],
    );
    assert!(matches!(node.to_html(), Err(FormatError::Structural(_))));
}

#[test]
fn test_empty_code_fence_fails_at_serialization() {
    let registry = FormatRegistry::with_defaults();
    let root = registry.parse("``````", "markdown").unwrap();
    assert!(matches!(
        registry.serialize(&root, "html"),
        Err(FormatError::Structural(_))
    ));
}

#[test]
fn test_render_tree_json_shape() {
    let node: HtmlNode = ParentNode::new(
        "p",
        vec![LeafNode::new(Some("a"), "x").with_attribute("href", "u").into()],
    )
    .into();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["type"], "parent");
    assert_eq!(json["tag"], "p");
    assert_eq!(json["children"][0]["type"], "leaf");
    assert_eq!(json["children"][0]["value"], "x");
}
