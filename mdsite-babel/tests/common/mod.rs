//! Shared helpers for the integration tests.

use mdsite_babel::{markdown_to_html_node, HtmlNode};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn compile(markdown: &str) -> HtmlNode {
    markdown_to_html_node(markdown).expect("Should compile markdown")
}

/// Every leaf value under `node`, depth first.
pub fn leaf_values(node: &HtmlNode) -> Vec<String> {
    match node.value() {
        Some(value) => vec![value.to_string()],
        None => node.children().iter().flat_map(leaf_values).collect(),
    }
}

/// One line of HTML per top-level block.
pub fn blocks_html(root: &HtmlNode) -> String {
    root.children()
        .iter()
        .map(|block| block.to_html().expect("Should serialize block"))
        .collect::<Vec<_>>()
        .join("\n")
}
