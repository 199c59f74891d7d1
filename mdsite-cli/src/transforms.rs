//! CLI-specific transforms
//!
//! This module defines all the transform combinations available to `mdsite inspect`.
//! Each transform is a stage + format combination (e.g., "block-json", "node-treeviz").
//!
//! ## Transform Pipeline
//!
//! The markdown compiler has three observable stages:
//!
//! 1. **Segmentation** - Raw text → classified blocks
//!    - `block-simple`: One line per block, `<kind>\t<text>`
//!    - `block-json`: JSON array of `{kind, text}`
//!
//! 2. **Inline tokenization** - The whole input as a single inline run → spans
//!    - `span-json`: JSON array of `{kind, text, target}`
//!
//! 3. **Compilation** - Blocks → render tree
//!    - `node-json`: JSON representation
//!    - `node-treeviz`: Tree visualization with Unicode icons (default)

use mdsite_babel::formats::markdown::blocks::classify;
use mdsite_babel::formats::markdown::inline::text_to_spans;
use mdsite_babel::formats::treeviz::{to_treeviz_str_with_options, TreevizOptions};
use mdsite_babel::ir::nodes::Block;
use mdsite_babel::markdown_to_html_node;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "block-simple",
    "block-json",
    "span-json",
    "node-json",
    "node-treeviz",
];

pub const DEFAULT_TRANSFORM: &str = "node-treeviz";

/// Execute a named transform on a markdown source.
///
/// `treeviz` only affects `node-treeviz`.
///
/// ```ignore
/// let output = execute_transform("# Title", "node-treeviz", &TreevizOptions::default())?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    treeviz: &TreevizOptions,
) -> Result<String, String> {
    match transform_name {
        "block-simple" => Ok(blocks_to_simple(&classify(source))),
        "block-json" => to_json(&classify(source)),
        "span-json" => {
            let spans = text_to_spans(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_json(&spans)
        }
        "node-json" => {
            let root = markdown_to_html_node(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_json(&root)
        }
        "node-treeviz" => {
            let root = markdown_to_html_node(source).map_err(|e| format!("Transform failed: {e}"))?;
            Ok(to_treeviz_str_with_options(&root, treeviz))
        }
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| format!("JSON serialization failed: {e}"))
}

fn blocks_to_simple(blocks: &[Block<'_>]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}\t{}\n", block.kind, block.text.replace('\n', "\\n")))
        .collect()
}
