//! Treeviz formatter for render trees
//!
//! Treeviz is a visual, line based representation of a render tree, meant for
//! inspecting what the markdown compiler produced. One line per node:
//!
//!     <prefix><connector> <icon> <label>
//!
//! The label is the node's tag (`#text` for untagged leaves), then its
//! attributes as `[name=value ...]`, then the leaf value in quotes, truncated
//! to `max_value_len` characters. Newlines in values are shown as `\n`.
//!
//! Example:
//!
//!     ⧉ div (2 children)
//!     ├─ § h1
//!     │ └─ ◦ #text "Title"
//!     └─ ¶ p
//!       ├─ ◦ #text "Some "
//!       ├─ 𝐁 b "bold"
//!       └─ ◦ #text " text"

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::HtmlNode;

const TEXT_LABEL: &str = "#text";

/// Rendering options for treeviz output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Show node attributes (`href`, `src`, `alt`)
    pub show_attributes: bool,
    /// Maximum characters of a leaf value before truncation; 0 disables truncation
    pub max_value_len: usize,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            show_attributes: true,
            max_value_len: 30,
        }
    }
}

fn truncate(value: &str, max_len: usize) -> String {
    let escaped = value.replace('\n', "\\n");
    if max_len == 0 || escaped.chars().count() <= max_len {
        return escaped;
    }
    let mut cut: String = escaped.chars().take(max_len).collect();
    cut.push('…');
    cut
}

fn label(node: &HtmlNode, options: &TreevizOptions) -> String {
    let mut label = node.tag().unwrap_or(TEXT_LABEL).to_string();

    if options.show_attributes && !node.attributes().is_empty() {
        let attrs: Vec<String> = node
            .attributes()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        label.push_str(&format!(" [{}]", attrs.join(" ")));
    }

    if let Some(value) = node.value() {
        label.push_str(&format!(" \"{}\"", truncate(value, options.max_value_len)));
    }
    label
}

fn format_node(
    node: &HtmlNode,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.tag().unwrap_or(TEXT_LABEL));
    output.push_str(&format!(
        "{prefix}{connector} {icon} {}\n",
        label(node, options)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node.children(), &child_prefix, options, output);
}

fn format_children(
    children: &[HtmlNode],
    prefix: &str,
    options: &TreevizOptions,
    output: &mut String,
) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == count - 1, options, output);
    }
}

/// Render a tree with default options.
pub fn to_treeviz_str(root: &HtmlNode) -> String {
    to_treeviz_str_with_options(root, &TreevizOptions::default())
}

/// Render a tree; the root gets a header line, its descendants get connectors.
pub fn to_treeviz_str_with_options(root: &HtmlNode, options: &TreevizOptions) -> String {
    let icon = get_icon(root.tag().unwrap_or(TEXT_LABEL));
    let mut output = match root {
        HtmlNode::Parent(parent) => format!(
            "{icon} {} ({} children)\n",
            label(root, options),
            parent.children.len()
        ),
        HtmlNode::Leaf(_) => format!("{icon} {}\n", label(root, options)),
    };
    format_children(root.children(), "", options, &mut output);
    output
}

/// Format implementation for treeviz format
#[derive(Default)]
pub struct TreevizFormat {
    options: TreevizOptions,
}

impl TreevizFormat {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, root: &HtmlNode) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(root, &self.options))
    }
}
