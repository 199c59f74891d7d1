//! Render tree → treeviz

use crate::common::compile;
use insta::assert_snapshot;
use mdsite_babel::formats::treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizOptions};
use mdsite_babel::FormatRegistry;

#[test]
fn test_treeviz_document() {
    let root = compile("# Title\n\nSome **bold** and [a link](https://x.dev)");
    assert_snapshot!(to_treeviz_str(&root), @r#"
    ⧉ div (2 children)
    ├─ § h1
    │ └─ ◦ #text "Title"
    └─ ¶ p
      ├─ ◦ #text "Some "
      ├─ 𝐁 b "bold"
      ├─ ◦ #text " and "
      └─ ⊕ a [href=https://x.dev] "a link"
    "#);
}

#[test]
fn test_treeviz_truncates_code() {
    let root = compile("```\nfn main() {\n    println!(\"hello, world\");\n}\n```");
    let options = TreevizOptions {
        show_attributes: true,
        max_value_len: 13,
    };
    let output = to_treeviz_str_with_options(&root, &options);
    assert!(output.contains("◦ #text \"fn main() {\\n…\""), "{output}");
}

#[test]
fn test_treeviz_through_registry() {
    let registry = FormatRegistry::with_defaults();
    let root = registry.parse("* one", "markdown").unwrap();
    let output = registry.serialize(&root, "treeviz").unwrap();
    assert_eq!(output.lines().count(), 4);
    assert!(output.starts_with("⧉ div (1 children)"));
}
