//! Whole-document conversion tests

use crate::common::{blocks_html, compile, fixture};
use insta::assert_snapshot;
use mdsite_babel::format::Format;
use mdsite_babel::formats::markdown::MarkdownFormat;
use mdsite_babel::{extract_title, markdown_to_html};

#[test]
fn test_kitchensink_blocks() {
    let root = compile(&fixture("kitchensink.md"));
    assert_snapshot!(blocks_html(&root), @r#"
    <h1>Tolkien Fan Club</h1>
    <p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>
    <p>Here's the deal, <b>I like Tolkien</b>.</p>
    <blockquote>"I am in fact a Hobbit in all but size."  -- J.R.R. Tolkien</blockquote>
    <h2>Blog posts</h2>
    <ul><li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li><li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li></ul>
    <h2>Reasons I like Tolkien</h2>
    <ol><li>World-building</li><li><i>Languages</i></li><li><code>code</code> and stuff</li></ol>
    <pre><code>func main(){
        fmt.Println("Aragorn")
    }</code></pre>
    "#);
}

#[test]
fn test_kitchensink_title() {
    assert_eq!(
        extract_title(&fixture("kitchensink.md")).unwrap(),
        "Tolkien Fan Club"
    );
}

#[test]
fn test_format_parse_matches_function() {
    let markdown = fixture("kitchensink.md");
    let via_format = MarkdownFormat.parse(&markdown).unwrap();
    assert_eq!(via_format, compile(&markdown));
}

#[test]
fn test_paragraph_lines_are_joined() {
    assert_snapshot!(
        markdown_to_html("This is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with *italic* text and `code` here").unwrap(),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
}
