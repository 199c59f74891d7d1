//! Site publishing end to end

use crate::common::fixture;
use mdsite_babel::publish::{publish, PublishSpec};
use mdsite_babel::FormatError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_publish_site_with_default_template() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content/blog")).unwrap();
    fs::create_dir_all(root.join("static/images")).unwrap();
    fs::write(root.join("content/index.md"), fixture("kitchensink.md")).unwrap();
    fs::write(root.join("content/blog/tom.md"), "# Tom\n\nA mistake.").unwrap();
    fs::write(root.join("static/index.css"), "body { margin: 0; }").unwrap();
    fs::write(root.join("static/images/tolkien.png"), "png").unwrap();

    let spec = PublishSpec::new(root.join("content"), root.join("public"))
        .with_static_dir(root.join("static"))
        .with_base_path("/fanclub/");
    let report = publish(&spec).unwrap();

    assert_eq!(report.static_files.len(), 2);
    assert_eq!(report.pages.len(), 2);

    let index = fs::read_to_string(root.join("public/index.html")).unwrap();
    assert!(index.contains("<title> Tolkien Fan Club </title>"));
    assert!(index.contains(r#"<link href="/fanclub/index.css" rel="stylesheet">"#));
    assert!(index.contains(r#"<img src="/fanclub/images/tolkien.png" alt="JRR Tolkien sitting">"#));
    assert!(index.contains(r#"<a href="/fanclub/blog/tom">"#));
    assert!(!index.contains("{{ Content }}"));

    let post = fs::read_to_string(root.join("public/blog/tom.html")).unwrap();
    assert!(post.contains("<div><h1>Tom</h1><p>A mistake.</p></div>"));
}

#[test]
fn test_publish_stops_at_first_bad_page() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::write(root.join("content/a.md"), "# A\n\nbroken **bold").unwrap();
    fs::write(root.join("content/b.md"), "# B").unwrap();

    let spec = PublishSpec::new(root.join("content"), root.join("public"))
        .with_static_dir(root.join("static"));
    let result = publish(&spec);

    assert!(matches!(result, Err(FormatError::MalformedInline { .. })));
    assert!(!root.join("public/b.html").exists());
}

#[test]
fn test_publish_with_missing_template_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content")).unwrap();

    let spec = PublishSpec::new(root.join("content"), root.join("public"))
        .with_template(root.join("nope.html"));
    assert!(matches!(publish(&spec), Err(FormatError::Io { .. })));
}
