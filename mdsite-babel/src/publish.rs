//! Site publishing pipeline.
//!
//! Turns a content tree of markdown files into a static site:
//!
//!     static/  ──copy──────────────────────────────▶ public/
//!     content/**/*.md ──markdown → html → template──▶ public/**/*.html
//!
//! The output directory is emptied first, then static assets are copied, then
//! every markdown page is rendered. The first failing page aborts the build.
//!
//! For single documents, use [`crate::markdown_to_html`] or the
//! [`FormatRegistry`](crate::FormatRegistry) directly.

use crate::error::FormatError;
use crate::markdown_to_html;
use crate::templates::{extract_title, PageTemplate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = "md";
const PAGE_EXTENSION: &str = "html";

/// Specifies how to publish a site.
///
/// ```ignore
/// let spec = PublishSpec::new("content", "public")
///     .with_static_dir("static")
///     .with_base_path("/blog/");
/// let report = publish(&spec)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSpec {
    /// Root of the markdown content tree.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output. Skipped if missing.
    pub static_dir: PathBuf,
    /// Destination directory; emptied before publishing.
    pub output_dir: PathBuf,
    /// Page template file. `None` uses the built-in template.
    pub template: Option<PathBuf>,
    /// Prefix substituted for root-relative `href` and `src` references.
    pub base_path: String,
}

impl PublishSpec {
    pub fn new(content_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            static_dir: PathBuf::from("static"),
            output_dir: output_dir.as_ref().to_path_buf(),
            template: None,
            base_path: "/".to_string(),
        }
    }

    pub fn with_static_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.static_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn with_template(mut self, path: impl AsRef<Path>) -> Self {
        self.template = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }
}

/// What a publish run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Files copied from the static directory.
    pub static_files: Vec<PathBuf>,
    /// Pages rendered from markdown.
    pub pages: Vec<PathBuf>,
}

/// Publishes a site as described by `spec`.
pub fn publish(spec: &PublishSpec) -> Result<PublishReport, FormatError> {
    let template = match &spec.template {
        Some(path) => PageTemplate::from_file(path)?,
        None => PageTemplate::default(),
    };

    let static_files = if spec.static_dir.is_dir() {
        copy_static(&spec.static_dir, &spec.output_dir)?
    } else {
        warn!(dir = %spec.static_dir.display(), "static directory not found, skipping");
        reset_dir(&spec.output_dir)?;
        Vec::new()
    };

    let pages = generate_pages_recursive(
        &spec.content_dir,
        &template,
        &spec.output_dir,
        &spec.base_path,
    )?;

    info!(
        pages = pages.len(),
        static_files = static_files.len(),
        output = %spec.output_dir.display(),
        "site published"
    );
    Ok(PublishReport {
        static_files,
        pages,
    })
}

/// Empty `dst` (creating it if needed), then copy `src` into it recursively.
///
/// Returns the destination path of every copied file.
pub fn copy_static(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, FormatError> {
    reset_dir(dst)?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| walk_error(src, err))?;
        let target = dst.join(relative_to(entry.path(), src));

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|err| FormatError::io(&target, err))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|err| FormatError::io(entry.path(), err))?;
            debug!(from = %entry.path().display(), to = %target.display(), "copied");
            copied.push(target);
        }
    }
    Ok(copied)
}

/// Render one markdown file into a page.
pub fn generate_page(
    from: &Path,
    template: &PageTemplate,
    dest: &Path,
    base_path: &str,
) -> Result<(), FormatError> {
    info!(from = %from.display(), to = %dest.display(), "generating page");

    let markdown = fs::read_to_string(from).map_err(|err| FormatError::io(from, err))?;
    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;
    let page = template.render(&title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|err| FormatError::io(parent, err))?;
    }
    fs::write(dest, page).map_err(|err| FormatError::io(dest, err))
}

/// Render every `*.md` under `content_dir` to the same relative path under
/// `dest_dir`, with an `.html` extension. Other files are skipped.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &PageTemplate,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, FormatError> {
    fs::create_dir_all(dest_dir).map_err(|err| FormatError::io(dest_dir, err))?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.map_err(|err| walk_error(content_dir, err))?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        let dest = dest_dir
            .join(relative_to(entry.path(), content_dir))
            .with_extension(PAGE_EXTENSION);
        generate_page(entry.path(), template, &dest, base_path)?;
        pages.push(dest);
    }
    Ok(pages)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn reset_dir(dir: &Path) -> Result<(), FormatError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|err| FormatError::io(dir, err))?;
    }
    fs::create_dir_all(dir).map_err(|err| FormatError::io(dir, err))
}

fn walk_error(root: &Path, err: walkdir::Error) -> FormatError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    FormatError::io(path, source)
}
