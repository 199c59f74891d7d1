//! Page templates and title extraction.
//!
//! A page template is plain text with two placeholders, `{{ Title }}` and
//! `{{ Content }}`. Rendering substitutes both and then rebases root-relative
//! `href="/` and `src="/` references onto the site's base path, so the same
//! content can be served from `/` or from a sub-path such as `/blog/`.
//!
//! ```ignore
//! let template = PageTemplate::default();
//! let page = template.render("Home", "<div><p>hi</p></div>", "/blog/");
//! ```

use crate::error::FormatError;
use std::fs;
use std::path::Path;

/// The page template used when a site has none of its own.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.html");

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
const TITLE_MARKER: &str = "# ";

/// Find the page title: the first line starting with `# `, minus the marker.
pub fn extract_title(markdown: &str) -> Result<String, FormatError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(FormatError::MissingTitle)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    text: String,
}

impl PageTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a template from disk.
    pub fn from_file(path: &Path) -> Result<Self, FormatError> {
        fs::read_to_string(path)
            .map(Self::new)
            .map_err(|err| FormatError::io(path, err))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill in the placeholders and rebase root-relative references.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        self.text
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"))
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
