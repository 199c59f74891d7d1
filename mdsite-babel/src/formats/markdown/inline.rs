//! Inline span tokenizer
//!
//! Turns one run of inline markdown into an ordered list of [`InlineSpan`]s.
//! Tokenization is a fixed sequence of passes, each one operating on the
//! output of the previous:
//!
//!     bold (`**`) → italic (`*`) → code (`` ` ``) → image (`![alt](url)`) → link (`[text](url)`)
//!
//! A pass only splits spans that are still plain text. Anything typed by an
//! earlier pass is passed through untouched, so markers never nest: `*` inside
//! a bold span stays literal.
//!
//! The delimiter passes are strict: an odd number of delimiters in a span is a
//! [`FormatError::MalformedInline`]. Image and link passes never fail; syntax
//! that does not match is simply left as text.

use crate::error::FormatError;
use crate::ir::nodes::{InlineSpan, SpanKind};
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image pattern"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link pattern"));

/// A `[text](url)` or `![alt](url)` occurrence found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownRef {
    pub text: String,
    pub url: String,
    start: usize,
    end: usize,
}

/// Tokenize a run of inline markdown.
///
/// Empty input yields no spans; input without markup yields one text span.
pub fn text_to_spans(text: &str) -> Result<Vec<InlineSpan>, FormatError> {
    let spans = vec![InlineSpan::text(text)];
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_spans_image(spans);
    Ok(split_spans_link(spans))
}

/// Split plain spans on `delimiter`, typing every odd piece as `kind`.
pub fn split_spans_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<InlineSpan>, FormatError> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        // Parity is checked before empty pieces are dropped.
        if pieces.len() % 2 == 0 {
            return Err(FormatError::MalformedInline {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (index, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if index % 2 == 0 { SpanKind::Text } else { kind };
            result.push(InlineSpan {
                kind: piece_kind,
                text: piece.to_string(),
                target: None,
            });
        }
    }
    Ok(result)
}

/// Find every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<MarkdownRef> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("group 0 always matches");
            MarkdownRef {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
                start: whole.start(),
                end: whole.end(),
            }
        })
        .collect()
}

/// Find every `[text](url)` in `text` that is not image syntax, left to right.
pub fn extract_markdown_links(text: &str) -> Vec<MarkdownRef> {
    LINK_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).expect("group 0 always matches");
            if text[..whole.start()].ends_with('!') {
                return None;
            }
            Some(MarkdownRef {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Split image syntax out of plain spans.
pub fn split_spans_image(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_refs(spans, extract_markdown_images, |alt, url| {
        InlineSpan::image(alt, url)
    })
}

/// Split link syntax out of plain spans.
pub fn split_spans_link(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_refs(spans, extract_markdown_links, |text, url| {
        InlineSpan::link(text, url)
    })
}

fn split_spans_refs(
    spans: Vec<InlineSpan>,
    extract: fn(&str) -> Vec<MarkdownRef>,
    build: fn(String, String) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let refs = extract(&span.text);
        if refs.is_empty() {
            result.push(span);
            continue;
        }

        let mut cursor = 0;
        for found in refs {
            let before = &span.text[cursor..found.start];
            if !before.is_empty() {
                result.push(InlineSpan::text(before));
            }
            result.push(build(found.text, found.url));
            cursor = found.end;
        }
        let rest = &span.text[cursor..];
        if !rest.is_empty() {
            result.push(InlineSpan::text(rest));
        }
    }
    result
}
