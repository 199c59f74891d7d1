//! Format implementations
//!
//! This module contains all format implementations that convert between
//! text representations and the render tree.

pub mod html;
pub mod icons;
pub mod markdown;
pub mod treeviz;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use treeviz::{TreevizFormat, TreevizOptions};
