//! Markdown format tests
//!
//! Tests for Markdown → render tree conversion.

mod blocks;
mod compile;
mod document;
