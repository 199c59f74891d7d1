//! Intermediate Representation (IR) for mdsite documents.
//!
//! The IR sits between the markdown source and the render-node tree: inline
//! text is tokenized into [`nodes::InlineSpan`]s and blank-line separated
//! blocks are classified into [`nodes::BlockKind`]s. Both are closed sets so
//! every consumer matches on them exhaustively.

pub mod nodes;
