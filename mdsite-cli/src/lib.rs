//! Library half of the mdsite CLI, shared by the binary and its tests.

pub mod transforms;
