//! HTML and treeviz serialization tests

mod serialize;
mod treeviz;
