//! Backends that turn an AST back into text.

pub mod compile;
pub mod print;
