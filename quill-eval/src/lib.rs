//! Tree-walking evaluator with dynamically scoped functions.

pub mod eval;
pub mod scope;
pub mod value;

pub use eval::{eval, Evaluator};
