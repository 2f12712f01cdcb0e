//! Source positions and error management.

use std::fmt;
use thiserror::Error;

/// Position of a token in the source code.
/// All fields are 1-based. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Pos {
    /// Create a new `Pos` on `line` spanning the columns `start..end`.
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ln {} ({}:{})", self.line, self.start, self.end)
    }
}

/// Represents a syntax error (parse time error).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub pos: Pos,
}

impl SyntaxError {
    /// Create a new syntax error with the specified `message` and `pos`.
    pub fn new(message: impl ToString, pos: Pos) -> Self {
        Self {
            message: message.to_string(),
            pos,
        }
    }
}

/// Represents a failure while evaluating a program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Unknown var: {0}")]
    UnknownVariable(String),
    #[error("Not a function: {0}")]
    NotAFunction(String),
    #[error("Wrong number of arguments: expected {expected}, got {found}")]
    WrongArity { expected: usize, found: usize },
    #[error("Bad type: {lhs} {op} {rhs}")]
    BadBinaryOperand { lhs: String, op: String, rhs: String },
    #[error("Bad type: {op} {operand}")]
    BadUnaryOperand { op: String, operand: String },
    /// The value stack did not hold the operands a node needed.
    /// Only reachable through an evaluator bug.
    #[error("{0} stack error")]
    StackUnderflow(&'static str),
}

/// Any error that aborts a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Carried by an `Error` root node of a failed parse.
    #[error("{0}")]
    Syntax(String),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err.message)
    }
}

/// Renders a number the way JavaScript prints it: integral values without a
/// fraction, non-finite values as `Infinity`, `-Infinity` and `NaN`.
/// Magnitudes of at least `1e21` or below `1e-6` use exponent form, e.g. `1e-7`.
pub fn fmt_number(val: f64) -> String {
    if val.is_nan() {
        "NaN".to_string()
    } else if val.is_infinite() {
        let sign = if val > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if val == 0.0 {
        "0".to_string() // no negative zero
    } else if val.abs() >= 1e21 || val.abs() < 1e-6 {
        fmt_exponent(val)
    } else {
        val.to_string()
    }
}

/// `1.5e21` becomes `1.5e+21`. Negative exponents are kept as is.
fn fmt_exponent(val: f64) -> String {
    let text = format!("{:e}", val);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}
