use quill_parser::ast::Node;
use quill_source::fmt_number;
use std::fmt;

/// A function value. Borrows its parameters and body from the AST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Function<'ast> {
    pub params: &'ast [String],
    pub body: &'ast Node,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'ast> {
    Num(f64),
    Func(Function<'ast>),
}

impl Value<'_> {
    pub fn cast_to_number(&self) -> Option<f64> {
        match self {
            Self::Num(val) => Some(*val),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(val) => f.write_str(&fmt_number(*val)),
            Value::Func(func) => write!(f, "<fn({})>", func.params.join(", ")),
        }
    }
}
