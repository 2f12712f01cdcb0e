//! Front end: lexer, parser, AST and visitor dispatch.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;

use ast::Node;
use parser::Parser;

/// Parses `source` into a [`Node::ExpList`], or a single [`Node::Error`] if it is malformed.
pub fn parse(source: &str) -> Node {
    Parser::from_source(source).parse_program()
}
