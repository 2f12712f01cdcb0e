//! Entry point tying the front end to the backends.

use quill_parser::lexer::{FuncLexer, TokenKind, TokenStream};
use quill_parser::parse;
use quill_passes::{compile::compile as compile_js, print::print};
use quill_source::Error;
use std::fmt;
use std::str::FromStr;

/// What [`compile`] produces from a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One line per token.
    Lex,
    /// The value of the last statement.
    Eval,
    /// Equivalent JavaScript.
    Compile,
    /// Indented dump of the syntax tree.
    Ast,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Ast
    }
}

impl From<&str> for Mode {
    /// Unrecognized names fall back to [`Mode::Ast`].
    fn from(name: &str) -> Self {
        match name {
            "lex" => Mode::Lex,
            "eval" => Mode::Eval,
            "compile" => Mode::Compile,
            _ => Mode::Ast,
        }
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(name.into())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Lex => "lex",
            Mode::Eval => "eval",
            Mode::Compile => "compile",
            Mode::Ast => "ast",
        })
    }
}

/// Dumps the tokens of `source` up to, but not including, the end of input.
/// Tokens are read the way the parser reads them, so function literals show their `Func` marker.
pub fn lex(source: &str) -> String {
    let mut tokens = FuncLexer::new(source);
    let mut lines = Vec::new();
    loop {
        let token = tokens.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        lines.push(token.to_string());
    }
    lines.join("\n")
}

/// Runs `source` through `mode` and returns the output or the error that stopped it.
pub fn try_compile(source: &str, mode: impl Into<Mode>) -> Result<String, Error> {
    match mode.into() {
        Mode::Lex => Ok(lex(source)),
        Mode::Eval => quill_eval::eval(&parse(source)),
        Mode::Compile => compile_js(&parse(source)),
        Mode::Ast => print(&parse(source)),
    }
}

/// Like [`try_compile`], but renders failures as `Error: <message>`.
pub fn compile(source: &str, mode: impl Into<Mode>) -> String {
    match try_compile(source, mode) {
        Ok(output) => output,
        Err(err) => format!("Error: {}", err),
    }
}
