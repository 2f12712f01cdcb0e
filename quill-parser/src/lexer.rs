use logos::Logos;
use quill_source::{fmt_number, Pos};
use std::fmt;

mod func;

pub use func::FuncLexer;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // assignment
    #[token("=")]
    Assign,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,

    // binary operators
    #[token("+")]
    Plus, // NOTE: can also be unary
    #[token("-")]
    Dash, // NOTE: can also be unary
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    Power,

    // conditions
    #[token("==")]
    Equal,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,

    // unary operators
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,

    // brackets
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,

    // literals
    #[regex("0|[1-9][0-9]*")]
    #[regex("0[0-7]+")]
    #[regex("0[xX][0-9a-fA-F]*")]
    IntConst,
    #[regex(r"(0|[1-9][0-9]*)\.[0-9]*([eE]-?[0-9]*)?")]
    #[regex(r"\.[0-9]+([eE]-?[0-9]*)?")]
    FloatConst,
    #[token("true")]
    #[token("false")]
    BoolConst,

    // identifiers
    #[regex("[A-Za-z_][A-Za-z0-9]*")]
    Ident,

    // keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("while")]
    While,
    #[token("let")]
    Let,
    #[token("return")]
    Return,

    // punctuation
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("'")]
    Quote,
    #[token("=>")]
    Arrow,
    #[token("\n")]
    Newline,

    /// Marks a `(` that opens a function literal.
    /// Only generated by [`FuncLexer`].
    Func,
    /// Only generated by [`Lexer`] once the source is exhausted.
    Eof,

    // misc
    #[regex(r"[ \t\r]+", logos::skip)]
    #[error]
    Unknown,
}

impl TokenKind {
    /// Returns the binary binding power or `None` if invalid binop token.
    /// Binding power `0` is reserved for accepting any expression.
    /// `**` is not listed here: it is right-associative and parsed on its own.
    pub fn binop_bp(&self) -> Option<(u8, u8)> {
        match self {
            /* Additive */
            TokenKind::Plus | TokenKind::Dash => Some((1, 2)),
            /* Multiplicative */
            TokenKind::Star | TokenKind::Slash => Some((3, 4)),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Newline => f.write_str("NEWLINE"),
            TokenKind::Eof => f.write_str("EOF"),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// Literal payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(val) => write!(f, "{}", val),
            TokenValue::Float(val) => f.write_str(&fmt_number(*val)),
            TokenValue::Bool(val) => write!(f, "{}", val),
            TokenValue::Str(val) => f.write_str(val),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, value: Option<TokenValue>, pos: Pos) -> Self {
        Self { kind, value, pos }
    }
}

/// Formats a token as `<TYPE>: <value> ln <line> (<start>:<end>)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, " {}", self.pos)
    }
}

/// A source of tokens consumed one at a time.
pub trait TokenStream {
    /// Returns the next token. Once the source is exhausted, every call returns a [`TokenKind::Eof`] token.
    fn next_token(&mut self) -> Token;
}

/// Turns source code into [`Token`]s.
///
/// Newlines are only significant outside of parentheses: while the paren depth is
/// positive they are swallowed and no [`TokenKind::Newline`] is emitted.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    line: usize,
    /// Column of the next token. Only advanced by token lengths.
    column: usize,
    /// Number of unmatched `(`. A stray `)` drives it negative.
    paren_depth: i32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            line: 1,
            column: 1,
            paren_depth: 0,
        }
    }

    pub fn paren_depth(&self) -> i32 {
        self.paren_depth
    }

    fn make_token(&mut self, kind: TokenKind, len: usize, value: Option<TokenValue>) -> Token {
        let start = self.column;
        self.column += len;
        Token::new(kind, value, Pos::new(self.line, start, self.column))
    }

    /// Makes a token out of a literal. Integers that do not fit in an `i64` become [`TokenKind::Unknown`].
    fn literal_token(&mut self, kind: TokenKind, slice: &str) -> Token {
        let value = match kind {
            TokenKind::IntConst => match parse_int(slice) {
                Some(val) => TokenValue::Int(val),
                None => {
                    let text = TokenValue::Str(slice.to_string());
                    return self.make_token(TokenKind::Unknown, slice.len(), Some(text));
                }
            },
            TokenKind::FloatConst => TokenValue::Float(parse_float(slice)),
            TokenKind::BoolConst => TokenValue::Bool(slice == "true"),
            _ => TokenValue::Str(slice.to_string()),
        };
        self.make_token(kind, slice.len(), Some(value))
    }
}

impl TokenStream for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        loop {
            let kind = match self.inner.next() {
                Some(kind) => kind,
                None => return self.make_token(TokenKind::Eof, 0, None),
            };

            match kind {
                TokenKind::Newline => {
                    let pos = Pos::new(self.line, self.column, self.column);
                    self.line += 1;
                    self.column = 1;
                    if self.paren_depth == 0 {
                        return Token::new(kind, None, pos);
                    }
                }
                TokenKind::LParen => {
                    self.paren_depth += 1;
                    return self.make_token(kind, 1, None);
                }
                TokenKind::RParen => {
                    self.paren_depth -= 1;
                    return self.make_token(kind, 1, None);
                }
                TokenKind::IntConst
                | TokenKind::FloatConst
                | TokenKind::BoolConst
                | TokenKind::Ident => {
                    let slice = self.inner.slice();
                    return self.literal_token(kind, slice);
                }
                TokenKind::Unknown => {
                    let start = self.inner.span().start;
                    let source = self.inner.source();
                    if !source.is_char_boundary(start) {
                        continue; // tail of a multi-byte character that was already reported
                    }
                    if let Some(ch) = source[start..].chars().next() {
                        return self.make_token(kind, 1, Some(TokenValue::Str(ch.to_string())));
                    }
                }
                _ => {
                    let len = self.inner.slice().len();
                    return self.make_token(kind, len, None);
                }
            }
        }
    }
}

/// Parses a decimal, octal (`017`) or hexadecimal (`0x1F`) integer literal.
fn parse_int(slice: &str) -> Option<i64> {
    let (digits, radix) = if slice.starts_with("0x") || slice.starts_with("0X") {
        (&slice[2..], 16)
    } else if slice.len() > 1 && slice.starts_with('0') {
        (&slice[1..], 8)
    } else {
        (slice, 10)
    };
    i64::from_str_radix(digits, radix).ok()
}

/// Parses the longest valid prefix of a float literal, e.g. `1.5e-` is `1.5`.
fn parse_float(slice: &str) -> f64 {
    slice
        .trim_end_matches(|ch| matches!(ch, 'e' | 'E' | '-'))
        .parse()
        .unwrap_or(f64::NAN)
}
