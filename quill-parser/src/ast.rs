use crate::lexer::TokenKind;
use std::fmt;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Right-associative exponentiation (`**`).
    Pow,
}

impl BinaryOp {
    /// Returns the operator for a binop token or `None` if `kind` is not one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Power => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A failed parse. Only ever the root of a tree.
    Error { msg: String },
    /// The statements of a program, in order.
    ExpList { exps: Vec<Node> },
    IntLit { val: i64 },
    /// A binary expression (e.g. `1+1`).
    BinOp {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// A prefix expression (e.g. `-1`).
    UnOp { op: UnaryOp, exp: Box<Node> },
    /// Explicit grouping (e.g. `(1+1)`).
    Paren { exp: Box<Node> },
    /// `let ident = exp`. Evaluates to the bound value.
    VarDecl { ident: String, exp: Box<Node> },
    /// An identifier (e.g. `foo`).
    VarId { ident: String },
    /// An anonymous function (e.g. `(x, y) => x + y`).
    FuncDecl { params: Vec<String>, exp: Box<Node> },
    /// A call expression (e.g. `f(1, 2)`).
    FuncCall { func: Box<Node>, params: Vec<Node> },
}
