use crate::ast::Node;
use crate::lexer::{FuncLexer, Token, TokenKind, TokenStream, TokenValue};
use quill_source::{Pos, SyntaxError};
use std::mem;

mod decl;
mod expr;

pub type ParseResult<T> = Result<T, SyntaxError>;

pub struct Parser<S> {
    /// Cached token for peeking.
    current_token: Token,
    tokens: S,
}

impl<'a> Parser<FuncLexer<'a>> {
    /// Create a parser reading `source` through a [`FuncLexer`].
    pub fn from_source(source: &'a str) -> Self {
        Self::new(FuncLexer::new(source))
    }
}

impl<S: TokenStream> Parser<S> {
    pub fn new(mut tokens: S) -> Self {
        Self {
            current_token: tokens.next_token(),
            tokens,
        }
    }

    /// Parses a whole program.
    /// Never fails: a syntax error anywhere turns the whole result into a single [`Node::Error`].
    pub fn parse_program(&mut self) -> Node {
        let result = self.parse_exp_list().and_then(|exp_list| {
            self.expect(TokenKind::Eof)?;
            Ok(exp_list)
        });
        match result {
            Ok(exp_list) => exp_list,
            Err(err) => Node::Error { msg: err.message },
        }
    }

    /// Parses newline separated expressions.
    /// Blank lines between and after expressions are skipped.
    fn parse_exp_list(&mut self) -> ParseResult<Node> {
        let mut exps = vec![self.parse_exp()?];

        while self.eat(TokenKind::Newline) {
            match self.peek().kind {
                TokenKind::Newline => continue,
                TokenKind::Eof => break,
                _ => exps.push(self.parse_exp()?),
            }
        }

        Ok(Node::ExpList { exps })
    }
}

/// Parse utilities
impl<S: TokenStream> Parser<S> {
    fn peek(&self) -> &Token {
        &self.current_token
    }

    fn next(&mut self) -> Token {
        let token = self.tokens.next_token();
        mem::replace(&mut self.current_token, token)
    }

    /// Predicate that tests whether the next token is of kind `kind` and eats the next token if yes as a side effect.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token.kind == kind {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.current_token.kind == kind {
            Ok(self.next())
        } else {
            Err(self.unexpected(kind))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        let token = self.expect(TokenKind::Ident)?;
        match token.value {
            Some(TokenValue::Str(ident)) => Ok(ident),
            _ => Err(Self::missing_value(token.kind, token.pos)),
        }
    }

    /// Error for a literal or identifier token that arrived without its payload.
    fn missing_value(kind: TokenKind, pos: Pos) -> SyntaxError {
        SyntaxError::new(format!("Missing value for {}", kind), pos)
    }

    /// Creates an unexpected token error.
    fn unexpected(&self, expected: TokenKind) -> SyntaxError {
        SyntaxError::new(
            format!("Expected {}, got {}", expected, self.current_token.kind),
            self.current_token.pos,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    fn program(source: &str) -> Node {
        Parser::from_source(source).parse_program()
    }

    fn error(msg: &str) -> Node {
        Node::Error {
            msg: msg.to_string(),
        }
    }

    #[test]
    fn test_exp_list() {
        assert_debug_snapshot!(program("1\n\n2\n"), @r###"
        ExpList {
            exps: [
                IntLit {
                    val: 1,
                },
                IntLit {
                    val: 2,
                },
            ],
        }
        "###);
    }

    #[test]
    fn test_newline_inside_parens() {
        assert_debug_snapshot!(program("(1+\n2)"), @r###"
        ExpList {
            exps: [
                Paren {
                    exp: BinOp {
                        op: Add,
                        left: IntLit {
                            val: 1,
                        },
                        right: IntLit {
                            val: 2,
                        },
                    },
                },
            ],
        }
        "###);
    }

    #[test]
    fn test_errors() {
        assert_eq!(program("1 +"), error("Expected LParen, got EOF"));
        assert_eq!(program("(1"), error("Expected RParen, got EOF"));
        assert_eq!(program("1 2"), error("Expected EOF, got IntConst"));
        assert_eq!(program("1 # 2"), error("Expected EOF, got Unknown"));
        assert_eq!(program("let = 1"), error("Expected Ident, got Assign"));
        assert_eq!(program("1.5"), error("Expected LParen, got FloatConst"));
        assert_eq!(program(""), error("Expected LParen, got EOF"));
        // leading blank lines are not skipped
        assert_eq!(program("\n1"), error("Expected LParen, got NEWLINE"));
    }

    #[test]
    fn test_one_bad_statement_fails_the_program() {
        assert_eq!(program("1\n2 +\n3"), error("Expected LParen, got NEWLINE"));
    }

    /// Replays a fixed list of tokens, then `Eof`.
    struct Replay(Vec<Token>);

    impl TokenStream for Replay {
        fn next_token(&mut self) -> Token {
            if self.0.is_empty() {
                Token::new(TokenKind::Eof, None, Pos::new(1, 9, 9))
            } else {
                self.0.remove(0)
            }
        }
    }

    #[test]
    fn test_tokens_without_payload() {
        let ident = Token::new(TokenKind::Ident, None, Pos::new(1, 1, 2));
        assert_eq!(
            Parser::new(Replay(vec![ident])).parse_program(),
            error("Missing value for Ident")
        );

        let int = Token::new(TokenKind::IntConst, Some(TokenValue::Bool(true)), Pos::new(1, 1, 2));
        assert_eq!(
            Parser::new(Replay(vec![int])).parse_program(),
            error("Missing value for IntConst")
        );
    }
}
