//! Function literal detection.
//!
//! `(x) => x + x` and `(x) + x` only differ after the matching `)`, but the parser has to
//! know which one it is looking at before it consumes the `(`. [`FuncLexer`] scans ahead
//! on every `(` and inserts a [`TokenKind::Func`] token in front of the ones that open a
//! parameter list.

use super::{Lexer, Token, TokenKind, TokenStream};
use quill_source::Pos;
use std::collections::VecDeque;

/// Wraps a [`Lexer`] and marks the `(` of function literals with a [`TokenKind::Func`] token.
///
/// Tokens lexed while scanning ahead are queued and replayed in order, so every token of
/// the underlying lexer is returned exactly once.
pub struct FuncLexer<'a> {
    lexer: Lexer<'a>,
    /// Tokens already pulled from `lexer` but not yet returned.
    lookahead: VecDeque<Token>,
    /// The `(` to return right after a [`TokenKind::Func`] token.
    func_paren: Option<Token>,
}

impl<'a> FuncLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::wrap(Lexer::new(source))
    }

    pub fn wrap(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            lookahead: VecDeque::new(),
            func_paren: None,
        }
    }

    /// Returns the token at `index` in the lookahead buffer, lexing more tokens if needed.
    fn lookahead_at(&mut self, index: usize) -> &Token {
        while self.lookahead.len() <= index {
            let token = self.lexer.next_token();
            self.lookahead.push_back(token);
        }
        &self.lookahead[index]
    }

    /// Scans past the `)` matching an already consumed `(` and checks whether it is followed by `=>`.
    fn is_func_paren(&mut self) -> bool {
        let mut depth = 1;
        let mut index = 0;
        loop {
            let kind = self.lookahead_at(index).kind;
            index += 1;
            match kind {
                TokenKind::Eof => return false,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return self.lookahead_at(index).kind == TokenKind::Arrow;
                    }
                }
                _ => {}
            }
        }
    }
}

impl TokenStream for FuncLexer<'_> {
    fn next_token(&mut self) -> Token {
        if let Some(paren) = self.func_paren.take() {
            return paren;
        }

        let token = match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token(),
        };

        if token.kind == TokenKind::LParen && self.is_func_paren() {
            let pos = Pos::new(token.pos.line, token.pos.start, token.pos.start);
            self.func_paren = Some(token);
            return Token::new(TokenKind::Func, None, pos);
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn collect(mut tokens: impl TokenStream) -> Vec<Token> {
        let mut result = Vec::new();
        loop {
            let token = tokens.next_token();
            if token.kind == Eof {
                break;
            }
            result.push(token);
        }
        result
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        collect(FuncLexer::new(source))
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_func_literal() {
        assert_eq!(
            kinds("(x) => x"),
            vec![Func, LParen, Ident, RParen, Arrow, Ident]
        );
        assert_eq!(
            kinds("(a, b) => a"),
            vec![Func, LParen, Ident, Comma, Ident, RParen, Arrow, Ident]
        );
    }

    #[test]
    fn test_paren_expr() {
        assert_eq!(
            kinds("(1+2)*3"),
            vec![LParen, IntConst, Plus, IntConst, RParen, Star, IntConst]
        );
        assert_eq!(kinds("(x) + x"), vec![LParen, Ident, RParen, Plus, Ident]);
    }

    #[test]
    fn test_nested_parens() {
        // only the outer paren is followed by `=>`
        assert_eq!(
            kinds("((x)) => x"),
            vec![Func, LParen, LParen, Ident, RParen, RParen, Arrow, Ident]
        );
        // function literal passed as an argument
        assert_eq!(
            kinds("g((x) => x, 1)"),
            vec![Ident, LParen, Func, LParen, Ident, RParen, Arrow, Ident, Comma, IntConst, RParen]
        );
    }

    #[test]
    fn test_unmatched_paren() {
        assert_eq!(
            kinds("(1 + (2"),
            vec![LParen, IntConst, Plus, LParen, IntConst]
        );
    }

    #[test]
    fn test_func_position() {
        let tokens = collect(FuncLexer::new("f = (x) => x"));
        assert_eq!(tokens[2].kind, Func);
        assert_eq!(tokens[2].pos, Pos::new(1, 3, 3));
        assert_eq!(tokens[3].kind, LParen);
        assert_eq!(tokens[3].pos, Pos::new(1, 3, 4));
    }

    #[test]
    fn test_replay_is_lossless() {
        let sources = [
            "let f = (x) => x+x\nf(5)",
            "(1+2)*3",
            "g((a, b) => (a), (c))(\n1)",
            "((((",
            "(x) => (y) => x + y\n\n(1)",
            ") => (",
        ];
        for source in sources.iter() {
            let raw = collect(Lexer::new(source));
            let wrapped: Vec<Token> = collect(FuncLexer::new(source))
                .into_iter()
                .filter(|token| token.kind != Func)
                .collect();
            assert_eq!(raw, wrapped, "tokens of {:?}", source);
        }
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = FuncLexer::new("(x");
        assert_eq!(lexer.next_token().kind, LParen);
        assert_eq!(lexer.next_token().kind, Ident);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, Eof);
        }
    }
}
