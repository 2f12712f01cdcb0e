use super::*;
use crate::ast::{BinaryOp, UnaryOp};

impl<S: TokenStream> Parser<S> {
    /* Expressions */
    /// Parses any expression.
    pub fn parse_exp(&mut self) -> ParseResult<Node> {
        match self.peek().kind {
            TokenKind::Func => self.parse_func_decl(),
            TokenKind::Let => self.parse_var_decl(),
            _ => self.parse_exp_bp(0), // 0 to accept any additive expression
        }
    }

    /// Parses additive and multiplicative expressions with the specified `min_bp`.
    /// Operands are unary expressions.
    fn parse_exp_bp(&mut self, min_bp: u8) -> ParseResult<Node> {
        let mut lhs = self.parse_unary_exp()?;

        loop {
            let kind = self.peek().kind;
            let (l_bp, r_bp) = match kind.binop_bp() {
                Some(bp) => bp,
                None => break, // not a valid binop, stop parsing
            };
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }
            let op = match BinaryOp::from_token(kind) {
                Some(op) => op,
                None => break,
            };
            self.next();

            let rhs = self.parse_exp_bp(r_bp)?;

            lhs = Node::BinOp {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /// Parses a prefix expression. Prefix operators bind looser than the left side of `**`.
    fn parse_unary_exp(&mut self) -> ParseResult<Node> {
        let op = match self.peek().kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Dash => UnaryOp::Minus,
            _ => return self.parse_power_exp(),
        };
        self.next();

        let exp = self.parse_unary_exp()?;
        Ok(Node::UnOp {
            op,
            exp: Box::new(exp),
        })
    }

    /// Parses `**`. The right side is a unary expression, which makes `**` right-associative.
    fn parse_power_exp(&mut self) -> ParseResult<Node> {
        let left = self.parse_postfix_exp()?;
        if !self.eat(TokenKind::Power) {
            return Ok(left);
        }

        let right = self.parse_unary_exp()?;
        Ok(Node::BinOp {
            op: BinaryOp::Pow,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parses a primary expression followed by at most one argument list.
    fn parse_postfix_exp(&mut self) -> ParseResult<Node> {
        let func = self.parse_primary_exp()?;
        if !self.eat(TokenKind::LParen) {
            return Ok(func);
        }

        let mut params = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            params.push(self.parse_exp()?);
            while self.eat(TokenKind::Comma) {
                params.push(self.parse_exp()?);
            }
        }
        self.expect(TokenKind::RParen)?;

        Ok(Node::FuncCall {
            func: Box::new(func),
            params,
        })
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_exp(&mut self) -> ParseResult<Node> {
        match self.peek().kind {
            TokenKind::Ident => {
                let ident = self.expect_ident()?;
                Ok(Node::VarId { ident })
            }
            TokenKind::IntConst => self.parse_int_lit(),
            _ => {
                self.expect(TokenKind::LParen)?;
                let exp = self.parse_exp()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::Paren { exp: Box::new(exp) })
            }
        }
    }

    /* Expressions.Literals */
    fn parse_int_lit(&mut self) -> ParseResult<Node> {
        let token = self.expect(TokenKind::IntConst)?;
        match token.value {
            Some(TokenValue::Int(val)) => Ok(Node::IntLit { val }),
            _ => Err(Self::missing_value(token.kind, token.pos)),
        }
    }
}
