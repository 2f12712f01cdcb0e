use super::*;

impl<S: TokenStream> Parser<S> {
    /// Parses `let ident = exp`.
    pub(super) fn parse_var_decl(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Let)?;
        let ident = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let exp = self.parse_exp()?;
        Ok(Node::VarDecl {
            ident,
            exp: Box::new(exp),
        })
    }

    /// Parses a function literal. The leading [`TokenKind::Func`] is inserted by [`FuncLexer`].
    pub(super) fn parse_func_decl(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Func)?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_arg_list()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Arrow)?;
        let exp = self.parse_exp()?;
        Ok(Node::FuncDecl {
            params,
            exp: Box::new(exp),
        })
    }

    /// Parses comma separated parameter names. The list may be empty.
    fn parse_arg_list(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();
        if self.peek().kind != TokenKind::Ident {
            return Ok(params);
        }

        params.push(self.expect_ident()?);
        while self.eat(TokenKind::Comma) {
            params.push(self.expect_ident()?);
        }
        Ok(params)
    }
}
