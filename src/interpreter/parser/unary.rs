use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports the prefix operators `-` (numeric negation) and `!` (logical
    /// not). Unary operators are right-associative, so `!-x` parses as
    /// `!(-x)`. Without a prefix operator this delegates to the call level.
    ///
    /// Grammar: `unary := ("!" | "-") unary | call`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(Token::Minus) = self.peek() {
            let line = self.line();
            self.advance();
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary { op: UnaryOperator::Negate,
                                    expr: Box::new(expr),
                                    line });
        }

        if let Some(Token::Bang) = self.peek() {
            let line = self.line();
            self.advance();
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary { op: UnaryOperator::Not,
                                    expr: Box::new(expr),
                                    line });
        }

        self.parse_call()
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// Each `(` after a primary opens an argument list, and the result of
    /// one call can be called again, so `f(1)(2)` chains.
    ///
    /// Grammar: `call := primary ("(" arguments? ")")*`
    pub(in crate::interpreter::parser) fn parse_call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.check(&Token::LParen) {
            let line = self.line();
            self.advance();
            let arguments = self.parse_arguments()?;
            expr = Expr::Call { callee: Box::new(expr),
                                arguments,
                                line };
        }

        Ok(expr)
    }

    /// Parses a comma-separated argument list up to and including the
    /// closing `)`. An immediately encountered `)` produces an empty list.
    ///
    /// Grammar: `arguments := expression ("," expression)*`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.advance_if(&Token::RParen) {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_expression()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.advance();
                },
                Some(Token::RParen) => {
                    self.advance();
                    break;
                },
                Some(token) => {
                    return Err(ParseError::UnexpectedToken { token: format!("expected ',' or ')', found {token:?}"),
                                                             line:  self.line(), });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
            }
        }

        Ok(arguments)
    }

    /// Parses a primary (atomic) expression: a literal, a variable
    /// reference, or a parenthesized expression.
    ///
    /// Grammar:
    /// `primary := TRUE | FALSE | NIL | NUMBER | STRING | IDENT | "(" expression ")"`
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let eof_line = self.line();

        match self.advance() {
            Some((Token::False, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                                             line }),
            Some((Token::True, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                                            line }),
            Some((Token::Nil, line)) => Ok(Expr::Literal { value: LiteralValue::Nil,
                                                           line }),
            Some((Token::Number(n), line)) => Ok(Expr::Literal { value: LiteralValue::Number(n),
                                                                 line }),
            Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s),
                                                              line }),
            Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name, line }),
            Some((Token::LParen, line)) => {
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen,
                            ParseError::ExpectedClosingParen { line: self.line() })?;
                Ok(Expr::Grouping { expr: Box::new(expr),
                                    line })
            },
            Some((token, line)) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                                     line }),
            None => Err(ParseError::UnexpectedEndOfInput { line: eof_line }),
        }
    }
}
