use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (arithmetic, comparison, short-circuit logic or nullish
/// coalescing), `None` for all other tokens.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        Token::QuestionQuestion => Some(BinaryOperator::NullishCoalesce),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses an assignment, or falls through to the ternary level.
    ///
    /// The decision uses two tokens of lookahead, no backtracking: the
    /// current token must be an identifier, the next `=`, and the token
    /// after that must not already be a `;`. This keeps `x;` and `x = y;`
    /// apart without rewinding the cursor.
    ///
    /// Assignment targets are checked against the symbol table here: the
    /// name must be declared somewhere, and its nearest declaration must not
    /// be a constant.
    ///
    /// Grammar: `assignment := IDENT "=" assignment | ternary`
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Expr> {
        if let Some(Token::Identifier(_)) = self.peek()
           && matches!(self.peek_at(1), Some(Token::Equal))
           && !matches!(self.peek_at(2), Some(Token::Semicolon))
        {
            let (name, line) = self.expect_identifier()?;
            self.advance(); // consume '='
            let value = self.parse_assignment()?;

            if !self.symbols.is_declared(&name) {
                return Err(ParseError::UndefinedVariable { name, line });
            }
            if self.symbols.is_constant(&name) {
                return Err(ParseError::ConstReassignment { name, line });
            }

            return Ok(Expr::Assign { name,
                                     value: Box::new(value),
                                     line });
        }

        self.parse_ternary()
    }

    /// Parses a ternary conditional.
    ///
    /// Right-associative: `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
    ///
    /// Grammar: `ternary := nullish ("?" expression ":" ternary)?`
    pub(in crate::interpreter::parser) fn parse_ternary(&mut self) -> ParseResult<Expr> {
        let condition = self.parse_nullish()?;

        if let Some(Token::Question) = self.peek() {
            let line = self.line();
            self.advance();
            let then_expr = self.parse_expression()?;
            self.expect(&Token::Colon,
                        ParseError::UnexpectedToken { token: "expected ':' in ternary expression".to_string(),
                                                      line:  self.line(), })?;
            let else_expr = self.parse_ternary()?;

            return Ok(Expr::Ternary { condition: Box::new(condition),
                                      then_expr: Box::new(then_expr),
                                      else_expr: Box::new(else_expr),
                                      line });
        }

        Ok(condition)
    }

    /// Parses nullish coalescing expressions.
    ///
    /// Grammar: `nullish := logic_or ("??" logic_or)*`
    pub(in crate::interpreter::parser) fn parse_nullish(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_or()?;

        while let Some(Token::QuestionQuestion) = self.peek() {
            let line = self.line();
            self.advance();
            let right = self.parse_logical_or()?;
            left = Expr::Binary { left:  Box::new(left),
                                  op:    BinaryOperator::NullishCoalesce,
                                  right: Box::new(right),
                                  line };
        }

        Ok(left)
    }

    /// Parses logical OR expressions.
    ///
    /// Grammar: `logic_or := logic_and ("||" logic_and)*`
    pub(in crate::interpreter::parser) fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;

        while let Some(Token::OrOr) = self.peek() {
            let line = self.line();
            self.advance();
            let right = self.parse_logical_and()?;
            left = Expr::Binary { left:  Box::new(left),
                                  op:    BinaryOperator::Or,
                                  right: Box::new(right),
                                  line };
        }

        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// Grammar: `logic_and := equality ("&&" equality)*`
    pub(in crate::interpreter::parser) fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;

        while let Some(Token::AndAnd) = self.peek() {
            let line = self.line();
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::Binary { left:  Box::new(left),
                                  op:    BinaryOperator::And,
                                  right: Box::new(right),
                                  line };
        }

        Ok(left)
    }

    /// Parses equality expressions.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    pub(in crate::interpreter::parser) fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;

        loop {
            if let Some(token) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
            {
                let line = self.line();
                self.advance();
                let right = self.parse_comparison()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line };
                continue;
            }
            break;
        }

        Ok(left)
    }

    /// Parses relational expressions.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;

        loop {
            if let Some(token) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op,
                           BinaryOperator::Less
                           | BinaryOperator::LessEqual
                           | BinaryOperator::Greater
                           | BinaryOperator::GreaterEqual)
            {
                let line = self.line();
                self.advance();
                let right = self.parse_term()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line };
                continue;
            }
            break;
        }

        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `term := factor (("-" | "+") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;

        loop {
            if let Some(token) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let line = self.line();
                self.advance();
                let right = self.parse_factor()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line };
                continue;
            }
            break;
        }

        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `factor := unary (("*" | "/") unary)*`
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            if let Some(token) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let line = self.line();
                self.advance();
                let right = self.parse_unary()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line };
                continue;
            }
            break;
        }

        Ok(left)
    }
}
