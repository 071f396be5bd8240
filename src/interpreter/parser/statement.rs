use crate::{
    ast::{Branch, BranchBody, ForInit, FunctionDef, Stmt, VarDecl},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `print` statement,
    /// - an `if`/`elif`/`else` statement,
    /// - a `return` statement,
    /// - a `for` or `while` loop,
    /// - an expression used as a statement.
    ///
    /// The leading keyword decides the form; without one, the input is
    /// parsed as an expression statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.line();

        if self.advance_if(&Token::Print) {
            return self.parse_print_statement(line);
        }
        if self.advance_if(&Token::If) {
            return self.parse_if_statement(line);
        }
        if self.advance_if(&Token::Return) {
            return self.parse_return_statement(line);
        }
        if self.advance_if(&Token::For) {
            return self.parse_for_statement(line);
        }
        if self.advance_if(&Token::While) {
            return self.parse_while_statement(line);
        }

        let expr = self.parse_expression()?;
        self.expect(&Token::Semicolon,
                    ParseError::ExpectedSemicolon { line: self.line() })?;
        Ok(Stmt::Expression { expr, line })
    }

    /// Parses a print statement after the `print` keyword.
    ///
    /// Grammar: `print_stmt := "print" "(" expression ")" ";"`
    fn parse_print_statement(&mut self, line: usize) -> ParseResult<Stmt> {
        self.expect(&Token::LParen,
                    ParseError::UnexpectedToken { token: "expected '(' after print".to_string(),
                                                  line:  self.line(), })?;
        let expr = self.parse_expression()?;
        self.expect(&Token::RParen,
                    ParseError::ExpectedClosingParen { line: self.line() })?;
        self.expect(&Token::Semicolon,
                    ParseError::ExpectedSemicolon { line: self.line() })?;
        Ok(Stmt::Print { expr, line })
    }

    /// Parses an `if` statement after the `if` keyword, including any chain
    /// of `elif` arms and an optional `else` body.
    ///
    /// Grammar:
    /// `if_stmt := "if" "(" expression ")" body ("elif" "(" expression ")" body)* ("else" body)?`
    fn parse_if_statement(&mut self, line: usize) -> ParseResult<Stmt> {
        let if_branch = self.parse_branch()?;

        let mut elif_branches = Vec::new();
        while self.advance_if(&Token::Elif) {
            elif_branches.push(self.parse_branch()?);
        }

        let else_body = if self.advance_if(&Token::Else) {
            Some(self.parse_branch_body()?)
        } else {
            None
        };

        Ok(Stmt::If { if_branch,
                      elif_branches,
                      else_body,
                      line })
    }

    /// Parses one `( condition )` + body arm of an `if`/`elif` chain.
    fn parse_branch(&mut self) -> ParseResult<Branch> {
        self.expect(&Token::LParen,
                    ParseError::UnexpectedToken { token: "expected '(' after keyword".to_string(),
                                                  line:  self.line(), })?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RParen,
                    ParseError::ExpectedClosingParen { line: self.line() })?;
        let body = self.parse_branch_body()?;
        Ok(Branch { condition, body })
    }

    /// Parses a branch or loop body: a braced block, or a single statement.
    pub(in crate::interpreter::parser) fn parse_branch_body(&mut self) -> ParseResult<BranchBody> {
        if self.check(&Token::LBrace) {
            Ok(BranchBody::Block(self.parse_block()?))
        } else {
            Ok(BranchBody::Single(Box::new(self.parse_statement()?)))
        }
    }

    /// Parses a return statement after the `return` keyword. The expression
    /// is optional; a bare `return;` returns nil.
    ///
    /// Grammar: `return_stmt := "return" expression? ";"`
    fn parse_return_statement(&mut self, line: usize) -> ParseResult<Stmt> {
        let expr = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&Token::Semicolon,
                    ParseError::ExpectedSemicolon { line: self.line() })?;
        Ok(Stmt::Return { expr, line })
    }

    /// Parses a C-style `for` loop after the `for` keyword.
    ///
    /// The header opens a scope of its own so a `for (var i = ...)`
    /// initializer stays local to the loop.
    ///
    /// Grammar:
    /// `for_stmt := "for" "(" (var_decl | expr_stmt | ";") expression ";" expression? ")" body`
    fn parse_for_statement(&mut self, line: usize) -> ParseResult<Stmt> {
        self.expect(&Token::LParen,
                    ParseError::UnexpectedToken { token: "expected '(' after for".to_string(),
                                                  line:  self.line(), })?;

        self.symbols.push_scope();
        let result = self.parse_for_rest(line);
        self.symbols.pop_scope();
        result
    }

    fn parse_for_rest(&mut self, line: usize) -> ParseResult<Stmt> {
        let init = if self.advance_if(&Token::Semicolon) {
            None
        } else if self.advance_if(&Token::Var) {
            Some(ForInit::Declaration(self.parse_var_declaration(false)?))
        } else if self.advance_if(&Token::Const) {
            Some(ForInit::Declaration(self.parse_var_declaration(true)?))
        } else {
            let expr = self.parse_expression()?;
            self.expect(&Token::Semicolon,
                        ParseError::ExpectedSemicolon { line: self.line() })?;
            Some(ForInit::Expression(expr))
        };

        let condition = self.parse_expression()?;
        self.expect(&Token::Semicolon,
                    ParseError::ExpectedSemicolon { line: self.line() })?;

        let step = if self.check(&Token::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&Token::RParen,
                    ParseError::ExpectedClosingParen { line: self.line() })?;

        let body = self.parse_branch_body()?;

        Ok(Stmt::For { init,
                       condition,
                       step,
                       body,
                       line })
    }

    /// Parses a `while` loop after the `while` keyword. The loop desugars
    /// onto the `For` node with no initializer and no step.
    ///
    /// Grammar: `while_stmt := "while" "(" expression ")" body`
    fn parse_while_statement(&mut self, line: usize) -> ParseResult<Stmt> {
        self.expect(&Token::LParen,
                    ParseError::UnexpectedToken { token: "expected '(' after while".to_string(),
                                                  line:  self.line(), })?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RParen,
                    ParseError::ExpectedClosingParen { line: self.line() })?;
        let body = self.parse_branch_body()?;

        Ok(Stmt::For { init: None,
                       condition,
                       step: None,
                       body,
                       line })
    }

    /// Parses a variable declaration after the `var` or `const` keyword.
    ///
    /// The name must not already be declared in the active scope; the
    /// declaration is recorded in the symbol table only once the whole
    /// statement parsed, so the initializer cannot see the name it is about
    /// to bind.
    ///
    /// Grammar: `var_decl := ("var" | "const") IDENT ("=" expression)? ";"`
    pub(in crate::interpreter::parser) fn parse_var_declaration(&mut self,
                                                                constant: bool)
                                                                -> ParseResult<VarDecl> {
        let (name, line) = self.expect_identifier()?;

        if self.symbols.declared_in_current(&name) {
            return Err(ParseError::DuplicateDeclaration { name, line });
        }

        let init = if self.advance_if(&Token::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(&Token::Semicolon,
                    ParseError::ExpectedSemicolon { line: self.line() })?;

        self.symbols.declare(&name, constant);
        Ok(VarDecl { name,
                     constant,
                     init,
                     line })
    }

    /// Parses a function declaration after the `fun` keyword.
    ///
    /// The function name enters the symbol table before the body parses, so
    /// recursive bodies can refer to it. Parameters are declared in a scope
    /// that wraps the body block.
    ///
    /// Grammar: `fun_decl := "fun" IDENT "(" parameters? ")" block`
    pub(in crate::interpreter::parser) fn parse_function_declaration(&mut self)
                                                                     -> ParseResult<FunctionDef> {
        let (name, line) = self.expect_identifier()?;

        if self.symbols.declared_in_current(&name) {
            return Err(ParseError::DuplicateDeclaration { name, line });
        }
        self.symbols.declare(&name, false);

        self.expect(&Token::LParen,
                    ParseError::UnexpectedToken { token: "expected '(' after function name".to_string(),
                                                  line:  self.line(), })?;

        let mut params = Vec::new();
        if !self.check(&Token::RParen) {
            loop {
                let (param, _) = self.expect_identifier()?;
                params.push(param);
                if !self.advance_if(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(&Token::RParen,
                    ParseError::ExpectedClosingParen { line: self.line() })?;

        self.symbols.push_scope();
        for param in &params {
            self.symbols.declare(param, false);
        }
        let result = self.parse_block();
        self.symbols.pop_scope();
        let body = result?;

        Ok(FunctionDef { name,
                         params,
                         body,
                         line })
    }
}
