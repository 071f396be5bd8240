use crate::{
    ast::{Block, Decl},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses one declaration: a `var`/`const` declaration, a `fun`
    /// declaration, a nested block, or a statement.
    ///
    /// Grammar: `declaration := var_decl | fun_decl | block | statement`
    pub(in crate::interpreter::parser) fn parse_declaration(&mut self) -> ParseResult<Decl> {
        match self.peek() {
            Some(Token::Var) => {
                self.advance();
                Ok(Decl::Var(self.parse_var_declaration(false)?))
            },
            Some(Token::Const) => {
                self.advance();
                Ok(Decl::Var(self.parse_var_declaration(true)?))
            },
            Some(Token::Fun) => {
                self.advance();
                Ok(Decl::Function(self.parse_function_declaration()?))
            },
            Some(Token::LBrace) => Ok(Decl::Block(self.parse_block()?)),
            _ => Ok(Decl::Statement(self.parse_statement()?)),
        }
    }

    /// Parses a braced block.
    ///
    /// Opens a symbol-table scope for the block's declarations and closes it
    /// with the closing brace. If an inner declaration fails, the error
    /// propagates to the top-level recovery loop, which truncates the symbol
    /// table back to where this parse started.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.line();
        self.expect(&Token::LBrace,
                    ParseError::UnexpectedToken { token: "expected '{'".to_string(),
                                                  line })?;
        self.symbols.push_scope();

        let mut decls = Vec::new();
        while !self.at_end() && !self.check(&Token::RBrace) {
            decls.push(self.parse_declaration()?);
        }

        self.expect(&Token::RBrace,
                    ParseError::ExpectedClosingBrace { line: self.line() })?;
        self.symbols.pop_scope();

        Ok(Block { decls, line })
    }
}
