#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A semicolon `;` was expected but not found.
    ExpectedSemicolon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that is already bound in the active scope.
    DuplicateDeclaration {
        /// The redeclared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned to a name that is not declared in any enclosing scope.
    UndefinedVariable {
        /// The undeclared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned to a name that was declared `const`.
    ConstReassignment {
        /// The constant's name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Some other kind of parse error, with a custom message.
    Other {
        /// Details about the parse error.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBrace { line } => write!(f,
                                                          "Error on line {line}: Expected closing brace '}}' but none found."),

            Self::ExpectedSemicolon { line } => {
                write!(f, "Error on line {line}: Expected ';' after statement.")
            },

            Self::DuplicateDeclaration { name, line } => write!(f,
                                                                "Error on line {line}: Name '{name}' is already declared in this scope."),

            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },

            Self::ConstReassignment { name, line } => {
                write!(f, "Error on line {line}: Cannot reassign constant '{name}'.")
            },

            Self::Other { message, line } => write!(f, "Error on line {line}: {message}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Every diagnostic collected during one parse.
///
/// The parser recovers from errors in panic mode and keeps going, so a
/// single run can report more than one problem. Any collected diagnostic
/// makes the parse fatal as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors {
    /// The collected diagnostics, in source order.
    pub errors: Vec<ParseError>,
}

impl ParseErrors {
    /// Returns `true` when `self` contains a diagnostic of the same kind as
    /// `error`, ignoring payloads. Useful in tests asserting on the error
    /// taxonomy.
    #[must_use]
    pub fn contains_kind(&self, error: &ParseError) -> bool {
        self.errors
            .iter()
            .any(|e| std::mem::discriminant(e) == std::mem::discriminant(error))
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
