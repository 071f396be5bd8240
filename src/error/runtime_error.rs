#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to reassign a binding declared `const`.
    ConstReassignment {
        /// The constant's name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function with the wrong number of arguments.
    ArityMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted to define a function over an existing binding.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement executed outside of any function call.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::ConstReassignment { name, line } => {
                write!(f, "Error on line {line}: Cannot reassign constant '{name}'.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::NotCallable { line } => {
                write!(f, "Error on line {line}: Only functions can be called.")
            },
            Self::ArityMismatch { expected, found, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected} argument(s) but found {found}."),
            Self::FunctionAlreadyDefined { name, line } => write!(f,
                                                                  "Error on line {line}: Function '{name}' is already defined."),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
