/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and the
/// static scoping violations detected against the parser's symbol table
/// (duplicate declarations, assignments to undeclared names, reassignments
/// of constants).
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, calls of non-function values, arity
/// mismatches, and scoping violations that only become visible at run time.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
