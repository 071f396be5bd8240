//! # skiff
//!
//! skiff is a small, dynamically typed scripting language implemented as a
//! tree-walking interpreter. Source text is scanned into tokens, parsed into
//! an abstract syntax tree, and evaluated to produce a sequence of printable
//! result strings and observable side effects (printing, variable binding,
//! function definition and call).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Context,
    lexer,
    parser::{core::Parser, symbols::SymbolTable},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Stmt` and `Decl` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement and declaration types for all language
///   constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation and scope management to provide a complete runtime for
/// source code execution. It exposes the public API for interpreting
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// A persistent interpreter session.
///
/// Owns the parser's symbol table and the evaluator's runtime context, so
/// names declared by one `run` call stay visible to the next. The
/// interactive prompt feeds every input line to the same session; batch
/// execution uses one session for the whole file.
pub struct Interpreter {
    symbols: SymbolTable,
    context: Context,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a session with empty global scopes.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new(),
               context: Context::new(), }
    }

    /// Scans, parses and evaluates one source unit.
    ///
    /// Returns the rendered result strings, one per contributing statement,
    /// in insertion order. `print` side effects happen during the call; the
    /// returned strings use the same rendering rules.
    ///
    /// # Errors
    /// - Every diagnostic the parser collected, when parsing fails.
    /// - The first runtime error, which aborts evaluation.
    pub fn run(&mut self, source: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let tokens = lexer::scan(source)?;
        let program = Parser::new(tokens, &mut self.symbols).parse()?;
        let results = self.context.evaluate(&program)?;
        Ok(results)
    }
}

/// Interprets one source string in a fresh session.
///
/// This is the one-shot convenience wrapper around [`Interpreter::run`].
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use skiff::interpret;
///
/// let results = interpret("var x = 1; print(x + 2);").unwrap();
/// assert_eq!(results, vec!["1", "3"]);
///
/// // Assigning an undeclared variable is a parse-time error.
/// assert!(interpret("y = 1;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    Interpreter::new().run(source)
}
