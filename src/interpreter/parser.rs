/// Core parser state and entry points.
///
/// Holds the `Parser` struct with its token cursor, the top-level `parse`
/// loop with panic-mode recovery, and the shared cursor primitives.
pub mod core;

/// Binary expression parsing.
///
/// Implements the precedence ladder from assignment down to factors,
/// including the short-circuit logical operators, nullish coalescing and the
/// ternary conditional.
pub mod binary;

/// Unary, call and primary expression parsing.
///
/// Handles prefix operators, call postfix chains with argument lists, and
/// the atomic expressions at the bottom of the grammar.
pub mod unary;

/// Statement and declaration parsing.
///
/// Implements `print`, `if`/`elif`/`else`, `for`, `while`, `return`,
/// expression statements, and `var`/`const`/`fun` declarations.
pub mod statement;

/// Block and declaration-sequence parsing.
///
/// Parses braced blocks and dispatches between declarations and statements.
pub mod block;

/// The parse-time symbol table.
///
/// Tracks declared names and const flags per scope so the parser can reject
/// duplicate declarations, assignments to undeclared names, and statically
/// visible const reassignments.
pub mod symbols;
