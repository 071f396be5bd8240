/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine: the runtime context, the expression
/// dispatcher, and the control-flow type that carries statement results and
/// `return` propagation.
pub mod core;

/// Statement, declaration, block and program evaluation.
///
/// Implements result aggregation in source order, branch selection for `if`
/// chains, printing, and scope handling for blocks.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, short-circuit logic and nullish coalescing.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Function evaluation.
///
/// Handles function declarations and calls: callee resolution, eager
/// argument evaluation, parameter binding and return capture.
pub mod function;

/// Evaluation of `for` loops.
///
/// Runs the initializer inside a loop-local scope and collects body results
/// in iteration order.
pub mod for_loop;
