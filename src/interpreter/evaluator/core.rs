use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement's evaluation left the control flow.
///
/// `return` is not an error, so it does not ride the error channel; it is
/// an alternative outcome that statement evaluation hands upward until a
/// function call materializes it back into a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Normal completion; the values the statement contributed, in order.
    Produced(Vec<Value>),
    /// A `return` unwinding to the nearest enclosing call.
    Return {
        /// The returned value.
        value: Value,
        /// The line of the `return`, kept for the diagnostic raised when a
        /// return escapes the whole program.
        line:  usize,
    },
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the chain of scope frames that
/// variables and functions live in. It is created once and reused for
/// evaluating programs, so an interactive session keeps its bindings between
/// lines.
pub struct Context {
    /// The runtime environment: lexically nested scope frames.
    pub env: Environment,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new(), }
    }

    /// Evaluates a program and renders its results.
    ///
    /// This is the top-level entry point: one rendered string per
    /// contributing statement, in insertion order, using the same rendering
    /// as `print`.
    ///
    /// # Errors
    /// Any `RuntimeError` aborts the whole call.
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Vec<String>> {
        Ok(self.eval_program(program)?
               .iter()
               .map(ToString::to_string)
               .collect())
    }

    /// Evaluates every declaration of a program in the global frame and
    /// returns the produced values in order.
    ///
    /// # Errors
    /// A `return` escaping the program is a structural error
    /// ([`RuntimeError::ReturnOutsideFunction`]).
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Vec<Value>> {
        let mut produced = Vec::new();

        for decl in &program.decls {
            match self.eval_decl(decl)? {
                Flow::Produced(values) => produced.extend(values),
                Flow::Return { line, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
            }
        }

        Ok(produced)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main expression dispatcher. Strictly left-to-right: a
    /// node's operands evaluate in source order, except where the
    /// short-circuit operators skip their right operand entirely.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Unary { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary_op(left, *op, right, *line),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Assign { name, value, line } => self.eval_assign(name, value, *line),
            Expr::Ternary { condition,
                            then_expr,
                            else_expr,
                            .. } => self.eval_ternary(condition, then_expr, else_expr),
            Expr::Call { callee, arguments, line } => self.eval_call(callee, arguments, *line),
        }
    }

    /// Resolves a variable reference, innermost scope first.
    ///
    /// A name bound nowhere is an error; a binding that holds nil reads
    /// back as nil.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Evaluates the right side, stores it through the environment's
    /// outward-walking assignment, and yields the stored value.
    fn eval_assign(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(value)?;
        self.env.assign(name, value.clone(), line)?;
        Ok(value)
    }

    /// Evaluates the condition, then exactly one branch.
    fn eval_ternary(&mut self,
                    condition: &Expr,
                    then_expr: &Expr,
                    else_expr: &Expr)
                    -> EvalResult<Value> {
        if self.eval(condition)?.is_truthy() {
            self.eval(then_expr)
        } else {
            self.eval(else_expr)
        }
    }
}
