use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// `-` requires a numeric operand. `!` inverts by type: logical not for
    /// booleans, an equals-zero test for numbers, an emptiness test for
    /// strings; anything else is a type error.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           expr: &Expr,
                                                           line: usize)
                                                           -> EvalResult<Value> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
            UnaryOperator::Not => eval_not(&value, line),
        }
    }
}

/// Applies logical NOT to an evaluated value.
fn eval_not(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        Value::Number(n) => Ok(Value::Bool(*n == 0.0)),
        Value::Str(s) => Ok(Value::Bool(s.is_empty())),
        _ => Err(RuntimeError::TypeMismatch { details: format!("expected a boolean, number or string for '!', found {value}"),
                                              line }),
    }
}
