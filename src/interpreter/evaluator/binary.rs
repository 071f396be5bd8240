use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The short-circuit forms (`&&`, `||`, `??`) decide whether the right
    /// side runs at all, so they are handled before the operands are
    /// evaluated; everything else evaluates both operands left-to-right and
    /// delegates to [`eval_binary`].
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            line: usize)
                                                            -> EvalResult<Value> {
        match op {
            BinaryOperator::And => {
                let lval = self.eval(left)?;
                if !lval.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                let rval = self.eval(right)?;
                return Ok(Value::Bool(rval.is_truthy()));
            },
            BinaryOperator::Or => {
                let lval = self.eval(left)?;
                if lval.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                let rval = self.eval(right)?;
                return Ok(Value::Bool(rval.is_truthy()));
            },
            BinaryOperator::NullishCoalesce => {
                let lval = self.eval(left)?;
                if matches!(lval, Value::Nil) {
                    return self.eval(right);
                }
                return Ok(lval);
            },
            _ => {},
        }

        let lval = self.eval(left)?;
        let rval = self.eval(right)?;
        eval_binary(op, &lval, &rval, line)
    }
}

/// Applies an eager binary operator to two evaluated values.
///
/// `+` promotes: two numbers add, two strings concatenate, and a string
/// with a number concatenates the number's rendered form. `-`, `*` and `/`
/// require numbers; division by zero yields the IEEE result rather than an
/// error. Comparisons compare numerically when both operands are numbers
/// and lexicographically on rendered forms otherwise.
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => eval_add(left, right, line),

        BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(RuntimeError::TypeMismatch { details: format!("expected numbers for '{op}', found {left} and {right}"),
                                                        line });
            };
            let result = match op {
                BinaryOperator::Sub => a - b,
                BinaryOperator::Mul => a * b,
                BinaryOperator::Div => a / b,
                _ => unreachable!(),
            };
            Ok(Value::Number(result))
        },

        BinaryOperator::Less
        | BinaryOperator::LessEqual
        | BinaryOperator::Greater
        | BinaryOperator::GreaterEqual
        | BinaryOperator::Equal
        | BinaryOperator::NotEqual => Ok(Value::Bool(compare(op, left, right))),

        BinaryOperator::And | BinaryOperator::Or | BinaryOperator::NullishCoalesce => {
            unreachable!("short-circuit operators are handled before operand evaluation")
        },
    }
}

/// Evaluates the `+` operator with its promotion rules.
fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Str(a), Value::Number(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Number(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(RuntimeError::TypeMismatch { details: format!("expected numbers or strings for '+', found {left} and {right}"),
                                              line }),
    }
}

/// Compares two values: numerically when both are numbers, otherwise by the
/// lexicographic order of their rendered forms.
fn compare(op: BinaryOperator, left: &Value, right: &Value) -> bool {
    if let (Value::Number(a), Value::Number(b)) = (left, right) {
        match op {
            BinaryOperator::Less => a < b,
            BinaryOperator::LessEqual => a <= b,
            BinaryOperator::Greater => a > b,
            BinaryOperator::GreaterEqual => a >= b,
            BinaryOperator::Equal => a == b,
            BinaryOperator::NotEqual => a != b,
            _ => unreachable!(),
        }
    } else {
        let (a, b) = (left.to_string(), right.to_string());
        match op {
            BinaryOperator::Less => a < b,
            BinaryOperator::LessEqual => a <= b,
            BinaryOperator::Greater => a > b,
            BinaryOperator::GreaterEqual => a >= b,
            BinaryOperator::Equal => a == b,
            BinaryOperator::NotEqual => a != b,
            _ => unreachable!(),
        }
    }
}
