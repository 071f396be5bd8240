use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations. It replaces
/// the token-shaped envelope of earlier designs with a closed tagged sum, so
/// every operation matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value; renders as `null`.
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the
    /// logical operators (`!`, `&&`, `||`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, stored without surrounding quotes.
    Str(String),
    /// A user-defined function. The definition is reference-counted so that
    /// binding, passing and calling a function never copies its body.
    Function(Rc<FunctionDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `nil` and `false` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use skiff::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use skiff::interpreter::value::Value;
    ///
    /// let x = Value::Number(10.0);
    /// assert_eq!(x.as_number(1).unwrap(), 10.0);
    /// assert!(Value::Nil.as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {self}"),
                                                  line }),
        }
    }
}

/// Renders a value the way `print` and the top-level result list do:
/// numbers in canonical decimal form, strings without quotes, booleans as
/// `true`/`false`, nil as `null`, and functions as `<fun name>`.
///
/// # Example
/// ```
/// use skiff::interpreter::value::Value;
///
/// assert_eq!(Value::Number(3.0).to_string(), "3");
/// assert_eq!(Value::Number(0.5).to_string(), "0.5");
/// assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
/// assert_eq!(Value::Nil.to_string(), "null");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Function(def) => write!(f, "<fun {}>", def.name),
        }
    }
}
