use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// One name binding: the value plus whether it was declared `const`.
#[derive(Debug, Clone)]
struct Binding {
    value:    Value,
    constant: bool,
}

/// The chain of scope frames active during evaluation.
///
/// The innermost frame is the top of the stack; the global frame sits at the
/// bottom and is never popped. Declarations always bind in the innermost
/// frame, while assignments walk outward to the nearest existing binding.
/// Each binding remembers whether it was declared `const`, and the
/// environment refuses to overwrite such bindings.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<HashMap<String, Binding>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment holding only the empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()], }
    }

    /// Pushes a new innermost frame.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Removes the innermost frame. The global frame stays put.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The number of active frames, global frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Looks a name up, innermost frame first.
    ///
    /// Returns `None` for a name bound nowhere, which is distinct from a
    /// binding that holds nil.
    ///
    /// # Example
    /// ```
    /// use skiff::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(5.0), false, 1).unwrap();
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        for scope in self.scopes.iter().rev() {
            if let Some(binding) = scope.get(name) {
                return Some(&binding.value);
            }
        }
        None
    }

    /// Binds a name in the innermost frame.
    ///
    /// Used by declarations and parameter binding. Redefining a name that
    /// the innermost frame already holds as `const` is refused; redefining
    /// a mutable one shadows it in place.
    ///
    /// # Errors
    /// [`RuntimeError::ConstReassignment`] when the innermost frame already
    /// binds `name` as a constant.
    pub fn define(&mut self, name: &str, value: Value, constant: bool, line: usize) -> EvalResult<()> {
        let scope = self.scopes.last_mut().expect("at least the global frame");
        if scope.get(name).is_some_and(|binding| binding.constant) {
            return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                         line });
        }
        scope.insert(name.to_string(), Binding { value, constant });
        Ok(())
    }

    /// Assigns to the nearest existing binding, walking outward.
    ///
    /// # Errors
    /// - [`RuntimeError::ConstReassignment`] when the nearest binding was
    ///   declared `const`.
    /// - [`RuntimeError::UndefinedVariable`] when no enclosing frame binds
    ///   `name`.
    ///
    /// # Example
    /// ```
    /// use skiff::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0), false, 1).unwrap();
    /// env.assign("x", Value::Number(2.0), 1).unwrap();
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(2.0)));
    /// assert!(env.assign("missing", Value::Nil, 1).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(binding) = scope.get_mut(name) {
                if binding.constant {
                    return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                                 line });
                }
                binding.value = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Pushes a new frame and returns a guard that will pop it automatically.
    ///
    /// This is an RAII helper used to ensure frames are properly unwound on
    /// every exit path, including early `return` propagation. The returned
    /// `ScopeGuard` removes the frame when dropped.
    ///
    /// # Example
    /// ```
    /// use skiff::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// let before = env.depth();
    ///
    /// {
    ///     let _guard = env.scoped();
    /// }
    ///
    /// assert_eq!(env.depth(), before);
    /// ```
    pub fn scoped(&mut self) -> ScopeGuard {
        self.push_scope();
        ScopeGuard { environment: self, }
    }
}

/// Pops one frame from the owning [`Environment`] when dropped.
pub struct ScopeGuard {
    environment: *mut Environment,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        unsafe { (*self.environment).pop_scope() };
    }
}
