use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::Value,
    },
};

impl Context {
    /// Evaluates a function call.
    ///
    /// The callee expression must evaluate to a function value. Arguments
    /// evaluate eagerly, left-to-right, before the body runs; their count
    /// must match the parameter list. The body executes in a fresh scope
    /// with each parameter bound to its argument. A `return` from the body
    /// becomes the call's value; a body that falls off the end yields nil.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       arguments: &[Expr],
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let callee = self.eval(callee)?;
        let Value::Function(func) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };

        if arguments.len() != func.params.len() {
            return Err(RuntimeError::ArityMismatch { expected: func.params.len(),
                                                     found:    arguments.len(),
                                                     line });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        let _scope = self.env.scoped();
        for (param, arg) in func.params.iter().zip(args) {
            self.env.define(param, arg, false, line)?;
        }

        match self.eval_block(&func.body)? {
            Flow::Return { value, .. } => Ok(value),
            Flow::Produced(_) => Ok(Value::Nil),
        }
    }

    /// Declares a user-defined function in the current frame.
    ///
    /// Declaring over any existing non-nil binding is refused. The
    /// definition (body included) is cloned into the function value, so the
    /// value owns its code for as long as it lives.
    pub(in crate::interpreter::evaluator) fn declare_function(&mut self,
                                                              def: &FunctionDef)
                                                              -> EvalResult<Flow> {
        if self.env
               .get(&def.name)
               .is_some_and(|value| !matches!(value, Value::Nil))
        {
            return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone(),
                                                              line: def.line, });
        }

        self.env
            .define(&def.name, Value::Function(Rc::new(def.clone())), false, def.line)?;
        Ok(Flow::Produced(Vec::new()))
    }
}
