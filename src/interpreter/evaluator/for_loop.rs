use crate::{
    ast::{BranchBody, Expr, ForInit},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context {
    /// Evaluates a `for` loop (and `while`, which parses onto the same
    /// node without initializer or step).
    ///
    /// The whole loop runs inside its own scope frame, so a declared
    /// initializer variable does not leak. Per iteration: condition check,
    /// body, then the step expression. Body results append in iteration
    /// order; a `return` from the body unwinds immediately.
    pub(in crate::interpreter::evaluator) fn eval_for(&mut self,
                                                      init: Option<&ForInit>,
                                                      condition: &Expr,
                                                      step: Option<&Expr>,
                                                      body: &BranchBody)
                                                      -> EvalResult<Flow> {
        let _scope = self.env.scoped();

        match init {
            Some(ForInit::Declaration(decl)) => {
                self.eval_var_declaration(decl)?;
            },
            Some(ForInit::Expression(expr)) => {
                self.eval(expr)?;
            },
            None => {},
        }

        let mut produced = Vec::new();
        while self.eval(condition)?.is_truthy() {
            match self.eval_branch_body(body)? {
                Flow::Produced(values) => produced.extend(values),
                ret @ Flow::Return { .. } => return Ok(ret),
            }

            if let Some(step) = step {
                self.eval(step)?;
            }
        }

        Ok(Flow::Produced(produced))
    }
}
