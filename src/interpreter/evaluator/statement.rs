use crate::{
    ast::{Block, Branch, BranchBody, Decl, Expr, Stmt, VarDecl},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::Value,
    },
};

/// Keeps `return` propagation intact but drops any produced values.
///
/// `if` statements execute their branch for its side effects; the values the
/// branch produced do not contribute to the surrounding result list.
fn suppress_results(flow: Flow) -> Flow {
    match flow {
        ret @ Flow::Return { .. } => ret,
        Flow::Produced(_) => Flow::Produced(Vec::new()),
    }
}

impl Context {
    /// Evaluates a single declaration.
    ///
    /// Dispatches to statements, variable declarations, function
    /// declarations and nested blocks.
    pub fn eval_decl(&mut self, decl: &Decl) -> EvalResult<Flow> {
        match decl {
            Decl::Statement(stmt) => self.eval_statement(stmt),
            Decl::Var(decl) => self.eval_var_declaration(decl),
            Decl::Function(def) => self.declare_function(def),
            Decl::Block(block) => self.eval_block(block),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Expression and print statements contribute one value each; `if`
    /// contributes nothing; `for` contributes what its body produced;
    /// `return` switches the flow to unwinding.
    pub fn eval_statement(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::Expression { expr, .. } => Ok(Flow::Produced(vec![self.eval(expr)?])),
            Stmt::Print { expr, .. } => self.eval_print(expr),
            Stmt::If { if_branch,
                       elif_branches,
                       else_body,
                       .. } => self.eval_if(if_branch, elif_branches, else_body.as_ref()),
            Stmt::Return { expr, line } => {
                let value = match expr {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return { value, line: *line })
            },
            Stmt::For { init,
                        condition,
                        step,
                        body,
                        .. } => self.eval_for(init.as_ref(), condition, step.as_ref(), body),
        }
    }

    /// Renders the value to standard output followed by a newline, and
    /// contributes the unrendered value as the statement's result.
    fn eval_print(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let value = self.eval(expr)?;
        println!("{value}");
        Ok(Flow::Produced(vec![value]))
    }

    /// Runs the first arm whose condition is truthy, then the `else` body if
    /// none was. At most one body executes.
    fn eval_if(&mut self,
               if_branch: &Branch,
               elif_branches: &[Branch],
               else_body: Option<&BranchBody>)
               -> EvalResult<Flow> {
        for branch in std::iter::once(if_branch).chain(elif_branches) {
            if self.eval(&branch.condition)?.is_truthy() {
                return Ok(suppress_results(self.eval_branch_body(&branch.body)?));
            }
        }

        if let Some(body) = else_body {
            return Ok(suppress_results(self.eval_branch_body(body)?));
        }

        Ok(Flow::Produced(Vec::new()))
    }

    /// Evaluates a branch or loop body.
    pub(in crate::interpreter::evaluator) fn eval_branch_body(&mut self,
                                                              body: &BranchBody)
                                                              -> EvalResult<Flow> {
        match body {
            BranchBody::Block(block) => self.eval_block(block),
            BranchBody::Single(stmt) => self.eval_statement(stmt),
        }
    }

    /// Evaluates a block in a fresh scope frame.
    ///
    /// Declarations run in order and their results aggregate. The frame is
    /// popped on every exit path: normal completion, `return` propagation,
    /// and error unwinding alike.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Flow> {
        let _scope = self.env.scoped();
        let mut produced = Vec::new();

        for decl in &block.decls {
            match self.eval_decl(decl)? {
                Flow::Produced(values) => produced.extend(values),
                ret @ Flow::Return { .. } => return Ok(ret),
            }
        }

        Ok(Flow::Produced(produced))
    }

    /// Binds a `var`/`const` declaration in the current frame.
    ///
    /// The initializer's value (or nil without one) becomes both the
    /// binding and the declaration's contributed result.
    pub(in crate::interpreter::evaluator) fn eval_var_declaration(&mut self,
                                                                  decl: &VarDecl)
                                                                  -> EvalResult<Flow> {
        let value = match &decl.init {
            Some(expr) => self.eval(expr)?,
            None => Value::Nil,
        };
        self.env
            .define(&decl.name, value.clone(), decl.constant, decl.line)?;
        Ok(Flow::Produced(vec![value]))
    }
}
