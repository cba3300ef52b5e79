//! Compiled est expressions.

use std::rc::Rc;

use super::{Engine, Error};
use crate::ast::Expr;
use crate::evaluator::Evaluator;
use crate::values::Value;

/// A compiled est expression ready for execution.
///
/// Compiled expressions borrow the engine that compiled them and are run
/// against its environment. Every node keeps the first value it evaluated
/// to, so running the same compiled expression again returns the stored
/// result.
pub struct CompiledExpression<'engine> {
    engine: &'engine Engine,
    expr: Rc<Expr>,
}

impl<'engine> CompiledExpression<'engine> {
    pub(crate) fn new(engine: &'engine Engine, expr: Rc<Expr>) -> Self {
        Self { engine, expr }
    }

    /// Evaluate the expression against the engine's environment.
    pub fn run(&self) -> Result<Value, Error> {
        let mut evaluator = Evaluator::new(self.engine.options().evaluator.clone());
        Ok(evaluator.eval(&self.expr, self.engine.environment())?)
    }

    /// The (possibly optimised) expression tree.
    pub fn expr(&self) -> &Rc<Expr> {
        &self.expr
    }
}
