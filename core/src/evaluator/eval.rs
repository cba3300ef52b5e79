//! Core evaluation logic.

use tracing::debug;

use crate::{
    ast::{Expr, ExprKind},
    evaluator::{
        Environment, EvaluatorOptions,
        RuntimeError,
        RuntimeErrorKind::{Host, StackOverflow},
    },
    stack,
    values::{CallError, Type, Value},
};

/// Evaluator for expression trees.
#[derive(Debug, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Evaluate `expr` against `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment<'_>) -> Result<Value, RuntimeError> {
        self.eval_expr(expr, env)
    }

    /// Evaluate a node, consulting and filling its memoised result.
    fn eval_expr(&mut self, expr: &Expr, env: &Environment<'_>) -> Result<Value, RuntimeError> {
        if let Some(value) = expr.cached() {
            return Ok(value.clone());
        }

        if self.depth >= self.options.max_depth {
            debug!(depth = self.depth, "evaluation depth limit reached");
            return Err(RuntimeError::new(
                vec![expr.pos().clone()],
                StackOverflow {
                    depth: self.depth,
                    max_depth: self.options.max_depth,
                },
            ));
        }

        self.depth += 1;
        let result = stack::guarded(|| self.eval_expr_inner(expr, env));
        self.depth -= 1;

        result.map(|value| expr.memoize(value))
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(
        &mut self,
        expr: &Expr,
        env: &Environment<'_>,
    ) -> Result<Value, RuntimeError> {
        match expr.kind() {
            ExprKind::Literal(value) => Ok(value.clone()),

            ExprKind::Vector(elems) => {
                let values = elems
                    .iter()
                    .map(|elem| self.eval_expr(elem, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::from(values))
            }

            ExprKind::Variable(name) => env
                .lookup(name)
                .cloned()
                .ok_or_else(|| RuntimeError::reference_error(Some(expr.pos().clone()), name)),

            ExprKind::Apply { func, arg } => {
                let function = match self.eval_expr(func, env)? {
                    Value::Function(function) => function,
                    other => {
                        return Err(RuntimeError::type_error(
                            Some(expr.pos().clone()),
                            Type::Function,
                            other.ty(),
                        ));
                    }
                };
                let arg = self.eval_expr(arg, env)?;
                function.call(arg).map_err(|err| match err {
                    CallError::Runtime(err) => err.add_position(expr.pos().clone()),
                    CallError::Host(err) => {
                        RuntimeError::new(vec![expr.pos().clone()], Host(err.to_string()))
                    }
                })
            }

            ExprKind::Let { name, bound, body } => {
                let value = self.eval_expr(bound, env)?;
                let mut local = env.child();
                local.register(name.as_str(), value);
                self.eval_expr(body, &local)
            }
        }
    }
}
