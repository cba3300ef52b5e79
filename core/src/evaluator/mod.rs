//! Tree-walking evaluator for est expressions.
//!
//! Evaluation is a plain recursive walk over an (optionally optimised)
//! expression tree against an [`Environment`]:
//!
//! - literals yield their value;
//! - vectors evaluate their elements in order, failing on the first error;
//! - variables are looked up in the environment, failing with a reference error;
//! - applications evaluate the function, check that it is a function, evaluate
//!   the argument and call it; failures of the call are annotated with the
//!   application's position;
//! - `let` evaluates its bound expression once and evaluates the body in a
//!   child environment where the name is bound to the result.
//!
//! Every node memoises its first successful result. See [`Expr`](crate::ast::Expr).
//!
//! ## Example
//!
//! ```
//! use est_core::{evaluator::Environment, parser, values::Value};
//!
//! let expr = parser::parse("example", "let x = 2 in x * PI").unwrap();
//! let value = expr.eval(&Environment::prelude()).unwrap();
//! assert_eq!(value, Value::Number(2.0 * std::f64::consts::PI));
//! ```

mod environment;
mod error;
mod eval;


pub use environment::Environment;
pub use error::{Expected, RuntimeError, RuntimeErrorKind};
pub use eval::Evaluator;

/// Runtime limits for evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Every nested node counts, so a chain of `n` infix operators needs a
    /// depth of about `2 * n`. The native stack grows on demand, so this only
    /// bounds memory use.
    ///
    /// Default: 10000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 10_000 }
    }
}
