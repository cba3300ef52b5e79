//! est - a small embeddable expression language over numbers and vectors
//!
//! # Overview
//!
//! est evaluates arithmetic expressions written by users of a host
//! application. Expressions work on scalars and vectors alike, name
//! intermediate results with `let`, and call whatever functions the host
//! registers next to the built-in prelude of math and statistics functions.
//!
//! # Quick Start
//!
//! ```
//! use est::{Engine, EngineOptions, Value};
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("samples", Value::numbers([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
//! });
//!
//! let expr = engine.compile("quick-start", "let m = avg samples in round (m * 10) / 10").unwrap();
//! assert_eq!(expr.run().unwrap(), Value::Number(5.0));
//! ```
//!
//! # Lower-level pipeline
//!
//! The engine is a thin wrapper over the three stages, which are also
//! available on their own:
//!
//! ```
//! use est::{Environment, parse};
//!
//! let expr = parse("pipeline", "let x = [1, 2] in x + x").unwrap().optimise();
//! assert_eq!(expr.to_string(), "op + [1, 2] [1, 2]");
//! assert_eq!(expr.eval(&Environment::prelude()).unwrap().to_string(), "[2, 4]");
//! ```
//!
//! # Host functions
//!
//! Host functions take one argument and return `Result<Value, CallError>`.
//! Multi-argument functions are curried; [`stdlib::binary_op`] builds
//! broadcasting ones:
//!
//! ```
//! use est::{Engine, EngineOptions, Type, Value, stdlib};
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     let hypot = stdlib::binary_op(Type::Number, Type::Number, |x, y| match (x, y) {
//!         (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x.hypot(y))),
//!         _ => unreachable!("binary_op checks argument types"),
//!     });
//!     env.register("hypot", hypot);
//! });
//!
//! let expr = engine.compile("hypot", "hypot [3, 5] [4, 12]").unwrap();
//! assert_eq!(expr.run().unwrap(), Value::numbers([5.0, 13.0]));
//! ```

mod error_renderer;

// Re-export public API from est_core
pub use est_core::api::{CompiledExpression, Engine, EngineOptions, Error};

// Re-export the pipeline stages and their types
pub use est_core::ast::{Expr, ExprKind};
pub use est_core::evaluator::{
    Environment, Evaluator, EvaluatorOptions, Expected, RuntimeError, RuntimeErrorKind,
};
pub use est_core::parser::{ParseError, ParseErrorKind, Position, parse};
pub use est_core::values::{self, CallError, Function, Type, Value, type_of};
pub use est_core::{optimizer, stdlib};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
