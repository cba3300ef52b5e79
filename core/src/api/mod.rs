//! Public API for the est expression language.
//!
//! An [`Engine`] owns the global environment (the default prelude plus
//! whatever the host registers) and the options that apply to every
//! expression it compiles. Compiling parses the source and, unless disabled,
//! runs the sharing optimiser; the resulting [`CompiledExpression`] can then
//! be run against the engine's environment.
//!
//! # Example
//!
//! ```
//! use est_core::api::{Engine, EngineOptions};
//! use est_core::values::Value;
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("rate", 0.5);
//! });
//!
//! let expr = engine.compile("example", "[2, 4, 6] * rate").unwrap();
//! assert_eq!(expr.run().unwrap(), Value::numbers([1.0, 2.0, 3.0]));
//! ```

pub mod engine;
pub mod error;
pub mod expression;
pub mod options;

pub use engine::Engine;
pub use error::Error;
pub use expression::CompiledExpression;
pub use options::EngineOptions;
