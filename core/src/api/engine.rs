//! The est compilation engine.

use tracing::debug;

use super::{CompiledExpression, EngineOptions, Error};
use crate::evaluator::Environment;
use crate::parser;

/// The est compilation and execution engine.
///
/// The engine manages:
/// - Global environment (prelude plus host-registered values)
/// - Runtime configuration (EngineOptions)
///
/// # Example
///
/// ```
/// use est_core::api::{Engine, EngineOptions};
/// use est_core::values::{Function, Value};
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("twice", Function::new(|x| Ok(Value::vector([x.clone(), x]))));
/// });
///
/// let expr = engine.compile("example", "twice 21 ! 2").unwrap();
/// assert_eq!(expr.run().unwrap(), Value::Number(21.0));
/// ```
pub struct Engine {
    environment: Environment<'static>,
    options: EngineOptions,
}

impl Engine {
    /// Create a new engine whose environment starts from the default prelude.
    ///
    /// The initialization closure may register additional globals; names it
    /// registers shadow prelude entries of the same name.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut Environment<'static>)) -> Self {
        let mut environment = Environment::prelude();
        init(&mut environment);
        Self {
            environment,
            options,
        }
    }

    /// Access the global environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.environment
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile an est expression.
    ///
    /// `source_name` labels positions in errors raised while parsing or
    /// running the expression.
    pub fn compile(&self, source_name: &str, source: &str) -> Result<CompiledExpression<'_>, Error> {
        let parsed = parser::parse(source_name, source)?;
        let expr = if self.options.optimise {
            parsed.optimise()
        } else {
            parsed
        };
        debug!(source_name, optimised = self.options.optimise, "compiled expression");
        Ok(CompiledExpression::new(self, expr))
    }
}
