//! Host callables.
//!
//! Functions take exactly one argument; multi-argument functions are curried
//! and return another `Function` after the first argument.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::Value;
use crate::evaluator::RuntimeError;

/// The failure of a host function call.
///
/// `Runtime` errors keep their kind and trace; any other host fault is turned
/// into a runtime error by the enclosing application, using its description
/// as the message.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("{0}")]
    Host(Box<dyn std::error::Error + Send + Sync>),
}

impl CallError {
    pub fn host(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        CallError::Host(err.into())
    }
}

type NativeFn = dyn Fn(Value) -> Result<Value, CallError> + Send + Sync;

/// A unary host function.
#[derive(Clone)]
pub struct Function(Arc<NativeFn>);

impl Function {
    pub fn new(func: impl Fn(Value) -> Result<Value, CallError> + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    pub fn call(&self, arg: Value) -> Result<Value, CallError> {
        (self.0)(arg)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<function>")
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(<fn>)")
    }
}
