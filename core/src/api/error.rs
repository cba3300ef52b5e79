//! Public error type for the est API.

use thiserror::Error;

use crate::evaluator::RuntimeError;
use crate::parser::{ParseError, Position};

/// Either of the two error families an expression can fail with.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The source text is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The message without any position information.
    pub fn message(&self) -> String {
        match self {
            Error::Parse(err) => err.message(),
            Error::Runtime(err) => err.message(),
        }
    }

    /// The position most closely associated with the failure: the parse
    /// location, or the innermost entry of a runtime trace.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Error::Parse(err) => Some(err.position()),
            Error::Runtime(err) => err.trace().first(),
        }
    }
}
