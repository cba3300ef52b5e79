//! Runtime evaluation errors.
//!
//! A `RuntimeError` carries a message (its kind) and a trace of source
//! positions. The trace starts at the point of failure and every enclosing
//! application that propagates the error appends its own position, so the
//! first entry is the innermost location.
//!
//! # Rendering
//!
//! `Display` prints the trace from the last appended position to the first
//! (outermost call site first), one `"<pos>:\n"` line each, followed by the
//! message. An error with an empty trace renders as the bare message.

use std::fmt;

use thiserror::Error;

use crate::parser::Position;
use crate::values::Type;

/// What a failing operation expected to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Exactly this type.
    Just(Type),
    /// This type, or a vector of it (broadcasting operations).
    OrVector(Type),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Just(ty) => write!(f, "{}", ty),
            Expected::OrVector(ty) => write!(f, "{} or {}", ty, Type::Vector),
        }
    }
}

impl From<Type> for Expected {
    fn from(ty: Type) -> Self {
        Expected::Just(ty)
    }
}

/// The message part of a runtime error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeErrorKind {
    /// A variable was not bound in the environment.
    #[error("Reference Error: {name} is not defined")]
    Reference { name: String },

    /// A value of the wrong type reached an operation.
    #[error("Type Error: expected {expected}, actual {actual}")]
    Type { expected: Expected, actual: Type },

    /// A vector index was not an integer in `1..=len`.
    #[error("Range Error: index out of range")]
    IndexOutOfRange,

    /// A vector operation needs at least one element.
    #[error("Range Error: empty vector")]
    EmptyVector,

    /// Evaluation recursion exceeded the configured limit.
    #[error("Stack Overflow: evaluation depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },

    /// A host function failed with an error of its own.
    #[error("{0}")]
    Host(String),
}

/// Runtime evaluation error.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    trace: Vec<Position>,
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(trace: Vec<Position>, kind: RuntimeErrorKind) -> Self {
        Self { trace, kind }
    }

    /// An error with an empty trace, as raised by host functions.
    pub fn bare(kind: RuntimeErrorKind) -> Self {
        Self::new(Vec::new(), kind)
    }

    pub fn reference_error(pos: Option<Position>, name: impl Into<String>) -> Self {
        Self::new(
            pos.into_iter().collect(),
            RuntimeErrorKind::Reference { name: name.into() },
        )
    }

    pub fn type_error(pos: Option<Position>, expected: impl Into<Expected>, actual: Type) -> Self {
        Self::new(
            pos.into_iter().collect(),
            RuntimeErrorKind::Type {
                expected: expected.into(),
                actual,
            },
        )
    }

    /// Append `pos` to the trace.
    #[must_use]
    pub fn add_position(mut self, pos: Position) -> Self {
        self.trace.push(pos);
        self
    }

    /// Positions from the innermost to the outermost.
    pub fn trace(&self) -> &[Position] {
        &self.trace
    }

    pub fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in self.trace.iter().rev() {
            writeln!(f, "{}:", pos)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_error_renders_message_only() {
        let err = RuntimeError::reference_error(None, "y");
        assert_eq!(err.to_string(), "Reference Error: y is not defined");
        assert!(err.trace().is_empty());
    }

    #[test]
    fn test_trace_renders_outermost_first() {
        let err = RuntimeError::type_error(
            Some(Position::new("test", 3, 5, 20)),
            Expected::OrVector(Type::Number),
            Type::String,
        )
        .add_position(Position::new("test", 2, 1, 10))
        .add_position(Position::new("test", 1, 1, 0));

        assert_eq!(
            err.to_string(),
            "test:1:1:\ntest:2:1:\ntest:3:5:\nType Error: expected number or vector, actual string"
        );
        assert_eq!(err.trace()[0].line(), 3);
    }

    #[test]
    fn test_add_position_leaves_error_intact() {
        let err = RuntimeError::bare(RuntimeErrorKind::EmptyVector);
        let annotated = err.clone().add_position(Position::start_of("test"));
        assert!(err.trace().is_empty());
        assert_eq!(annotated.trace().len(), 1);
        assert_eq!(annotated.kind(), err.kind());
    }
}
