//! Expression trees.
//!
//! The tree has five node kinds: literals, vector constructors, variables,
//! single-argument applications and `let` bindings. Operators are not a node
//! kind of their own; the parser desugars them into applications of
//! variables named after the operator.

mod display;
mod expr;

pub use expr::{Expr, ExprKind};
