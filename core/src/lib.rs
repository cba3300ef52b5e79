//! est-core: parser, optimiser and evaluator for the est expression language.
//!
//! The pipeline is `parser::parse` → `Expr::optimise` (optional) →
//! `Expr::eval` against an [`evaluator::Environment`], usually one built from
//! the default prelude in [`stdlib`]. [`api::Engine`] wraps the three steps.

pub mod api;
pub mod ast;
pub mod evaluator;
pub mod optimizer;
pub mod parser;
mod stack;
pub mod stdlib;
pub mod values;
