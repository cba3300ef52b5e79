//! Configuration options for the est engine.

use crate::evaluator::EvaluatorOptions;

/// Configuration options for the est engine.
///
/// # Example
///
/// ```
/// use est_core::api::EngineOptions;
/// use est_core::evaluator::EvaluatorOptions;
///
/// let options = EngineOptions {
///     optimise: false,
///     evaluator: EvaluatorOptions { max_depth: 500 },
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Run the sharing optimiser on every compiled expression.
    ///
    /// Default: true
    pub optimise: bool,

    /// Options for running compiled expressions.
    pub evaluator: EvaluatorOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            optimise: true,
            evaluator: EvaluatorOptions::default(),
        }
    }
}
