//! Sums and summary statistics over vectors of numbers.
//!
//! All sums use Neumaier's variant of Kahan summation, which keeps a running
//! compensation term for the low-order bits lost by each addition.

use crate::evaluator::{RuntimeError, RuntimeErrorKind};
use crate::values::{CallError, Function, Value};

use super::builders::numbers;

/// A compensated floating-point accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.compensation += (self.sum - t) + x;
        } else {
            self.compensation += (x - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = CompensatedSum::new();
        for x in iter {
            acc.add(x);
        }
        acc
    }
}

pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().copied().collect::<CompensatedSum>().total()
}

fn non_empty(xs: &[f64]) -> Result<(), CallError> {
    if xs.is_empty() {
        Err(RuntimeError::bare(RuntimeErrorKind::EmptyVector).into())
    } else {
        Ok(())
    }
}

pub fn mean(xs: &[f64]) -> Result<f64, CallError> {
    non_empty(xs)?;
    Ok(sum(xs) / xs.len() as f64)
}

/// Sample variance (n - 1 denominator), computed around the mean.
pub fn variance(xs: &[f64]) -> Result<f64, CallError> {
    let mean = mean(xs)?;
    let squares = xs
        .iter()
        .map(|x| (x - mean) * (x - mean))
        .collect::<CompensatedSum>();
    Ok(squares.total() / (xs.len() as f64 - 1.0))
}

pub fn stddev(xs: &[f64]) -> Result<f64, CallError> {
    variance(xs).map(f64::sqrt)
}

/// Standard error of the mean.
pub fn stderr(xs: &[f64]) -> Result<f64, CallError> {
    let n = xs.len() as f64;
    variance(xs).map(|var| (var / n).sqrt())
}

/// Wrap a statistic over a vector of numbers as a prelude function.
pub(crate) fn statistic(f: fn(&[f64]) -> Result<f64, CallError>) -> Function {
    Function::new(move |x| {
        let xs = numbers(&x)?;
        f(&xs).map(Value::Number)
    })
}
