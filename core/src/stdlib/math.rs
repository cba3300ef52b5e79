//! Math Package
//!
//! Constants: PI, E, LN2, LN10, LOG2E, LOG10E, SQRT1_2, SQRT2
//! Unary:     pos, neg, abs, round, floor, ceil, sqrt, exp, log, log2, log10,
//!            sin, cos, tan, asin, acos, atan
//! Binary:    + - * / % ** log_ atan_

use std::f64::consts;

use crate::values::{Function, Value};

use super::builders::{number_fn, number_fn2};

pub(crate) fn constants() -> [(&'static str, Value); 8] {
    [
        ("PI", Value::Number(consts::PI)),
        ("E", Value::Number(consts::E)),
        ("LN2", Value::Number(consts::LN_2)),
        ("LN10", Value::Number(consts::LN_10)),
        ("LOG2E", Value::Number(consts::LOG2_E)),
        ("LOG10E", Value::Number(consts::LOG10_E)),
        ("SQRT1_2", Value::Number(consts::FRAC_1_SQRT_2)),
        ("SQRT2", Value::Number(consts::SQRT_2)),
    ]
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 { r + 1.0 } else { r }
}

/// Logarithm of `x` in base `base`.
pub fn log_base(base: f64, x: f64) -> f64 {
    x.ln() / base.ln()
}

pub(crate) fn unary_functions() -> Vec<(&'static str, Function)> {
    vec![
        ("pos", number_fn(|x| x)),
        ("neg", number_fn(|x| -x)),
        ("abs", number_fn(f64::abs)),
        ("round", number_fn(round_half_up)),
        ("floor", number_fn(f64::floor)),
        ("ceil", number_fn(f64::ceil)),
        ("sqrt", number_fn(f64::sqrt)),
        ("exp", number_fn(f64::exp)),
        ("log", number_fn(f64::ln)),
        ("log2", number_fn(f64::log2)),
        ("log10", number_fn(f64::log10)),
        ("sin", number_fn(f64::sin)),
        ("cos", number_fn(f64::cos)),
        ("tan", number_fn(f64::tan)),
        ("asin", number_fn(f64::asin)),
        ("acos", number_fn(f64::acos)),
        ("atan", number_fn(f64::atan)),
    ]
}

pub(crate) fn binary_functions() -> Vec<(&'static str, Function)> {
    vec![
        ("+", number_fn2(|x, y| x + y)),
        ("-", number_fn2(|x, y| x - y)),
        ("*", number_fn2(|x, y| x * y)),
        ("/", number_fn2(|x, y| x / y)),
        ("%", number_fn2(|x, y| x % y)),
        ("**", number_fn2(f64::powf)),
        ("log_", number_fn2(log_base)),
        ("atan_", number_fn2(f64::atan2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.4), 0.0);
    }

    #[test]
    fn test_log_base() {
        assert!((log_base(2.0, 8.0) - 3.0).abs() < 1e-12);
        assert!((log_base(10.0, 1000.0) - 3.0).abs() < 1e-12);
    }
}
