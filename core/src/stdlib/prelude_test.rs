//! Tests for the default prelude table.

use super::default_prelude;
use crate::{
    evaluator::{Expected, RuntimeErrorKind},
    values::{CallError, Type, Value},
};

fn call(name: &str, x: Value) -> Result<Value, CallError> {
    let func = default_prelude()[name]
        .as_function()
        .unwrap_or_else(|| panic!("{} is not a function", name));
    func.call(x)
}

fn call2(name: &str, x: Value, y: Value) -> Result<Value, CallError> {
    match call(name, x)? {
        Value::Function(g) => g.call(y),
        other => panic!("{} did not return a function: {:?}", name, other),
    }
}

fn error_kind(result: Result<Value, CallError>) -> RuntimeErrorKind {
    match result {
        Err(CallError::Runtime(err)) => err.kind().clone(),
        other => panic!("expected a runtime error, got {:?}", other),
    }
}

fn number(result: Result<Value, CallError>) -> f64 {
    result
        .expect("call failed")
        .as_number()
        .expect("not a number")
}

#[test]
fn test_constants_are_numbers() {
    let prelude = default_prelude();
    for name in ["PI", "E", "LN2", "LN10", "LOG2E", "LOG10E", "SQRT1_2", "SQRT2"] {
        assert_eq!(prelude[name].ty(), Type::Number, "{}", name);
    }
    assert_eq!(prelude["PI"], Value::Number(std::f64::consts::PI));
}

#[test]
fn test_pos_and_neg() {
    assert_eq!(call("pos", Value::Number(256.0)).unwrap(), Value::Number(256.0));
    assert_eq!(call("neg", Value::Number(256.0)).unwrap(), Value::Number(-256.0));
    assert_eq!(
        call("neg", Value::numbers([256.0, -256.0])).unwrap(),
        Value::numbers([-256.0, 256.0])
    );
    assert_eq!(
        call("-_", Value::numbers([1.0, -2.0])).unwrap(),
        Value::numbers([-1.0, 2.0])
    );
    assert!(call("pos", Value::from("test")).is_err());
    assert!(call("neg", Value::vector(["foo".into(), "bar".into()])).is_err());
}

#[test]
fn test_unary_math() {
    assert_eq!(number(call("abs", Value::Number(-3.0))), 3.0);
    assert_eq!(number(call("floor", Value::Number(2.7))), 2.0);
    assert_eq!(number(call("ceil", Value::Number(2.1))), 3.0);
    assert_eq!(number(call("round", Value::Number(-0.5))), 0.0);
    assert_eq!(number(call("sqrt", Value::Number(16.0))), 4.0);
    assert_eq!(number(call("log2", Value::Number(8.0))), 3.0);
    assert!(number(call("log", Value::Number(-1.0))).is_nan());
}

#[test]
fn test_binary_broadcasting() {
    assert_eq!(
        call2("+", Value::numbers([1.0, 2.0, 3.0]), Value::Number(10.0)).unwrap(),
        Value::numbers([11.0, 12.0, 13.0])
    );
    assert_eq!(
        call2("+", Value::numbers([1.0, 2.0, 3.0]), Value::numbers([10.0, 20.0])).unwrap(),
        Value::numbers([11.0, 22.0])
    );
    assert_eq!(
        error_kind(call2("+", Value::from("a"), Value::Number(1.0))),
        RuntimeErrorKind::Type {
            expected: Expected::OrVector(Type::Number),
            actual: Type::String,
        }
    );
}

#[test]
fn test_binary_arithmetic() {
    assert_eq!(number(call2("-", Value::Number(1.0), Value::Number(3.0))), -2.0);
    assert_eq!(number(call2("/", Value::Number(1.0), Value::Number(4.0))), 0.25);
    assert_eq!(number(call2("%", Value::Number(-7.0), Value::Number(3.0))), -1.0);
    assert_eq!(number(call2("**", Value::Number(2.0), Value::Number(10.0))), 1024.0);
    let angle = number(call2("atan_", Value::Number(1.0), Value::Number(1.0)));
    assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    assert!(number(call2("/", Value::Number(1.0), Value::Number(0.0))).is_infinite());
}

#[test]
fn test_indexing() {
    let v = Value::numbers([10.0, 20.0, 30.0]);
    assert_eq!(call2("!", v.clone(), Value::Number(2.0)).unwrap(), Value::Number(20.0));
    for i in [0.0, -1.0, 3.5, 4.0] {
        assert_eq!(
            error_kind(call2("!", v.clone(), Value::Number(i))),
            RuntimeErrorKind::IndexOutOfRange,
            "index {}",
            i
        );
    }
}

#[test]
fn test_reductions() {
    assert_eq!(number(call("sum", Value::numbers([1.0, 2.0, 3.5]))), 6.5);
    assert_eq!(number(call("sum", Value::vector([]))), 0.0);
    assert_eq!(number(call("prod", Value::numbers([2.0, 3.0, 4.0]))), 24.0);
    assert_eq!(number(call("prod", Value::vector([]))), 1.0);
    assert_eq!(number(call("len", Value::numbers([1.0, 2.0]))), 2.0);
    assert_eq!(
        error_kind(call("sum", Value::vector([Value::Number(1.0), Value::Bool(true)]))),
        RuntimeErrorKind::Type {
            expected: Expected::Just(Type::Number),
            actual: Type::Bool,
        }
    );
    assert_eq!(
        error_kind(call("prod", Value::Number(1.0))),
        RuntimeErrorKind::Type {
            expected: Expected::Just(Type::Vector),
            actual: Type::Number,
        }
    );
}

#[test]
fn test_statistics() {
    let xs = Value::numbers([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_eq!(number(call("avg", xs.clone())), 5.0);
    let stddev = number(call("stddev", xs.clone()));
    assert!((stddev - 2.138_089_935_299_395).abs() < 1e-12, "{}", stddev);
    let stderr = number(call("stderr", xs));
    assert!((stderr - 2.138_089_935_299_395 / 8f64.sqrt()).abs() < 1e-12, "{}", stderr);

    for name in ["avg", "var", "stddev", "stderr"] {
        assert_eq!(
            error_kind(call(name, Value::vector([]))),
            RuntimeErrorKind::EmptyVector,
            "{}",
            name
        );
    }
}
