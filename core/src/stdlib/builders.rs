//! Higher-order builders for prelude functions.
//!
//! Unary and binary operations broadcast over vectors, recursively for
//! nested vectors. Reductions fold a vector of one element type into a value.

use std::sync::Arc;

use crate::evaluator::{Expected, RuntimeError};
use crate::values::{CallError, Function, Type, Value};

pub(crate) fn type_error(expected: impl Into<Expected>, actual: Type) -> CallError {
    RuntimeError::type_error(None, expected, actual).into()
}

/// Lift `func` over values of `arg_type` to also map over (nested) vectors.
///
/// `func` only ever receives values of `arg_type`. Any other argument is a
/// type error expecting "`arg_type` or vector".
pub fn unary_op<F>(arg_type: Type, func: F) -> Function
where
    F: Fn(Value) -> Result<Value, CallError> + Send + Sync + 'static,
{
    Function::new(move |x| apply_unary(arg_type, &func, x))
}

fn apply_unary<F>(arg_type: Type, func: &F, x: Value) -> Result<Value, CallError>
where
    F: Fn(Value) -> Result<Value, CallError>,
{
    if x.ty() == arg_type {
        return func(x);
    }
    match x {
        Value::Vector(elems) => elems
            .iter()
            .map(|elem| apply_unary(arg_type, func, elem.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::from),
        other => Err(type_error(Expected::OrVector(arg_type), other.ty())),
    }
}

/// Lift a curried binary function with broadcasting.
///
/// Scalar/scalar calls `func` directly; scalar/vector and vector/scalar map
/// the scalar across the vector; vector/vector pairs elements up to the
/// shorter length. Types are checked once both arguments are supplied.
pub fn binary_op<F>(x_type: Type, y_type: Type, func: F) -> Function
where
    F: Fn(Value, Value) -> Result<Value, CallError> + Send + Sync + 'static,
{
    let func = Arc::new(func);
    Function::new(move |x| {
        let func = Arc::clone(&func);
        Ok(Value::Function(Function::new(move |y| {
            apply_binary(x_type, y_type, func.as_ref(), x.clone(), y)
        })))
    })
}

fn apply_binary<F>(x_type: Type, y_type: Type, func: &F, x: Value, y: Value) -> Result<Value, CallError>
where
    F: Fn(Value, Value) -> Result<Value, CallError>,
{
    let tx = x.ty();
    let ty = y.ty();

    if tx == x_type {
        if ty == y_type {
            return func(x, y);
        }
        return match &y {
            Value::Vector(ys) => ys
                .iter()
                .map(|z| apply_binary(x_type, y_type, func, x.clone(), z.clone()))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::from),
            _ => Err(type_error(Expected::OrVector(y_type), ty)),
        };
    }

    match (&x, &y) {
        (Value::Vector(xs), _) if ty == y_type => xs
            .iter()
            .map(|z| apply_binary(x_type, y_type, func, z.clone(), y.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::from),
        (Value::Vector(xs), Value::Vector(ys)) => xs
            .iter()
            .zip(ys.iter())
            .map(|(a, b)| apply_binary(x_type, y_type, func, a.clone(), b.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::from),
        (Value::Vector(_), _) => Err(type_error(Expected::OrVector(y_type), ty)),
        _ => Err(type_error(Expected::OrVector(x_type), tx)),
    }
}

/// Fold a vector whose elements all have `elem_type`, starting from `init`.
pub fn reduce_op<F>(elem_type: Type, func: F, init: Value) -> Function
where
    F: Fn(Value, &Value) -> Result<Value, CallError> + Send + Sync + 'static,
{
    Function::new(move |x| {
        let elems = x
            .as_vector()
            .ok_or_else(|| type_error(Type::Vector, x.ty()))?;
        elems.iter().try_fold(init.clone(), |acc, elem| {
            if elem.ty() != elem_type {
                return Err(type_error(elem_type, elem.ty()));
            }
            func(acc, elem)
        })
    })
}

/// Adapt a float function for [`unary_op`] over numbers.
pub(crate) fn number_fn(f: fn(f64) -> f64) -> Function {
    unary_op(Type::Number, move |x| match x {
        Value::Number(n) => Ok(Value::Number(f(n))),
        other => Err(type_error(Type::Number, other.ty())),
    })
}

/// Adapt a float function for [`binary_op`] over numbers.
pub(crate) fn number_fn2(f: fn(f64, f64) -> f64) -> Function {
    binary_op(Type::Number, Type::Number, move |x, y| match (x, y) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        (a, _) => Err(type_error(Type::Number, a.ty())),
    })
}

/// The elements of `x` as floats; `x` must be a vector of numbers.
pub(crate) fn numbers(x: &Value) -> Result<Vec<f64>, CallError> {
    let elems = x
        .as_vector()
        .ok_or_else(|| type_error(Type::Vector, x.ty()))?;
    elems
        .iter()
        .map(|elem| {
            elem.as_number()
                .ok_or_else(|| type_error(Type::Number, elem.ty()))
        })
        .collect()
}
