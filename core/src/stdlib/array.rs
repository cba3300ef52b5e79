//! Vector access: `!` (1-based indexing), `len` and `fst`.

use crate::evaluator::{RuntimeError, RuntimeErrorKind};
use crate::values::{CallError, Function, Type, Value};

use super::builders::type_error;

fn elements(x: &Value) -> Result<&[Value], CallError> {
    x.as_vector().ok_or_else(|| type_error(Type::Vector, x.ty()))
}

/// Resolve a 1-based index into a 0-based offset within `len` elements.
///
/// The index must be a whole number between 1 and `len`.
pub fn resolve_index(index: f64, len: usize) -> Option<usize> {
    if index.fract() != 0.0 || index < 1.0 || index > len as f64 {
        return None;
    }
    Some(index as usize - 1)
}

/// `x ! i`: the `i`-th element of `x`, counting from 1.
pub fn index(x: &Value, i: &Value) -> Result<Value, CallError> {
    let elems = elements(x)?;
    let i = i.as_number().ok_or_else(|| type_error(Type::Number, i.ty()))?;
    resolve_index(i, elems.len())
        .map(|offset| elems[offset].clone())
        .ok_or_else(|| RuntimeError::bare(RuntimeErrorKind::IndexOutOfRange).into())
}

pub(crate) fn index_fn() -> Function {
    Function::new(|x| Ok(Value::Function(Function::new(move |i| index(&x, &i)))))
}

pub(crate) fn len_fn() -> Function {
    Function::new(|x| Ok(Value::Number(elements(&x)?.len() as f64)))
}

pub(crate) fn fst_fn() -> Function {
    Function::new(|x| {
        elements(&x)?
            .first()
            .cloned()
            .ok_or_else(|| RuntimeError::bare(RuntimeErrorKind::EmptyVector).into())
    })
}
