//! est Standard Library
//!
//! The prelude is the default table of named values available to every
//! expression evaluated against [`Environment::prelude`]:
//!
//! - Math: constants and broadcasting numeric operators (see [`math`])
//! - Array: indexing, length and first element (see [`array`])
//! - Statistics: compensated sums and sample statistics (see [`stats`])
//!
//! The builders in [`builders`] are public so that hosts can define their own
//! broadcasting functions the same way.
//!
//! [`Environment::prelude`]: crate::evaluator::Environment::prelude

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::parser::{PREFIX_MINUS, PREFIX_PLUS};
use crate::values::{Type, Value};

pub mod array;
pub mod builders;
pub mod math;
pub mod stats;

pub use builders::{binary_op, reduce_op, unary_op};
pub use stats::CompensatedSum;

/// The read-only prelude table.
pub type Prelude = HashMap<&'static str, Value>;

static PRELUDE: Lazy<Prelude> = Lazy::new(build_prelude);

/// The default prelude, built on first use.
pub fn default_prelude() -> &'static Prelude {
    &PRELUDE
}

fn build_prelude() -> Prelude {
    let mut prelude = Prelude::new();

    for (name, value) in math::constants() {
        prelude.insert(name, value);
    }
    for (name, func) in math::unary_functions() {
        prelude.insert(name, Value::Function(func));
    }
    for (name, func) in math::binary_functions() {
        prelude.insert(name, Value::Function(func));
    }

    // Targets of the prefix `+` and `-` operators.
    let pos = prelude["pos"].clone();
    let neg = prelude["neg"].clone();
    prelude.insert(PREFIX_PLUS, pos);
    prelude.insert(PREFIX_MINUS, neg);

    prelude.insert("!", Value::Function(array::index_fn()));
    prelude.insert("len", Value::Function(array::len_fn()));
    prelude.insert("fst", Value::Function(array::fst_fn()));

    prelude.insert("sum", Value::Function(stats::statistic(|xs| Ok(stats::sum(xs)))));
    prelude.insert(
        "prod",
        Value::Function(reduce_op(
            Type::Number,
            |acc, x| match (acc, x) {
                (Value::Number(acc), Value::Number(x)) => Ok(Value::Number(acc * x)),
                (acc, _) => Err(builders::type_error(Type::Number, acc.ty())),
            },
            Value::Number(1.0),
        )),
    );
    prelude.insert("avg", Value::Function(stats::statistic(stats::mean)));
    prelude.insert("var", Value::Function(stats::statistic(stats::variance)));
    prelude.insert("stddev", Value::Function(stats::statistic(stats::stddev)));
    prelude.insert("stderr", Value::Function(stats::statistic(stats::stderr)));

    debug!(entries = prelude.len(), "built prelude");
    prelude
}

#[cfg(test)]
mod prelude_test;
