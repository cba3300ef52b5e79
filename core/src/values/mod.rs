pub mod function;
pub mod value;

pub use function::{CallError, Function};
pub use value::{Type, Value, type_of};
