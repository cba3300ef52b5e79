pub mod error;
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::parse;
pub use parser::{DEFAULT_MAX_DEPTH, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use syntax::Position;

/// Variable the prefix `+` operator desugars to.
pub const PREFIX_PLUS: &str = "+_";
/// Variable the prefix `-` operator desugars to.
pub const PREFIX_MINUS: &str = "-_";

const OPERATOR_CHARS: &str = "+-*/%^=<>&|!";

/// Whether `name` is spelled entirely with operator characters, i.e. it can
/// only be written in source as `op <name>` or as an infix operator.
pub fn is_operator_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| OPERATOR_CHARS.contains(c))
}
