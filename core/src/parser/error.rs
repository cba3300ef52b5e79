use std::sync::Arc;

use pest::error::{ErrorVariant, InputLocation};
use thiserror::Error;

use super::parser::Rule;
use super::syntax::Position;

/// A syntax error, located at the first character the parser could not
/// accept.
#[derive(Debug, Clone, Error)]
#[error("Parse Error: {position}: {kind}")]
pub struct ParseError {
    pub position: Position,
    pub kind: ParseErrorKind,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Invalid number literal
    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Maximum nesting depth exceeded
    #[error("nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(position: Position, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The message without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source_name: &Arc<str>, source: &str) -> ParseError {
    let offset = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    let position = match pest::Position::new(source, offset) {
        Some(pos) => Position::from_pest(source_name, pos),
        None => Position::start_of(Arc::clone(source_name)),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, offset),
        },
        ErrorVariant::CustomError { message } => match message.strip_prefix("invalid number literal '") {
            Some(rest) => ParseErrorKind::InvalidNumber {
                text: rest.trim_end_matches('\'').to_string(),
            },
            None => ParseErrorKind::Other { message },
        },
    };

    ParseError::new(position, kind)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    // Group related rules into higher-level concepts
    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = match rule {
            Rule::decimal | Rule::hex | Rule::octal | Rule::nan | Rule::infinity => "number",
            Rule::ident => "identifier",
            Rule::vector => "vector",
            Rule::grouped | Rule::expression | Rule::application | Rule::main => "expression",
            Rule::binding | Rule::kw_let => "`let`",
            Rule::op_variable | Rule::kw_op => "`op`",
            Rule::kw_in => "`in`",
            Rule::eq => "`=`",
            Rule::operator | Rule::prefix_variable => "operator",
            Rule::pos | Rule::neg => "prefix operator",
            Rule::add | Rule::sub | Rule::mul | Rule::div | Rule::rem | Rule::pow | Rule::index => {
                "infix operator"
            }
            Rule::EOI => "end of input",
            _ => "something else",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.as_slice() {
        [] => "something else".to_string(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn describe_found(source: &str, offset: usize) -> String {
    match source.get(offset..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[Rule::decimal, Rule::hex]), "number");
        assert_eq!(format_expected_rules(&[Rule::eq]), "`=`");
        assert_eq!(
            format_expected_rules(&[Rule::add, Rule::sub, Rule::EOI]),
            "infix operator or end of input"
        );
        assert_eq!(
            format_expected_rules(&[Rule::decimal, Rule::ident, Rule::vector]),
            "number, identifier or vector"
        );
        assert_eq!(format_expected_rules(&[]), "something else");
    }

    #[test]
    fn test_describe_found() {
        assert_eq!(describe_found("x ? y", 2), "'?'");
        assert_eq!(describe_found("x +", 3), "end of input");
    }

    #[test]
    fn test_custom_error_conversion() {
        let source = "0.5";
        let err = pest::error::Error::<Rule>::new_from_pos(
            ErrorVariant::CustomError {
                message: "invalid number literal '0.5'".to_string(),
            },
            pest::Position::from_start(source),
        );
        let parse_err = convert_pest_error(err, &Arc::from("test"), source);
        assert_eq!(
            parse_err.kind,
            ParseErrorKind::InvalidNumber {
                text: "0.5".to_string()
            }
        );
        assert_eq!(parse_err.position.line(), 1);
        assert_eq!(parse_err.position.column(), 1);
        assert_eq!(
            parse_err.to_string(),
            "Parse Error: test:1:1: invalid number literal '0.5'"
        );
    }
}
