use std::rc::Rc;
use std::sync::Arc;

use lazy_static::lazy_static;
use pest::Parser;
use pest::error::{Error as PestError, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;
use tracing::trace;

use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use super::syntax::{LineIndex, Position};
use super::{OPERATOR_CHARS, PREFIX_MINUS, PREFIX_PLUS};
use crate::ast::Expr;
use crate::stack;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                               // `*`, `/`, `%`
        .op(Op::infix(Rule::pow, Assoc::Left))           // `**`
        .op(Op::infix(Rule::index, Assoc::Left))         // `!`
        .op(Op::prefix(Rule::pos) | Op::prefix(Rule::neg)) // `+`, `-`
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

type BuildResult = Result<Rc<Expr>, PestError<Rule>>;

fn custom_error(message: impl Into<String>, pair: &Pair<'_, Rule>) -> PestError<Rule> {
    PestError::new_from_span(
        ErrorVariant::CustomError {
            message: message.into(),
        },
        pair.as_span(),
    )
}

/// Default limit on how deeply brackets and `let` bindings may nest.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Stack reserved per level of nesting while the grammar runs.
const STACK_PER_LEVEL: usize = 64 * 1024;

/// Upper bound on the stack reserved for the grammar.
const MAX_PARSE_STACK: usize = 1024 * 1024 * 1024;

/// Turns pest pairs into expression trees, tagging every node with a
/// position in the named source.
struct TreeBuilder<'s> {
    lines: LineIndex<'s>,
}

impl TreeBuilder<'_> {
    fn position(&self, pair: &Pair<'_, Rule>) -> Position {
        self.lines.position(pair.as_span().start())
    }

    fn next_child<'i>(&self, pairs: &mut Pairs<'i, Rule>, parent: &Pair<'i, Rule>) -> Result<Pair<'i, Rule>, PestError<Rule>> {
        pairs
            .next()
            .ok_or_else(|| custom_error("missing expected pair in rule", parent))
    }

    fn build(&self, pair: Pair<'_, Rule>) -> BuildResult {
        stack::guarded(|| self.build_inner(pair))
    }

    fn build_inner(&self, pair: Pair<'_, Rule>) -> BuildResult {
        match pair.as_rule() {
            Rule::main => {
                let mut inner = pair.clone().into_inner();
                let expr = self.next_child(&mut inner, &pair)?;
                self.build(expr)
            }

            Rule::expression => PRATT_PARSER
                .map_primary(|primary| self.build(primary))
                .map_prefix(|op, rhs| {
                    let pos = self.position(&op);
                    let name = match op.as_rule() {
                        Rule::pos => PREFIX_PLUS,
                        Rule::neg => PREFIX_MINUS,
                        _ => unreachable!("Unknown prefix operator: {:?}", op.as_rule()),
                    };
                    Ok(Expr::apply(pos.clone(), Expr::variable(pos, name), rhs?))
                })
                .map_infix(|lhs, op, rhs| {
                    // `x op y` is `(op x) y`, every node at the operator.
                    let pos = self.position(&op);
                    let partial = Expr::apply(pos.clone(), Expr::variable(pos.clone(), op.as_str()), lhs?);
                    Ok(Expr::apply(pos, partial, rhs?))
                })
                .parse(pair.into_inner()),

            Rule::application => {
                let mut atoms = pair.clone().into_inner();
                let head = self.build(self.next_child(&mut atoms, &pair)?)?;
                atoms.try_fold(head, |func, arg| {
                    let pos = self.position(&arg);
                    Ok(Expr::apply(pos, func, self.build(arg)?))
                })
            }

            Rule::binding => {
                let pos = self.position(&pair);
                let mut parts = pair
                    .clone()
                    .into_inner()
                    .filter(|p| !matches!(p.as_rule(), Rule::kw_let | Rule::eq | Rule::kw_in));
                let (Some(name), Some(bound), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(custom_error("malformed let binding", &pair));
                };
                Ok(Expr::let_in(pos, name.as_str(), self.build(bound)?, self.build(body)?))
            }

            Rule::grouped => {
                let mut inner = pair.clone().into_inner();
                let expr = self.next_child(&mut inner, &pair)?;
                self.build(expr)
            }

            Rule::vector => {
                let pos = self.position(&pair);
                let elems = pair
                    .into_inner()
                    .map(|elem| self.build(elem))
                    .collect::<Result<_, _>>()?;
                Ok(Expr::vector(pos, elems))
            }

            Rule::op_variable => {
                let pos = self.position(&pair);
                let operator = pair
                    .clone()
                    .into_inner()
                    .find(|p| matches!(p.as_rule(), Rule::operator | Rule::prefix_variable))
                    .ok_or_else(|| custom_error("missing operator after `op`", &pair))?;
                Ok(Expr::variable(pos, operator.as_str()))
            }

            Rule::ident => Ok(Expr::variable(self.position(&pair), pair.as_str())),

            Rule::decimal => {
                let value: f64 = pair
                    .as_str()
                    .parse()
                    .map_err(|_| custom_error(format!("invalid number literal '{}'", pair.as_str()), &pair))?;
                Ok(Expr::literal(self.position(&pair), value))
            }

            Rule::hex => Ok(Expr::literal(self.position(&pair), radix_value(&pair.as_str()[2..], 16))),

            Rule::octal => Ok(Expr::literal(self.position(&pair), radix_value(&pair.as_str()[2..], 8))),

            Rule::nan => Ok(Expr::literal(self.position(&pair), f64::NAN)),

            Rule::infinity => Ok(Expr::literal(self.position(&pair), f64::INFINITY)),

            rule => Err(custom_error(format!("unexpected rule {:?}", rule), &pair)),
        }
    }
}

/// Digits in the given radix, accumulated as a float so that long literals
/// lose precision instead of overflowing.
fn radix_value(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

/// Byte offset of the first opening bracket, `let` or operator that nests
/// deeper than `max_depth`, together with the depth it reaches.
///
/// This is a lexical scan: brackets close every `let` opened inside them,
/// and a comma closes the `let`s opened since the enclosing bracket. A run
/// of operator tokens with no operand between them (`- - -x`) nests one
/// level per token.
fn excessive_nesting(source: &str, max_depth: usize) -> Option<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut open: Vec<u8> = Vec::new();
    let mut operators = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b if OPERATOR_CHARS.as_bytes().contains(&b) => {
                let start = i;
                while i < bytes.len() && OPERATOR_CHARS.as_bytes().contains(&bytes[i]) {
                    i += 1;
                }
                operators += 1;
                if open.len() + operators > max_depth {
                    return Some((start, open.len() + operators));
                }
                continue;
            }
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'(' | b'[' => {
                operators = 0;
                open.push(bytes[i]);
            }
            b')' | b']' => {
                operators = 0;
                while let Some(top) = open.pop() {
                    if top != b'l' {
                        break;
                    }
                }
            }
            b',' => {
                operators = 0;
                while open.last() == Some(&b'l') {
                    open.pop();
                }
            }
            b if b.is_ascii_alphanumeric() || b == b'$' => {
                operators = 0;
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'_' | b'\'' | b'$')) {
                    i += 1;
                }
                if &bytes[start..i] == b"let" {
                    open.push(b'l');
                    if open.len() > max_depth {
                        return Some((start, open.len()));
                    }
                }
                continue;
            }
            _ => {}
        }
        if open.len() > max_depth {
            return Some((i, open.len()));
        }
        i += 1;
    }
    None
}

/// Parse `source` into an expression tree. `source_name` is only used to
/// label positions.
///
/// Brackets and `let` bindings may nest at most [`DEFAULT_MAX_DEPTH`] levels.
pub fn parse(source_name: &str, source: &str) -> Result<Rc<Expr>, ParseError> {
    parse_with_max_depth(source_name, source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
///
/// Input nesting deeper than `max_depth` fails with
/// [`ParseErrorKind::MaxDepthExceeded`] before the grammar runs.
pub fn parse_with_max_depth(source_name: &str, source: &str, max_depth: usize) -> Result<Rc<Expr>, ParseError> {
    trace!(source_name, len = source.len(), max_depth, "parsing");
    let source_name: Arc<str> = Arc::from(source_name);
    let builder = TreeBuilder {
        lines: LineIndex::new(Arc::clone(&source_name), source),
    };

    if let Some((offset, depth)) = excessive_nesting(source, max_depth) {
        return Err(ParseError::new(
            builder.lines.position(offset),
            ParseErrorKind::MaxDepthExceeded { depth, max_depth },
        ));
    }

    let needed = max_depth
        .saturating_add(1)
        .saturating_mul(STACK_PER_LEVEL)
        .min(MAX_PARSE_STACK);
    let result = stack::reserved(needed, || {
        ExpressionParser::parse(Rule::main, source).and_then(|mut pairs| match pairs.next() {
            Some(main) => builder.build(main),
            None => Err(PestError::new_from_pos(
                ErrorVariant::CustomError {
                    message: "empty parse result".to_string(),
                },
                pest::Position::from_start(source),
            )),
        })
    });

    result.map_err(|err| convert_pest_error(err, &source_name, source))
}
