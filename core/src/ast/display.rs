// Pretty printing of expressions back into source syntax.

use std::fmt;

use super::{Expr, ExprKind};
use crate::parser::{PREFIX_MINUS, PREFIX_PLUS, is_operator_name};
use crate::stack;
use crate::values::Value;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        stack::guarded(|| self.write_source(f))
    }
}

impl Expr {
    fn write_source(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Literal(value) => write!(f, "{}", value),
            ExprKind::Vector(elems) => {
                f.write_str("[")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                f.write_str("]")
            }
            ExprKind::Variable(name) => {
                if is_operator_name(name) || name == PREFIX_PLUS || name == PREFIX_MINUS {
                    write!(f, "op {}", name)
                } else {
                    f.write_str(name)
                }
            }
            ExprKind::Apply { func, arg } => {
                if let Some(symbol) = prefix_symbol(func) {
                    f.write_str(symbol)?;
                } else if needs_parens_as_func(func) {
                    write!(f, "({}) ", func)?;
                } else {
                    write!(f, "{} ", func)?;
                }
                if is_simple_arg(arg) {
                    write!(f, "{}", arg)
                } else {
                    write!(f, "({})", arg)
                }
            }
            ExprKind::Let { name, bound, body } => {
                write!(f, "let {} = {} in {}", name, bound, body)
            }
        }
    }
}

/// The source symbol of a prefix operator variable.
fn prefix_symbol(expr: &Expr) -> Option<&'static str> {
    match expr.kind() {
        ExprKind::Variable(name) if name == PREFIX_PLUS => Some("+"),
        ExprKind::Variable(name) if name == PREFIX_MINUS => Some("-"),
        _ => None,
    }
}

fn needs_parens_as_func(expr: &Expr) -> bool {
    match expr.kind() {
        ExprKind::Let { .. } => true,
        ExprKind::Apply { func, .. } => prefix_symbol(func).is_some(),
        _ => false,
    }
}

fn is_simple_arg(expr: &Expr) -> bool {
    match expr.kind() {
        ExprKind::Literal(Value::Number(n)) => !n.is_sign_negative() || n.is_nan(),
        ExprKind::Literal(_) | ExprKind::Vector(_) | ExprKind::Variable(_) => true,
        ExprKind::Apply { .. } | ExprKind::Let { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Expr;
    use crate::parser::Position;

    fn pos() -> Position {
        Position::default()
    }

    #[test]
    fn test_apply_parenthesizes_compound_args() {
        let f = Expr::variable(pos(), "f");
        let x = Expr::variable(pos(), "x");
        let inner = Expr::apply(pos(), f.clone(), x.clone());
        let outer = Expr::apply(pos(), f.clone(), inner);
        assert_eq!(outer.to_string(), "f (f x)");

        let chained = Expr::apply(pos(), Expr::apply(pos(), f, x), Expr::literal(pos(), 2.0));
        assert_eq!(chained.to_string(), "f x 2");
    }

    #[test]
    fn test_operator_variables() {
        let plus = Expr::variable(pos(), "+");
        let app = Expr::apply(
            pos(),
            Expr::apply(pos(), plus, Expr::variable(pos(), "x")),
            Expr::variable(pos(), "y"),
        );
        assert_eq!(app.to_string(), "op + x y");
    }

    #[test]
    fn test_prefix_operators() {
        let neg = Expr::apply(pos(), Expr::variable(pos(), "-_"), Expr::variable(pos(), "x"));
        assert_eq!(neg.to_string(), "-x");

        let applied = Expr::apply(pos(), neg.clone(), Expr::variable(pos(), "y"));
        assert_eq!(applied.to_string(), "(-x) y");

        let nested = Expr::apply(pos(), Expr::variable(pos(), "+_"), neg);
        assert_eq!(nested.to_string(), "+(-x)");
    }

    #[test]
    fn test_bare_prefix_variables() {
        assert_eq!(Expr::variable(pos(), "-_").to_string(), "op -_");
        let mapped = Expr::apply(
            pos(),
            Expr::apply(pos(), Expr::variable(pos(), "map"), Expr::variable(pos(), "+_")),
            Expr::variable(pos(), "xs"),
        );
        assert_eq!(mapped.to_string(), "map op +_ xs");
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(Expr::literal(pos(), f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::literal(pos(), f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Expr::literal(pos(), 1.5e-4).to_string(), "0.00015");

        let app = Expr::apply(pos(), Expr::variable(pos(), "f"), Expr::literal(pos(), -1.0));
        assert_eq!(app.to_string(), "f (-1)");
    }

    #[test]
    fn test_let_and_vector() {
        let e = Expr::vector(
            pos(),
            vec![
                Expr::literal(pos(), 256.0),
                Expr::let_in(pos(), "y", Expr::literal(pos(), 128.0), Expr::variable(pos(), "z")),
            ],
        );
        assert_eq!(e.to_string(), "[256, let y = 128 in z]");

        let func = Expr::let_in(pos(), "g", Expr::variable(pos(), "f"), Expr::variable(pos(), "g"));
        let app = Expr::apply(pos(), func, Expr::variable(pos(), "x"));
        assert_eq!(app.to_string(), "(let g = f in g) x");
    }
}
