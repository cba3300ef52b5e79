//! Common-subexpression sharing and `let` inlining.
//!
//! The optimiser rebuilds a tree bottom-up. Every rebuilt literal, vector,
//! variable and application is looked up among the nodes produced so far in
//! the same pass; when a structurally equal node exists, that node is reused,
//! so equal subtrees end up as the same `Rc`. `let` nodes never survive: the
//! bound expression is optimised once and substituted for every use of the
//! name in the body.
//!
//! Every node handed to [`Context::seek`] already has canonical children, so
//! two candidates are equal exactly when they have the same variant, the
//! same literal or name, and pointer-identical children. Lookup is a linear
//! scan in insertion order (first seen wins) using that shallow comparison.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::ast::{Expr, ExprKind};
use crate::stack;

/// Optimiser state threaded through one pass.
///
/// Contexts created by [`bind`](Context::bind) share the list of seen nodes
/// with their parent but get their own frame of bindings.
#[derive(Clone, Default)]
pub struct Context {
    soughts: Rc<RefCell<Vec<Rc<Expr>>>>,
    bounds: Option<Rc<Frame>>,
}

struct Frame {
    name: String,
    expr: Rc<Expr>,
    parent: Option<Rc<Frame>>,
}

impl Context {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return the first seen node equal to `expr`, or register `expr` and return it.
    ///
    /// The children of `expr` must themselves be results of `seek` in this
    /// context (or a context sharing its seen nodes).
    pub fn seek(&self, expr: Rc<Expr>) -> Rc<Expr> {
        let mut soughts = self.soughts.borrow_mut();
        if let Some(sought) = soughts.iter().find(|sought| same_node(sought, &expr)) {
            return Rc::clone(sought);
        }
        soughts.push(Rc::clone(&expr));
        expr
    }

    /// A child context in which `name` stands for `expr`.
    pub fn bind(&self, name: &str, expr: Rc<Expr>) -> Context {
        Context {
            soughts: Rc::clone(&self.soughts),
            bounds: Some(Rc::new(Frame {
                name: name.to_string(),
                expr,
                parent: self.bounds.clone(),
            })),
        }
    }

    /// The innermost expression bound to `name`.
    pub fn find(&self, name: &str) -> Option<Rc<Expr>> {
        let mut frame = self.bounds.as_deref();
        while let Some(current) = frame {
            if current.name == name {
                return Some(Rc::clone(&current.expr));
            }
            frame = current.parent.as_deref();
        }
        None
    }

    /// Number of distinct nodes registered so far.
    pub fn len(&self) -> usize {
        self.soughts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Equality of nodes whose children are canonical.
fn same_node(a: &Expr, b: &Expr) -> bool {
    match (a.kind(), b.kind()) {
        (ExprKind::Literal(x), ExprKind::Literal(y)) => x == y,
        (ExprKind::Variable(x), ExprKind::Variable(y)) => x == y,
        (ExprKind::Vector(xs), ExprKind::Vector(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| Rc::ptr_eq(x, y))
        }
        (
            ExprKind::Apply { func: f1, arg: a1 },
            ExprKind::Apply { func: f2, arg: a2 },
        ) => Rc::ptr_eq(f1, f2) && Rc::ptr_eq(a1, a2),
        _ => false,
    }
}

/// Optimise `root` in a fresh context.
pub fn optimise(root: &Rc<Expr>) -> Rc<Expr> {
    let context = Context::empty();
    let optimised = optimise_in(root, &context);
    debug!(distinct_nodes = context.len(), "optimised expression");
    optimised
}

/// Optimise `expr` within an existing context.
pub fn optimise_in(expr: &Rc<Expr>, context: &Context) -> Rc<Expr> {
    stack::guarded(|| optimise_node(expr, context))
}

fn optimise_node(expr: &Rc<Expr>, context: &Context) -> Rc<Expr> {
    match expr.kind() {
        ExprKind::Literal(_) => context.seek(Rc::clone(expr)),
        ExprKind::Vector(elems) => {
            let elems = elems
                .iter()
                .map(|elem| optimise_in(elem, context))
                .collect();
            context.seek(Expr::vector(expr.pos().clone(), elems))
        }
        ExprKind::Variable(name) => match context.find(name) {
            Some(bound) => bound,
            None => context.seek(Rc::clone(expr)),
        },
        ExprKind::Apply { func, arg } => {
            let func = optimise_in(func, context);
            let arg = optimise_in(arg, context);
            context.seek(Expr::apply(expr.pos().clone(), func, arg))
        }
        ExprKind::Let { name, bound, body } => {
            let bound = optimise_in(bound, context);
            optimise_in(body, &context.bind(name, bound))
        }
    }
}
