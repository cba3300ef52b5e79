use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::evaluator::{Environment, Evaluator, RuntimeError};
use crate::optimizer;
use crate::parser::Position;
use crate::values::Value;

/// An expression node.
///
/// Nodes are immutable once built and shared through `Rc`. Each node also
/// owns a single-assignment slot for its evaluation result: the first
/// successful evaluation fills it, and later evaluations of the same node
/// return the stored value regardless of the environment they are given.
pub struct Expr {
    pos: Position,
    kind: ExprKind,
    result: OnceCell<Value>,
}

#[derive(Debug, PartialEq)]
pub enum ExprKind {
    Literal(Value),
    Vector(Vec<Rc<Expr>>),
    Variable(String),
    Apply {
        func: Rc<Expr>,
        arg: Rc<Expr>,
    },
    Let {
        name: String,
        bound: Rc<Expr>,
        body: Rc<Expr>,
    },
}

impl Expr {
    pub fn new(pos: Position, kind: ExprKind) -> Rc<Self> {
        Rc::new(Self {
            pos,
            kind,
            result: OnceCell::new(),
        })
    }

    pub fn literal(pos: Position, value: impl Into<Value>) -> Rc<Self> {
        Self::new(pos, ExprKind::Literal(value.into()))
    }

    pub fn vector(pos: Position, elems: Vec<Rc<Expr>>) -> Rc<Self> {
        Self::new(pos, ExprKind::Vector(elems))
    }

    pub fn variable(pos: Position, name: impl Into<String>) -> Rc<Self> {
        Self::new(pos, ExprKind::Variable(name.into()))
    }

    pub fn apply(pos: Position, func: Rc<Expr>, arg: Rc<Expr>) -> Rc<Self> {
        Self::new(pos, ExprKind::Apply { func, arg })
    }

    pub fn let_in(pos: Position, name: impl Into<String>, bound: Rc<Expr>, body: Rc<Expr>) -> Rc<Self> {
        Self::new(
            pos,
            ExprKind::Let {
                name: name.into(),
                bound,
                body,
            },
        )
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Rewrite this tree with maximal sharing of equal subtrees and every
    /// `let` binding inlined.
    pub fn optimise(self: &Rc<Self>) -> Rc<Expr> {
        optimizer::optimise(self)
    }

    /// Evaluate with the default evaluator options.
    pub fn eval(&self, env: &Environment<'_>) -> Result<Value, RuntimeError> {
        Evaluator::default().eval(self, env)
    }

    /// The memoised result, if this node has been evaluated successfully.
    pub fn cached(&self) -> Option<&Value> {
        self.result.get()
    }

    /// Store `value` unless a result is already present; return the stored one.
    pub(crate) fn memoize(&self, value: Value) -> Value {
        self.result.get_or_init(|| value).clone()
    }
}

/// Releases deep trees without recursing once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(&mut self.kind, &mut pending);
        while let Some(child) = pending.pop() {
            if let Ok(mut expr) = Rc::try_unwrap(child) {
                take_children(&mut expr.kind, &mut pending);
            }
        }
    }
}

fn take_children(kind: &mut ExprKind, pending: &mut Vec<Rc<Expr>>) {
    if matches!(kind, ExprKind::Literal(_) | ExprKind::Variable(_)) {
        return;
    }
    match std::mem::replace(kind, ExprKind::Vector(Vec::new())) {
        ExprKind::Vector(elems) => pending.extend(elems),
        ExprKind::Apply { func, arg } => pending.extend([func, arg]),
        ExprKind::Let { bound, body, .. } => pending.extend([bound, body]),
        ExprKind::Literal(_) | ExprKind::Variable(_) => {}
    }
}

/// Structural equality: positions and cached results are ignored.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}
