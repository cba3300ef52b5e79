//! Variable environments.
//!
//! An environment is a chain of frames. A child frame borrows its parent, so
//! binding a name in a nested scope shadows the outer binding without copying
//! or mutating the outer frame. Lookup walks the chain outward.

use hashbrown::HashMap;

use crate::stdlib::default_prelude;
use crate::values::Value;

/// A frame of name bindings with an optional enclosing frame.
#[derive(Debug, Default)]
pub struct Environment<'parent> {
    bindings: HashMap<String, Value>,
    parent: Option<&'parent Environment<'parent>>,
}

impl Environment<'static> {
    /// An empty root environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A root environment holding every entry of the default prelude.
    pub fn prelude() -> Self {
        default_prelude()
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl<'parent> Environment<'parent> {
    /// A new, empty frame nested inside `self`.
    pub fn child(&self) -> Environment<'_> {
        Environment {
            bindings: HashMap::new(),
            parent: Some(self),
        }
    }

    /// Bind `name` in this frame, replacing any binding of it in this frame only.
    pub fn register(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.register(name, value);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.bindings.get(name) {
                return Some(value);
            }
            frame = frame.parent?;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of frames from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        1 + self.parent.map_or(0, |parent| parent.depth())
    }
}

impl FromIterator<(String, Value)> for Environment<'static> {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_shadows_parent() {
        let root = Environment::new().with("x", 1.0).with("y", 2.0);
        let mut child = root.child();
        child.register("x", 10.0);

        assert_eq!(child.lookup("x"), Some(&Value::Number(10.0)));
        assert_eq!(child.lookup("y"), Some(&Value::Number(2.0)));
        assert_eq!(root.lookup("x"), Some(&Value::Number(1.0)));
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_missing_name() {
        let root = Environment::new().with("x", 1.0);
        assert!(root.child().lookup("z").is_none());
        assert!(!root.contains("z"));
    }

    #[test]
    fn test_prelude_environment() {
        let env = Environment::prelude();
        assert!(env.contains("PI"));
        assert!(env.contains("stddev"));
        assert!(env.contains("-_"));
    }
}
