use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores variable bindings as a stack of lexical scopes.
///
/// The bottom scope is the global scope and is never popped. Each block pushes
/// a child scope on entry and pops it on exit; a child scope never copies or
/// owns its parent's bindings, it only shadows them for lookups.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Declares `name` in the innermost scope.
    ///
    /// Re-declaring an existing name in the same scope silently overwrites
    /// the old binding.
    pub fn define(&mut self, name: &str, value: Value) {
        // The global scope always exists, so last_mut cannot fail.
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Reads the nearest binding for `name`, innermost scope first.
    ///
    /// # Returns
    /// `None` when no enclosing scope declares the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Writes through the nearest existing binding for `name`.
    ///
    /// Assignment never declares: when no enclosing scope holds the name,
    /// nothing changes and `false` is returned so the caller can report an
    /// undefined variable.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(binding) = scope.get_mut(name) {
                *binding = value;
                return true;
            }
        }
        false
    }

    /// Enters a child scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Leaves the innermost scope, dropping its bindings.
    ///
    /// The global scope stays in place even if this is called once too often.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::interpreter::value::Value;

    #[test]
    fn define_then_get() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn redeclaration_overwrites_in_same_scope() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.define("x", Value::Str("two".to_string()));

        assert_eq!(env.get("x"), Some(&Value::Str("two".to_string())));
    }

    #[test]
    fn inner_scope_shadows_without_destroying_outer() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        env.push_scope();
        env.define("x", Value::Number(2.0));
        assert_eq!(env.get("x"), Some(&Value::Number(2.0)));

        env.pop_scope();
        assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn assign_writes_through_to_enclosing_scope() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));

        env.push_scope();
        assert!(env.assign("x", Value::Number(5.0)));
        env.pop_scope();

        assert_eq!(env.get("x"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn assign_never_declares() {
        let mut env = Environment::new();

        assert!(!env.assign("ghost", Value::Nil));
        assert_eq!(env.get("ghost"), None);
    }

    #[test]
    fn global_scope_survives_extra_pops() {
        let mut env = Environment::new();
        env.define("x", Value::Number(1.0));
        env.pop_scope();

        assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    }
}
