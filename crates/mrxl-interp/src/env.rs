//! Variable environments for the interpreter.

use crate::value::Value;
use std::collections::BTreeMap;

/// A flat name-to-value binding map.
///
/// MrXL has no nested scopes: the program environment holds loaded
/// inputs and statement results, and each map slice gets a fresh
/// environment holding only the names its binds introduce.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: BTreeMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind a name, overwriting any existing binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
