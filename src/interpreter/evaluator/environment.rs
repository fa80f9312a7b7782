use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The single, flat variable scope of a run.
///
/// Created empty for every run and owned by the evaluation context; only
/// assignments write to it.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }
}
