//! Custom-property blocks.

use crate::at_rules;
use indexmap::IndexMap;
use stylist_values::{Properties, Value};

/// A selector block declaring CSS variables, `:root` by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    selector: String,
    prefix: String,
    variables: IndexMap<String, Value>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::root()
    }
}

impl Theme {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            prefix: "--".to_string(),
            variables: IndexMap::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(":root")
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn define(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Reference to a variable, e.g. `var(--primary)`.
    pub fn var(&self, name: &str) -> Value {
        Value::text(format!("var({}{})", self.prefix, name))
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables as declarations, names carrying the prefix.
    pub fn properties(&self) -> Properties {
        let mut properties = Properties::new();
        for (name, value) in &self.variables {
            properties.set(format!("{}{}", self.prefix, name), value);
        }
        properties
    }

    /// Make this theme part of every stylesheet that includes the global
    /// registrations. A later theme with the same selector replaces it.
    pub fn register(self) -> Self {
        at_rules::register_theme(self.clone());
        self
    }
}
