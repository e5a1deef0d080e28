//! Ordered, name-unique property store.

use crate::value::Value;
use crate::vendor::Vendor;
use indexmap::IndexMap;
use tracing::warn;

/// Ordered mapping from property name to property value.
///
/// Names are unique by their lowercased standard rendering, except custom
/// properties (`--name`) which are case-sensitive. Re-setting a name keeps
/// the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: IndexMap<String, (Value, Value)>,
}

fn key_of(name: &Value) -> String {
    key(&name.render(Vendor::Standard))
}

fn key(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        name.to_ascii_lowercase()
    }
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property.
    pub fn set(&mut self, name: impl Into<Value>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        self.entries.insert(key_of(&name), (name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .get(&key(name))
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries
            .shift_remove(&key(name))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name at `index` in insertion order.
    pub fn name(&self, index: usize) -> Option<&Value> {
        self.entries.get_index(index).map(|(_, (name, _))| name)
    }

    /// Value at `index` in insertion order.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.entries.get_index(index).map(|(_, (_, value))| value)
    }

    /// Position of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(&key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().map(|(name, value)| (name, value))
    }

    /// Replace every name with `mapper(name)`.
    ///
    /// Names that collide after mapping keep the first position and the last
    /// written value.
    pub fn rename<F>(&mut self, mut mapper: F) -> &mut Self
    where
        F: FnMut(&Value) -> Value,
    {
        let previous = std::mem::take(&mut self.entries);

        for (_, (name, value)) in previous {
            let renamed = mapper(&name);
            let key = key_of(&renamed);

            if self.entries.contains_key(&key) {
                warn!(property = %key, "renamed property collides with an earlier one");
            }
            self.entries.insert(key, (renamed, value));
        }
        self
    }

    /// Replace the value of `name` with `mapper(value)` when present.
    pub fn revalue<F>(&mut self, name: &str, mapper: F) -> &mut Self
    where
        F: FnOnce(&Value) -> Value,
    {
        if let Some((_, value)) = self.entries.get_mut(&key(name)) {
            *value = mapper(value);
        }
        self
    }

    /// Fold several longhand entries into one shorthand.
    ///
    /// Nothing happens when no component is present. Otherwise every component
    /// is removed and the shorthand receives their values joined by a space,
    /// with `default` standing in for absent components.
    pub fn compact_to(&mut self, shorthand: &str, default: impl Into<Value>, components: &[&str]) {
        if !components.iter().any(|component| self.get(component).is_some()) {
            return;
        }

        let default = default.into();
        let compacted = components.iter().fold(Value::empty(), |joined, component| {
            let value = self.remove(component).unwrap_or_else(|| default.clone());
            joined.join(" ", &value)
        });

        self.set(shorthand, compacted);
    }

    /// Whether `name` is present and its value matches `literal`.
    pub fn contains(&self, name: &str, literal: &str) -> bool {
        self.get(name).is_some_and(|value| value.matches(literal))
    }
}
