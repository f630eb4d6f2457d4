//! Per-instance property storage.

use serde_json::Value;
use std::collections::HashMap;

/// The private values of one instance, keyed by property name.
///
/// A store starts empty. Only explicit assignments create entries, so an
/// unset property keeps resolving to its descriptor default and reading
/// never materializes anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyStore {
    values: HashMap<String, Value>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}
