//! Named context records attached to spans.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Value;

/// A context record attached to a span through
/// [`SpanHandle::add_context`](crate::sink::SpanHandle::add_context).
///
/// A span can carry several records, each under its own name (for instance
/// `"Check"` and `"Caller"`). A record is an ordered map of keys to values.
///
/// ## Example
///
/// ```rust
/// use gate_trace::Context;
///
/// let check = Context::new()
///     .with("ability", "edit-post")
///     .with("result", "allowed");
///
/// assert_eq!(check.get("ability").and_then(|v| v.as_str()), Some("edit-post"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Adds a key-value pair to the context.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts a key-value pair, mutating the context.
    ///
    /// Returns the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns `true` if the context contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns `true` if the context is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of entries in the context.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the context entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Encodes the context as compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Context> for Value {
    fn from(context: Context) -> Self {
        Value::Object(context.values)
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl IntoIterator for Context {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
