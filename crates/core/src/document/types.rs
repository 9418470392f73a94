//! Document types and data structures.

use indexmap::IndexMap;
use serde::Serialize;

/// Name of the implicit section holding pairs that precede any header.
pub const DEFAULT_SECTION: &str = "default";

/// Keys of a single section, in first-seen order.
pub type Section = IndexMap<String, Value>;

/// Sections of a document, in first-seen order.
pub type Sections = IndexMap<String, Section>;

/// Value stored under a key.
/// Serializes untagged: a string for `Single`, an array for `Multi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A key assigned once.
    Single(String),
    /// A key repeated within one section, in occurrence order.
    Multi(Vec<String>),
}

impl Value {
    /// All stored values, in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Value::Single(s) => std::slice::from_ref(s),
            Value::Multi(list) => list,
        };
        slice.iter().map(String::as_str)
    }

    /// The value if this was assigned exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Value::Single(s) => Some(s),
            Value::Multi(_) => None,
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.values().next()
    }

    pub fn last(&self) -> Option<&str> {
        match self {
            Value::Single(s) => Some(s),
            Value::Multi(list) => list.last().map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Value::Single(_) => 1,
            Value::Multi(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record another occurrence of the key, promoting `Single` to `Multi`.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            Value::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Value::Multi(vec![first, value]);
            }
            Value::Multi(list) => list.push(value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Single(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Single(value)
    }
}
