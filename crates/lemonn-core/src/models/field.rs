//! Field kinds and values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a form field. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, select or radio value
    Text,
    /// Single checkbox / toggle
    Flag,
    /// Checkbox group or multi-select
    Multi,
}

impl FieldKind {
    /// The empty value for this kind.
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Multi => FieldValue::Multi(MultiSet::new()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Flag => write!(f, "flag"),
            FieldKind::Multi => write!(f, "multi"),
        }
    }
}

/// Value accepted by `set_scalar`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Flag(bool),
}

impl ScalarValue {
    /// Kind of field this value can be stored in.
    pub fn kind(&self) -> FieldKind {
        match self {
            ScalarValue::Text(_) => FieldKind::Text,
            ScalarValue::Flag(_) => FieldKind::Flag,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Flag(value)
    }
}

/// Current value of a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Multi(MultiSet),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Multi(_) => FieldKind::Multi,
        }
    }

    /// Text content, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiSet> {
        match self {
            FieldValue::Multi(set) => Some(set),
            _ => None,
        }
    }
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Text(s) => FieldValue::Text(s),
            ScalarValue::Flag(b) => FieldValue::Flag(b),
        }
    }
}

/// Set of strings that remembers insertion order for display.
///
/// Checkbox groups hold a handful of items, so membership is a linear scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MultiSet {
    items: Vec<String>,
}

impl MultiSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item. Returns false if it was already present.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    /// Remove an item. Returns false if it was absent.
    pub fn remove(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        self.items.len() != before
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Items in insertion order.
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Join items in insertion order.
    pub fn join(&self, delimiter: &str) -> String {
        self.items.join(delimiter)
    }
}

impl<S: AsRef<str>> FromIterator<S> for MultiSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = MultiSet::new();
        for item in iter {
            set.insert(item.as_ref());
        }
        set
    }
}
