//! The universal value representation for workflow documents.
//!
//! [`Value`] is an explicit tagged union over everything a decoded document
//! can contain: scalars, arrays, and objects. Objects preserve key insertion
//! order (via `IndexMap`), which the editor and normalizer both rely on.
//!
//! Containers are `Arc`-wrapped, so cloning a `Value` is cheap and editing
//! operations can share unchanged subtrees between the old and new tree.
//! [`Value::same_node`] exposes that sharing: it is true exactly when two
//! container values are the same allocation, which lets callers find the
//! smallest changed region after an edit.

mod convert;


use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// Ordered string-keyed mapping used for object values.
pub type Object = IndexMap<String, Value>;

/// A nested document value: scalar, array, or object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null (or an absent YAML value).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Array(Arc<Vec<Value>>),
    /// String-keyed mapping, insertion order preserved.
    Object(Arc<Object>),
}

/// The coarse shape of a value, as seen by the field tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Null, bool, number, or string.
    Scalar,
    /// An object value.
    Object,
    /// An array value.
    Array,
}

impl Value {
    /// A fresh empty object.
    pub fn object() -> Self {
        Value::Object(Arc::new(Object::new()))
    }

    /// A fresh empty array.
    pub fn array() -> Self {
        Value::Array(Arc::new(Vec::new()))
    }

    /// The coarse kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            _ => ValueKind::Scalar,
        }
    }

    /// True for object values.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for array values.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// True for null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The object contents, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The array contents, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The string contents, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Child value under `key`, if this is an object holding that key.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Child value at `index`, if this is an array that long.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Best-effort scalar-to-string coercion.
    ///
    /// Strings pass through, numbers and booleans render in their canonical
    /// form. `None` for null and containers; callers that want "" for null
    /// handle that themselves.
    pub fn coerce_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Best-effort boolean coercion: booleans pass through, the strings
    /// "true"/"false" parse, everything else is `None`.
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Pointer identity for containers, value equality for scalars.
    ///
    /// After an edit, an unchanged subtree of the new tree is the same
    /// allocation as in the old tree, so this returns true for it.
    pub fn same_node(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            _ => self == other,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(Arc::new(iter.into_iter().collect()))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(Arc::new(
            iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}
