// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A value with identity. Two `Shared` values alias each other when they
/// point at the same allocation, and may form cycles.
pub type SharedValue = Rc<RefCell<Value>>;

/// Key of an [`Value::Array`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

/// Runtime value rendered by the debug dump.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered key-mapped sequence; keys may mix indices and names.
    Array(Vec<(Key, Value)>),
    /// Object-like record with named fields.
    Object {
        class: String,
        fields: Vec<(String, Value)>,
    },
    /// Opaque handle such as an open connection.
    Resource { kind: String },
    Shared(SharedValue),
}

impl Value {
    /// Display name of the value's runtime kind. `Shared` reports the kind
    /// of the value it points at.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "Boolean",
            Self::Int(_) => "Integer",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Object { .. } => "Object",
            Self::Resource { .. } => "Resource",
            Self::Shared(inner) => inner.try_borrow().map_or("Shared", |v| v.kind_name()),
        }
    }

    /// Wrap a value so it can be aliased from several places.
    pub fn shared(value: Value) -> Self {
        Self::Shared(Rc::new(RefCell::new(value)))
    }

    /// Build an index-keyed array (a plain list).
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i as i64), v.into()))
                .collect(),
        )
    }

    /// Build a name-keyed array (an associative array).
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Array(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn object<I, V>(class: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, V)>,
        V: Into<Value>,
    {
        Self::Object {
            class: class.into(),
            fields: fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                // u64 above i64::MAX and all non-integers
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::list(items),
            serde_json::Value::Object(map) => Self::map(map),
        }
    }
}
