//! Runtime values produced by macro expansion.

use std::fmt;

use crate::macros::Macro;

/// The result of executing a macro chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(i64),
    /// Ordered strings; rendered as `a, b, c`.
    Sequence(Vec<String>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Number(_) => "number",
            Value::Sequence(_) => "list",
        }
    }

    /// Flattens into strings: a sequence yields its items, anything else itself.
    pub fn into_items(self) -> Vec<String> {
        match self {
            Value::Sequence(items) => items,
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(n) => write!(f, "{n}"),
            Value::Sequence(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Sequence(items)
    }
}

/// What a name resolves to inside a scope.
#[derive(Debug, Clone)]
pub enum Binding {
    Value(Value),
    Macro(Macro),
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Binding::Value(value)
    }
}

impl From<Macro> for Binding {
    fn from(mac: Macro) -> Self {
        Binding::Macro(mac)
    }
}
