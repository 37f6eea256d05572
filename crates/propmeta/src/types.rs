use crate::value::Value;
use serde::Serialize;
use std::fmt;

///
/// PropertyType
///
/// Declared type of a property; the handle a descriptor carries in place of
/// a reflective class token. Lossy by design: it describes the value shape
/// an accessor produces, not the entity's native field type.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    Blob,
    Bool,
    Float64,
    Int,
    List(Box<Self>),
    Optional(Box<Self>),
    Text,
    Uint,
}

impl PropertyType {
    /// Whether a value conforms to this declared type.
    ///
    /// `Optional` admits `Null` or the inner shape; `List` requires every
    /// element to conform.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Blob, Value::Blob(_))
            | (Self::Bool, Value::Bool(_))
            | (Self::Float64, Value::Float64(_))
            | (Self::Int, Value::Int(_))
            | (Self::Text, Value::Text(_))
            | (Self::Uint, Value::Uint(_)) => true,
            (Self::List(inner), Value::List(items)) => items.iter().all(|v| inner.matches(v)),
            (Self::Optional(_), Value::Null) => true,
            (Self::Optional(inner), other) => inner.matches(other),
            _ => false,
        }
    }

    /// Convenience constructor for `List`.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// Convenience constructor for `Optional`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::Bool => write!(f, "bool"),
            Self::Float64 => write!(f, "float64"),
            Self::Int => write!(f, "int"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Optional(inner) => write!(f, "optional<{inner}>"),
            Self::Text => write!(f, "text"),
            Self::Uint => write!(f, "uint"),
        }
    }
}
