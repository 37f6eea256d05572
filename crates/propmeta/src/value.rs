use serde::Serialize;

///
/// Value
///
/// Dynamic value passed through accessor invocation; the crate's analogue
/// of a reflective `Object`.
///
/// Null → the property's value is `Option::None`.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float64(f64),
    Int(i64),
    /// Ordered list of values. List order is preserved.
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Short shape name, used in error messages.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Blob(_) => "blob",
            Self::Bool(_) => "bool",
            Self::Float64(_) => "float64",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Uint(_) => "uint",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

///
/// IntoValue
///
/// Conversion used when registering a typed read accessor: the accessor's
/// native return type is lifted into a `Value`.
///

pub trait IntoValue {
    fn into_value(self) -> Value;
}

///
/// FromValue
///
/// Conversion used when registering a typed write accessor. Returns `None`
/// when the value's shape does not match; the accessor reports that as a
/// type mismatch rather than panicking.
///

pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

macro_rules! impl_value_conversions {
    ( $( $native:ty => $variant:ident ( $extract:expr ) ),* $(,)? ) => {
        $(
            impl IntoValue for $native {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl FromValue for $native {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some($extract(v)),
                        _ => None,
                    }
                }
            }

            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_value_conversions! {
    Vec<u8> => Blob(Clone::clone),
    bool => Bool(|v: &bool| *v),
    f64 => Float64(|v: &f64| *v),
    i64 => Int(|v: &i64| *v),
    String => Text(Clone::clone),
    u64 => Uint(|v: &u64| *v),
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<V: IntoValue> IntoValue for Option<V> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<V: FromValue> FromValue for Option<V> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => V::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_conversions_preserve_the_native_value() {
        assert_eq!(42_i64.into_value(), Value::Int(42));
        assert_eq!("age".into_value(), Value::Text("age".to_string()));
        assert_eq!(i64::from_value(&Value::Int(42)), Some(42));
        assert_eq!(i64::from_value(&Value::Uint(42)), None);
    }

    #[test]
    fn option_maps_absence_onto_null() {
        assert_eq!(None::<i64>.into_value(), Value::Null);
        assert_eq!(Some(7_i64).into_value(), Value::Int(7));
        assert_eq!(Option::<i64>::from_value(&Value::Null), Some(None));
        assert_eq!(Option::<i64>::from_value(&Value::Int(7)), Some(Some(7)));
        assert_eq!(Option::<i64>::from_value(&Value::Bool(true)), None);
    }

    #[test]
    fn from_slice_builds_a_list() {
        let v = Value::from_slice(&[1_i64, 2, 3]);
        assert_eq!(
            v,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn tags_name_the_shape() {
        assert_eq!(Value::Bool(true).tag(), "bool");
        assert_eq!(Value::Null.tag(), "null");
        assert_eq!(Value::from_slice(&[1_i64]).tag(), "list");
    }

    #[test]
    fn values_serialize_as_tagged_json() {
        let json = serde_json::to_value(Value::Int(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "Int": 3 }));
    }
}
