use crate::{
    annotation::{Annotation, AnnotationSet},
    error::AccessError,
    value::{FromValue, IntoValue, Value},
};
use std::{any, fmt};

///
/// ReadAccessor
///
/// Opaque capability that reads one property off an entity of type `T`,
/// carrying the annotations declared on the underlying accessor. The
/// callable is registered once and never swapped out afterwards.
///

pub struct ReadAccessor<T> {
    invoke: Box<dyn Fn(&T) -> Value + Send + Sync>,
    annotations: AnnotationSet,
}

impl<T: 'static> ReadAccessor<T> {
    /// Wrap a plain getter. The native return type is lifted into `Value`
    /// on every read.
    pub fn new<V>(get: fn(&T) -> V) -> Self
    where
        V: IntoValue + 'static,
    {
        Self::from_fn(move |target| get(target).into_value())
    }

    /// Wrap an arbitrary closure producing a `Value` directly. Used for
    /// computed properties that have no single backing field.
    pub fn from_fn(f: impl Fn(&T) -> Value + Send + Sync + 'static) -> Self {
        Self {
            invoke: Box::new(f),
            annotations: AnnotationSet::new(),
        }
    }

    /// Attach an annotation, replacing any earlier one of the same kind.
    #[must_use]
    pub fn annotate<A: Annotation>(mut self, annotation: A) -> Self {
        self.annotations.insert(annotation);
        self
    }

    pub fn read(&self, target: &T) -> Value {
        (self.invoke)(target)
    }

    #[must_use]
    pub const fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }
}

impl<T> fmt::Debug for ReadAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadAccessor")
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

///
/// WriteAccessor
///
/// Opaque capability that writes one property on an entity of type `T`.
/// Typed registration rejects values of the wrong shape with a
/// `TypeMismatch` instead of invoking the setter.
///

pub struct WriteAccessor<T> {
    invoke: Box<dyn Fn(&mut T, Value) -> Result<(), AccessError> + Send + Sync>,
}

impl<T: 'static> WriteAccessor<T> {
    /// Wrap a plain setter. The incoming `Value` is lowered to the setter's
    /// native type, failing the write on a shape mismatch.
    pub fn new<V>(set: fn(&mut T, V)) -> Self
    where
        V: FromValue + 'static,
    {
        Self::from_fn(move |target, value| match V::from_value(&value) {
            Some(v) => {
                set(target, v);
                Ok(())
            }
            None => Err(AccessError::TypeMismatch {
                expected: any::type_name::<V>(),
                found: value.tag(),
            }),
        })
    }

    /// Wrap an arbitrary fallible closure taking a `Value` directly.
    pub fn from_fn(
        f: impl Fn(&mut T, Value) -> Result<(), AccessError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            invoke: Box::new(f),
        }
    }

    pub fn write(&self, target: &mut T, value: Value) -> Result<(), AccessError> {
        (self.invoke)(target, value)
    }
}

impl<T> fmt::Debug for WriteAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteAccessor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    struct Person {
        age: i64,
        nickname: Option<String>,
    }

    impl Person {
        fn age(&self) -> i64 {
            self.age
        }

        fn set_age(&mut self, age: i64) {
            self.age = age;
        }
    }

    #[derive(Debug)]
    struct Column;

    impl Annotation for Column {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn typed_read_lifts_the_native_value() {
        let getter = ReadAccessor::new(Person::age);
        let person = Person {
            age: 30,
            nickname: None,
        };

        assert_eq!(getter.read(&person), Value::Int(30));
    }

    #[test]
    fn optional_fields_read_as_null_when_absent() {
        let getter = ReadAccessor::new(|p: &Person| p.nickname.clone());
        let person = Person {
            age: 30,
            nickname: None,
        };

        assert_eq!(getter.read(&person), Value::Null);
    }

    #[test]
    fn typed_write_lowers_the_value() {
        let setter = WriteAccessor::new(Person::set_age);
        let mut person = Person {
            age: 30,
            nickname: None,
        };

        setter.write(&mut person, Value::Int(31)).unwrap();
        assert_eq!(person.age, 31);
    }

    #[test]
    fn mismatched_write_fails_and_leaves_the_target_untouched() {
        let setter = WriteAccessor::new(Person::set_age);
        let mut person = Person {
            age: 30,
            nickname: None,
        };

        let err = setter
            .write(&mut person, Value::Text("old".to_string()))
            .unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { found: "text", .. }));
        assert_eq!(person.age, 30);
    }

    #[test]
    fn annotations_accumulate_on_the_read_side() {
        let getter = ReadAccessor::new(Person::age).annotate(Column);
        assert!(getter.annotations().contains::<Column>());
        assert_eq!(getter.annotations().len(), 1);
    }
}
