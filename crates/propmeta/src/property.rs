use crate::{
    accessor::{ReadAccessor, WriteAccessor},
    annotation::{Annotation, AnnotationSet},
    error::AccessError,
    types::PropertyType,
    value::Value,
};
use std::fmt;

///
/// PropertyDescriptor
///
/// Immutable metadata for one property of an entity type `T`: its name,
/// declared type, and the accessor capabilities registered for it. Built
/// once by a registration pass and shared by reference afterwards; identity
/// is the descriptor's notion of equality.
///
/// A descriptor without a write accessor describes a read-only property.
/// A descriptor without any accessors is a declared-only variant used for
/// computed or provider-backed properties that expose metadata without a
/// plain getter/setter pair.
///

pub struct PropertyDescriptor<T> {
    name: &'static str,
    ty: PropertyType,
    getter: Option<ReadAccessor<T>>,
    setter: Option<WriteAccessor<T>>,
}

impl<T: 'static> PropertyDescriptor<T> {
    /// Create a descriptor with a read accessor and an optional write
    /// accessor.
    ///
    /// # Panics
    /// Panics if `name` is empty; an unnamed property is a registration
    /// bug, not a runtime condition.
    #[must_use]
    pub fn new(
        name: &'static str,
        ty: PropertyType,
        getter: ReadAccessor<T>,
        setter: Option<WriteAccessor<T>>,
    ) -> Self {
        assert!(!name.is_empty(), "property name must not be empty");

        Self {
            name,
            ty,
            getter: Some(getter),
            setter,
        }
    }

    /// Create a declared-only descriptor with no runtime accessors.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    #[must_use]
    pub fn declared(name: &'static str, ty: PropertyType) -> Self {
        assert!(!name.is_empty(), "property name must not be empty");

        Self {
            name,
            ty,
            getter: None,
            setter: None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn ty(&self) -> &PropertyType {
        &self.ty
    }

    /// Annotations declared on the read accessor.
    ///
    /// # Panics
    /// Panics if the descriptor has no read accessor; annotation queries
    /// assume one was registered.
    #[must_use]
    pub fn annotations(&self) -> &AnnotationSet {
        self.getter
            .as_ref()
            .expect("annotation query on a property with no read accessor")
            .annotations()
    }

    /// The annotation of kind `A` on the read accessor, if present.
    ///
    /// # Panics
    /// Panics if the descriptor has no read accessor.
    #[must_use]
    pub fn annotation<A: Annotation>(&self) -> Option<&A> {
        self.annotations().get::<A>()
    }

    /// A property is writable iff a write accessor was registered.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    #[must_use]
    pub const fn getter(&self) -> Option<&ReadAccessor<T>> {
        self.getter.as_ref()
    }

    #[must_use]
    pub const fn setter(&self) -> Option<&WriteAccessor<T>> {
        self.setter.as_ref()
    }

    /// Read the property off `target` through the registered accessor.
    pub fn read(&self, target: &T) -> Result<Value, AccessError> {
        match &self.getter {
            Some(getter) => Ok(getter.read(target)),
            None => Err(AccessError::NotReadable {
                property: self.name,
            }),
        }
    }

    /// Write `value` into `target` through the registered accessor.
    pub fn write(&self, target: &mut T, value: Value) -> Result<(), AccessError> {
        match &self.setter {
            Some(setter) => setter.write(target, value),
            None => Err(AccessError::NotWritable {
                property: self.name,
            }),
        }
    }
}

impl<T> fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.getter.is_some())
            .field("writable", &self.setter.is_some())
            .finish()
    }
}
