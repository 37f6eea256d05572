//! Property metadata for persistent entity classes: immutable descriptors
//! pairing a property name and declared type with registered accessor
//! capabilities and their annotations.
//!
//! There is no runtime reflection here. Accessors are callables registered
//! once per property, and annotations are a per-accessor table queried by
//! the annotation's Rust type. Descriptors are built by an external
//! registration pass, never mutated, and safe to share across threads.
#![warn(unreachable_pub)]

pub mod accessor;
pub mod annotation;
pub mod error;
pub mod property;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or conversion traits are re-exported here.
///

pub mod prelude {
    pub use crate::{
        accessor::{ReadAccessor, WriteAccessor},
        annotation::{Annotation, AnnotationSet},
        property::PropertyDescriptor,
        types::PropertyType,
        value::Value,
    };
}
