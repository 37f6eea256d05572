use std::any::{Any, TypeId};

///
/// Annotation
///
/// A piece of declarative metadata attached to a read accessor at
/// registration time. The annotation's Rust type is its kind: lookup is
/// keyed by concrete type, mirroring class-keyed annotation introspection.
///

pub trait Annotation: std::fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

///
/// AnnotationSet
///
/// At most one annotation per kind; inserting a kind that is already
/// present replaces the earlier instance.
///

#[derive(Debug, Default)]
pub struct AnnotationSet {
    entries: Vec<Box<dyn Annotation>>,
}

impl AnnotationSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert<A: Annotation>(&mut self, annotation: A) {
        self.entries
            .retain(|e| e.as_any().type_id() != TypeId::of::<A>());
        self.entries.push(Box::new(annotation));
    }

    /// The annotation of kind `A`, if present.
    #[must_use]
    pub fn get<A: Annotation>(&self) -> Option<&A> {
        self.entries
            .iter()
            .find_map(|e| e.as_any().downcast_ref::<A>())
    }

    #[must_use]
    pub fn contains<A: Annotation>(&self) -> bool {
        self.get::<A>().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Annotation> {
        self.entries.iter().map(Box::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
