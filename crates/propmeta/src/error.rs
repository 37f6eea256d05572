use thiserror::Error as ThisError;

///
/// AccessError
///
/// Errors surfaced by accessor invocation. Accessor absence is a valid
/// descriptor state, so it is reported as a value here rather than treated
/// as a fault.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("property `{property}` has no read accessor")]
    NotReadable { property: &'static str },

    #[error("property `{property}` has no write accessor")]
    NotWritable { property: &'static str },

    #[error("cannot convert {found} value into {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
