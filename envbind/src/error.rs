use std::convert::Infallible;

use thiserror::Error;

/// Errors returned by [`bind`](crate::bind).
///
/// The walk stops at the first error. Keys registered before the failure stay
/// registered, nothing is rolled back.
///
/// `E` is the binder's own error type. A failure reported by the binder is
/// carried unchanged in [`BindError::Binder`], both its `Display` output and
/// its `source()` are forwarded as is.
#[derive(Debug, Error)]
pub enum BindError<E = Infallible> {
    /// The target (after following optional references) is not a record.
    #[error("invalid type: must be a record or a reference to a record")]
    InvalidType,
    /// No binder was supplied.
    #[error("nil binder")]
    NilBinder,
    /// A record nested deeper than the configured `max_depth` was reached.
    #[error("nesting below `{key}` exceeds the maximum depth of {max_depth}")]
    TooDeep { key: String, max_depth: usize },
    /// The binder rejected a key.
    #[error(transparent)]
    Binder(E),
}

impl<E> BindError<E> {
    /// Returns the binder's error if that is what stopped the walk.
    pub fn into_binder_error(self) -> Option<E> {
        match self {
            Self::Binder(error) => Some(error),
            _ => None,
        }
    }
}
