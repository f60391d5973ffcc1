use alloc::boxed::Box;

use thiserror::Error;

use crate::access::Path;
use crate::info::Type;
use crate::introspect::IntrospectionError;

// -----------------------------------------------------------------------------
// ResolveErrorKind

/// The reason a [`ResolveError`] was raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveErrorKind {
    #[error("`{ty}` has no property `{name}`")]
    PropertyNotFound { ty: Type, name: Box<str> },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a value of `{ty}` cannot be indexed")]
    NotASequence { ty: Type },

    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    #[error("property `{name}` has no value")]
    InvocationFailure { name: &'static str },

    #[error("property `{name}` cannot be written")]
    ReadOnly { name: &'static str },

    #[error("a value of `{found}` was rejected")]
    TypeMismatch { found: Type },

    #[error("the current object cannot be replaced")]
    CurrentObject,
}

// -----------------------------------------------------------------------------
// ResolveError

/// A failure to resolve, read or write an address.
///
/// `depth` is the position of the element that failed in `path`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot resolve `{path}` at element {depth}: {kind}")]
pub struct ResolveError {
    pub path: Path,
    pub depth: usize,
    pub kind: ResolveErrorKind,
}

impl ResolveError {
    #[inline]
    pub(crate) fn new(path: &Path, depth: usize, kind: ResolveErrorKind) -> Self {
        Self {
            path: path.clone(),
            depth,
            kind,
        }
    }

    // Errors of the terminal element.
    #[inline]
    pub(crate) fn at_last(path: &Path, kind: ResolveErrorKind) -> Self {
        Self::new(path, path.len().saturating_sub(1), kind)
    }
}
