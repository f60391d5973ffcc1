use thiserror::Error;

use crate::info::Type;

// -----------------------------------------------------------------------------
// IntrospectionError

/// A failure to enumerate the properties of a value or type.
///
/// Traversal treats it as "no properties for this node" and continues.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntrospectionError {
    #[error("component type `{0}` is not registered")]
    UnregisteredType(Type),

    #[error("option `{option}` of `{ty}` names no registered property")]
    UnknownOption { ty: Type, option: &'static str },
}
