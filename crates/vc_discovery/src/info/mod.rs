//! Static type information and property descriptors.
//!
//! - [`Type`]: a `TypeId` together with the full type path.
//! - [`ReflectKind`]: one of `Scalar`, `Composite` and `Sequence`.
//! - [`TypeInfo`]: the declared shape of a type, including the item type of sequences.
//! - [`Typed`]: a trait for obtaining `TypeInfo`.
//! - [`PropertyInfo`]: one addressable property, with its read and write accessors.

// -----------------------------------------------------------------------------
// Modules

mod property_info;
mod type_info;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use property_info::{PropertyInfo, ReadFn, ReadMutFn, WriteFn};
pub use type_info::{ReflectKind, TypeInfo, Typed};
pub use type_path::Type;
