//! Kind-tagged views and the [`Sequence`] interface.
//!
//! - [`ReflectRef`] / [`ReflectMut`]: `Scalar | Composite | Sequence` views
//!   returned by [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`].
//! - [`Sequence`]: indexed element access, e.g. for `Vec<T>`.
//!
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use sequence::{Sequence, SequenceIter};
