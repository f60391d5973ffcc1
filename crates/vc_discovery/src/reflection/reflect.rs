use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::info::{ReflectKind, Type};
use crate::ops::{ReflectMut, ReflectRef, Sequence};

// -----------------------------------------------------------------------------
// Reflect

/// The capability every value of an addressable graph provides.
///
/// A value is one of three [kinds](ReflectKind):
///
/// - **Scalar**: a terminal value such as `i32` or `String`. Traversal stops here.
/// - **Composite**: a component. Its properties are not found on the value
///   itself but in the [`TypeRegistry`], keyed by the concrete type.
/// - **Sequence**: an indexable run of values, see [`Sequence`].
///
/// Implementations are normally generated:
///
/// - scalars and `Vec<T>` are implemented by this crate;
/// - components use [`impl_reflect_component!`](crate::impl_reflect_component);
/// - `Box<dyn Reflect>` delegates to the boxed value, so heterogeneous
///   component lists are plain `Vec<Box<dyn Reflect>>`.
///
/// # Type Identification
///
/// Use [`Reflect::ty`] rather than [`Any::type_id`]: on a `Box<dyn Reflect>`
/// the latter reports the box, while `ty` reports the boxed value.
///
/// ```
/// use vc_discovery::Reflect;
///
/// let boxed: Box<dyn Reflect> = Box::new(5_u32);
/// assert!(boxed.ty().is::<u32>());
/// assert_eq!(boxed.downcast_ref::<u32>(), Some(&5));
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait Reflect: Any + Send + Sync {
    /// Returns the [`Type`] of the underlying value.
    fn ty(&self) -> Type;

    /// Casts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Casts to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Casts to `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Casts to `&dyn Reflect`.
    ///
    /// For `Box<dyn Reflect>` this is the boxed value.
    fn as_reflect(&self) -> &dyn Reflect;

    /// Casts to `&mut dyn Reflect`.
    ///
    /// For `Box<dyn Reflect>` this is the boxed value.
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;

    /// Returns the [`ReflectKind`] of the value.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Returns a kind-tagged shared view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a kind-tagged mutable view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Compares with another reflected value.
    ///
    /// Returns `None` if the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Formats the value for debugging.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty())
    }

    /// Converts a boxed value back into `Self`.
    ///
    /// Property writers use this to accept values. A value of another type
    /// is handed back unchanged.
    #[inline]
    fn from_boxed_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>>
    where
        Self: Sized,
    {
        value.take::<Self>()
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to `&T`.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts to `&mut T`.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Takes the underlying `T` out of the box.
    ///
    /// The box is handed back if it does not hold a `T`.
    pub fn take<T: Reflect>(self: Box<Self>) -> Result<T, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("the type was checked before downcasting"),
        }
    }

    /// Returns the value as a [`Sequence`], if it is one.
    #[inline]
    pub fn as_sequence(&self) -> Option<&dyn Sequence> {
        match self.reflect_ref() {
            ReflectRef::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the value as a mutable [`Sequence`], if it is one.
    #[inline]
    pub fn as_sequence_mut(&mut self) -> Option<&mut dyn Sequence> {
        match self.reflect_mut() {
            ReflectMut::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
