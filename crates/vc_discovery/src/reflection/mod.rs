//! The [`Reflect`] trait, the capability every node of an addressable graph provides.

mod reflect;

pub use reflect::Reflect;

// -----------------------------------------------------------------------------
// Cast helpers

/// Implements the casting methods of [`Reflect`] for a sized type.
///
/// Used by the `impl_reflect_*` macros; not meant to be called directly.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_reflect_cast_fn {
    () => {
        #[inline]
        fn ty(&self) -> $crate::info::Type {
            $crate::info::Type::of::<Self>()
        }

        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(
            self: $crate::__macro_exports::Box<Self>,
        ) -> $crate::__macro_exports::Box<dyn ::core::any::Any> {
            self
        }

        #[inline]
        fn as_reflect(&self) -> &dyn $crate::Reflect {
            self
        }

        #[inline]
        fn as_reflect_mut(&mut self) -> &mut dyn $crate::Reflect {
            self
        }
    };
}
