/// Implements [`Reflect`] and [`Typed`] for a component type.
///
/// Components are [`Composite`] values: their properties are not derived
/// from the type itself but registered in a [`TypeRegistry`].
///
/// The type must be `Clone + Debug + Send + Sync + 'static`. Generic types
/// are accepted if they name concrete arguments, e.g. `Wrapper<u32>`.
///
/// # Examples
///
/// ```
/// use vc_discovery::{Reflect, impl_reflect_component, info::ReflectKind};
///
/// #[derive(Clone, Debug)]
/// struct Valve { open: bool }
///
/// impl_reflect_component!(Valve);
///
/// let valve = Valve { open: true };
/// assert_eq!(valve.reflect_kind(), ReflectKind::Composite);
/// ```
///
/// [`Reflect`]: crate::Reflect
/// [`Typed`]: crate::info::Typed
/// [`Composite`]: crate::info::ReflectKind::Composite
/// [`TypeRegistry`]: crate::registry::TypeRegistry
#[macro_export]
macro_rules! impl_reflect_component {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Reflect for $ty {
            $crate::__impl_reflect_cast_fn!();

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Composite(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Composite(self)
            }

            #[inline]
            fn reflect_clone(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
                $crate::__macro_exports::Box::new(::core::clone::Clone::clone(self))
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::info::Typed for $ty {
            #[inline]
            fn type_info() -> $crate::info::TypeInfo {
                $crate::info::TypeInfo::composite::<Self>()
            }
        }
    )+};
}
