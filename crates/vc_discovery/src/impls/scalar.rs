use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

macro_rules! impl_reflect_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            $crate::__impl_reflect_cast_fn!();

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(Clone::clone(self))
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl Typed for $ty {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::scalar::<Self>()
            }
        }
    )*};
}

impl_reflect_scalar!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
);
