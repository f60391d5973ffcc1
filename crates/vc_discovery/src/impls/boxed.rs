use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

// Every call goes to the boxed value, so a `Box<dyn Reflect>` field or list
// item behaves exactly like the value it holds.
impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn ty(&self) -> Type {
        <dyn Reflect as Reflect>::ty(&**self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        <dyn Reflect as Reflect>::as_any(&**self)
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        <dyn Reflect as Reflect>::as_any_mut(&mut **self)
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        <dyn Reflect as Reflect>::into_any(*self)
    }

    #[inline]
    fn as_reflect(&self) -> &dyn Reflect {
        &**self
    }

    #[inline]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        &mut **self
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        <dyn Reflect as Reflect>::reflect_ref(&**self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        <dyn Reflect as Reflect>::reflect_mut(&mut **self)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        <dyn Reflect as Reflect>::reflect_clone(&**self)
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        <dyn Reflect as Reflect>::reflect_partial_eq(&**self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <dyn Reflect as Reflect>::reflect_debug(&**self, f)
    }

    #[inline]
    fn from_boxed_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        Ok(value)
    }
}

impl Typed for Box<dyn Reflect> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::composite::<Self>()
    }
}

impl Clone for Box<dyn Reflect> {
    #[inline]
    fn clone(&self) -> Self {
        self.reflect_clone()
    }
}
