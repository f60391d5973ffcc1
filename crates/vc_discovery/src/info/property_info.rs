use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::access::is_valid_name;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Accessor signatures

/// Reads a property from its owner.
///
/// `None` means the property currently holds no value, or the owner is not
/// of the declaring type.
pub type ReadFn = for<'a> fn(&'a dyn Reflect) -> Option<&'a dyn Reflect>;

/// Mutable counterpart of [`ReadFn`].
pub type ReadMutFn = for<'a> fn(&'a mut dyn Reflect) -> Option<&'a mut dyn Reflect>;

/// Writes a property of its owner.
///
/// A rejected value is handed back unchanged.
pub type WriteFn = fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

// -----------------------------------------------------------------------------
// PropertyInfo

/// Describes one addressable property of a component type.
///
/// Accessors are plain function pointers, so the descriptor is `Copy` and can
/// be handed out by value from the [`TypeRegistry`](crate::registry::TypeRegistry).
///
/// Use [`field_property!`](crate::field_property) for properties backed by a
/// struct field, or the `with_*` builders for computed ones.
///
/// # Examples
///
/// ```
/// use vc_discovery::{field_property, impl_reflect_component};
///
/// #[derive(Clone, Debug)]
/// struct Ridge { value: f64 }
///
/// impl_reflect_component!(Ridge);
///
/// let property = field_property!(Ridge, value: f64);
/// assert_eq!(property.name(), "value");
/// assert!(property.is_writable());
/// assert!(!property.is_multiple());
///
/// let ridge = Ridge { value: 0.5 };
/// let value = property.read(&ridge).unwrap();
/// assert_eq!(value.downcast_ref::<f64>(), Some(&0.5));
/// ```
#[derive(Clone, Copy)]
pub struct PropertyInfo {
    name: &'static str,
    declaring: Type,
    type_info: TypeInfo,
    read: Option<ReadFn>,
    read_mut: Option<ReadMutFn>,
    write: Option<WriteFn>,
}

impl PropertyInfo {
    /// Creates a property `name` of owner `O` holding values of type `V`.
    ///
    /// The property has no accessors yet.
    ///
    /// # Panics
    ///
    /// Panics if `name` cannot appear in an address, see
    /// [`is_valid_name`](crate::access::is_valid_name).
    #[inline]
    pub fn new<O: ?Sized + 'static, V: Typed>(name: &'static str) -> Self {
        assert!(
            is_valid_name(name),
            "`{name}` is not a valid property name"
        );
        Self {
            name,
            declaring: Type::of::<O>(),
            type_info: V::type_info(),
            read: None,
            read_mut: None,
            write: None,
        }
    }

    /// Sets the read accessor.
    #[inline]
    pub fn with_read(mut self, read: ReadFn) -> Self {
        self.read = Some(read);
        self
    }

    /// Sets the mutable read accessor.
    #[inline]
    pub fn with_read_mut(mut self, read_mut: ReadMutFn) -> Self {
        self.read_mut = Some(read_mut);
        self
    }

    /// Sets the write accessor.
    #[inline]
    pub fn with_write(mut self, write: WriteFn) -> Self {
        self.write = Some(write);
        self
    }

    /// Returns the property name.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type declaring this property.
    #[inline(always)]
    pub const fn declaring(&self) -> Type {
        self.declaring
    }

    /// Returns the declared value type.
    #[inline(always)]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Returns the value base type, the item type for multi-valued properties.
    #[inline]
    pub fn base(&self) -> TypeInfo {
        self.type_info.base()
    }

    /// Returns `true` if the property holds a sequence of values.
    #[inline]
    pub const fn is_multiple(&self) -> bool {
        self.type_info.is_multiple()
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.read.is_some()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.write.is_some()
    }

    /// Invokes the read accessor on `owner`.
    #[inline]
    pub fn read<'a>(&self, owner: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        self.read.and_then(|read| read(owner))
    }

    /// Invokes the mutable read accessor on `owner`.
    #[inline]
    pub fn read_mut<'a>(&self, owner: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        self.read_mut.and_then(move |read_mut| read_mut(owner))
    }

    /// Invokes the write accessor on `owner`.
    ///
    /// The value is handed back if there is no write accessor or it was rejected.
    pub fn write(
        &self,
        owner: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>> {
        match self.write {
            Some(write) => write(owner, value),
            None => Err(value),
        }
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("declaring", &self.declaring)
            .field("type_info", &self.type_info)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Field property macro

/// Builds a [`PropertyInfo`] backed by a named struct field.
///
/// - `field_property!(Owner, field: Type)`: read and write.
/// - `field_property!(Owner, field: Type, read_only)`: no write accessor.
/// - `field_property!(Owner, field: Type, optional)`: the field is an
///   `Option<Type>`; `None` reads as "no value" and writes store `Some`.
///
/// `Owner` must be a concrete type.
#[macro_export]
macro_rules! field_property {
    ($owner:ty, $field:ident : $value:ty) => {{
        fn write(
            owner: &mut dyn $crate::Reflect,
            value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
        ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
            let ::core::option::Option::Some(owner) = owner.downcast_mut::<$owner>() else {
                return ::core::result::Result::Err(value);
            };
            owner.$field = <$value as $crate::Reflect>::from_boxed_reflect(value)?;
            ::core::result::Result::Ok(())
        }

        $crate::field_property!($owner, $field: $value, read_only).with_write(write)
    }};
    ($owner:ty, $field:ident : $value:ty, read_only) => {{
        fn read(owner: &dyn $crate::Reflect) -> ::core::option::Option<&dyn $crate::Reflect> {
            owner
                .downcast_ref::<$owner>()
                .map(|owner| $crate::Reflect::as_reflect(&owner.$field))
        }

        fn read_mut(
            owner: &mut dyn $crate::Reflect,
        ) -> ::core::option::Option<&mut dyn $crate::Reflect> {
            owner
                .downcast_mut::<$owner>()
                .map(|owner| $crate::Reflect::as_reflect_mut(&mut owner.$field))
        }

        $crate::info::PropertyInfo::new::<$owner, $value>(::core::stringify!($field))
            .with_read(read)
            .with_read_mut(read_mut)
    }};
    ($owner:ty, $field:ident : $value:ty, optional) => {{
        fn read(owner: &dyn $crate::Reflect) -> ::core::option::Option<&dyn $crate::Reflect> {
            owner
                .downcast_ref::<$owner>()
                .and_then(|owner| owner.$field.as_ref())
                .map(|value| $crate::Reflect::as_reflect(value))
        }

        fn read_mut(
            owner: &mut dyn $crate::Reflect,
        ) -> ::core::option::Option<&mut dyn $crate::Reflect> {
            owner
                .downcast_mut::<$owner>()
                .and_then(|owner| owner.$field.as_mut())
                .map(|value| $crate::Reflect::as_reflect_mut(value))
        }

        fn write(
            owner: &mut dyn $crate::Reflect,
            value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
        ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
            let ::core::option::Option::Some(owner) = owner.downcast_mut::<$owner>() else {
                return ::core::result::Result::Err(value);
            };
            owner.$field = ::core::option::Option::Some(
                <$value as $crate::Reflect>::from_boxed_reflect(value)?,
            );
            ::core::result::Result::Ok(())
        }

        $crate::info::PropertyInfo::new::<$owner, $value>(::core::stringify!($field))
            .with_read(read)
            .with_read_mut(read_mut)
            .with_write(write)
    }};
}

#[cfg(test)]
mod tests {
    use super::PropertyInfo;

    #[test]
    #[should_panic]
    fn dotted_property_names_panic() {
        let _ = PropertyInfo::new::<u8, u8>("a.b");
    }

    #[test]
    fn accessors_are_optional() {
        let property = PropertyInfo::new::<u8, u8>("level");
        assert!(!property.is_readable() && !property.is_writable());
        assert!(property.read(&1_u8).is_none());
    }
}
