use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{PropertyInfo, ReflectKind, Type, TypeInfo};
use crate::introspect::{Introspection, IntrospectionError};
use crate::registry::{Blacklist, NoBlacklist, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Introspector

/// Lists the inspectable properties of values and types.
///
/// The introspector reads [`TypeMeta`]s from a [`TypeRegistry`] and applies
/// an optional [`Blacklist`]. Only composite values have properties;
/// scalars and sequences introspect to an empty result.
///
/// There are two modes:
///
/// - **Value mode** ([`introspect`](Self::introspect)): an option-driven
///   value exposes exactly its readable options, in option order. Other
///   values fall back to type mode.
/// - **Type mode** ([`introspect_type`](Self::introspect_type)): every
///   property that is both readable and writable, in registration order.
///
/// With `use_blacklist` set, blacklisted types expose nothing and
/// blacklisted properties are left out. Otherwise the blacklist is ignored.
///
/// # Example
///
/// ```
/// use vc_discovery::{field_property, impl_reflect_component};
/// use vc_discovery::introspect::Introspector;
/// use vc_discovery::registry::{TypeMeta, TypeRegistry};
///
/// #[derive(Clone, Debug)]
/// struct Crop { width: u32, height: u32, area: u64 }
///
/// impl_reflect_component!(Crop);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(
///     TypeMeta::of::<Crop>()
///         .with_property(field_property!(Crop, width: u32))
///         .with_property(field_property!(Crop, height: u32))
///         .with_property(field_property!(Crop, area: u64, read_only)),
/// );
///
/// let crop = Crop { width: 4, height: 3, area: 12 };
/// let result = Introspector::new(&registry).introspect(&crop, true).unwrap();
///
/// let names: Vec<_> = result.iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["width", "height"]);
/// ```
#[derive(Clone, Copy)]
pub struct Introspector<'a> {
    registry: &'a TypeRegistry,
    blacklist: &'a dyn Blacklist,
}

impl<'a> Introspector<'a> {
    /// Creates an introspector without a blacklist.
    #[inline]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            blacklist: &NoBlacklist,
        }
    }

    /// Sets the [`Blacklist`] used when introspecting with `use_blacklist`.
    #[inline]
    pub fn with_blacklist(mut self, blacklist: &'a dyn Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Returns the underlying [`TypeRegistry`].
    #[inline(always)]
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Lists the properties of a live value.
    pub fn introspect(
        &self,
        value: &dyn Reflect,
        use_blacklist: bool,
    ) -> Result<Introspection, IntrospectionError> {
        let ty = value.ty();
        if value.reflect_kind() != ReflectKind::Composite {
            return Ok(Introspection::empty(ty));
        }

        let meta = self.type_meta(ty)?;
        if use_blacklist && self.blacklist.is_blacklisted_type(ty) {
            return Ok(Introspection::empty(ty));
        }

        let Some(options) = meta.options() else {
            return Ok(self.type_properties(meta, use_blacklist));
        };

        let mut properties = Vec::with_capacity(options.len());
        for &option in options {
            let Some(property) = meta.property(option) else {
                return Err(IntrospectionError::UnknownOption { ty, option });
            };
            if property.is_readable() && !self.is_excluded(property, use_blacklist) {
                properties.push(*property);
            }
        }
        Ok(Introspection::new(ty, true, properties))
    }

    /// Lists the properties of a type without a live value.
    pub fn introspect_type(
        &self,
        info: TypeInfo,
        use_blacklist: bool,
    ) -> Result<Introspection, IntrospectionError> {
        let ty = info.ty();
        if info.kind() != ReflectKind::Composite {
            return Ok(Introspection::empty(ty));
        }

        let meta = self.type_meta(ty)?;
        if use_blacklist && self.blacklist.is_blacklisted_type(ty) {
            return Ok(Introspection::empty(ty));
        }
        Ok(self.type_properties(meta, use_blacklist))
    }

    /// Looks up a property by name on the full property list of the value's
    /// type, ignoring options and the blacklist.
    ///
    /// Scalars and sequences have no properties.
    pub fn property(
        &self,
        value: &dyn Reflect,
        name: &str,
    ) -> Result<Option<PropertyInfo>, IntrospectionError> {
        if value.reflect_kind() != ReflectKind::Composite {
            return Ok(None);
        }
        Ok(self.type_meta(value.ty())?.property(name).copied())
    }

    fn type_meta(&self, ty: Type) -> Result<&'a TypeMeta, IntrospectionError> {
        self.registry
            .get(ty.id())
            .ok_or(IntrospectionError::UnregisteredType(ty))
    }

    fn type_properties(&self, meta: &TypeMeta, use_blacklist: bool) -> Introspection {
        let properties = meta
            .properties()
            .iter()
            .filter(|p| p.is_readable() && p.is_writable())
            .filter(|p| !self.is_excluded(p, use_blacklist))
            .copied()
            .collect();
        Introspection::new(meta.ty(), false, properties)
    }

    #[inline]
    fn is_excluded(&self, property: &PropertyInfo, use_blacklist: bool) -> bool {
        use_blacklist
            && self.blacklist.is_blacklisted(
                property.declaring(),
                property.name(),
                property.base().ty(),
                property.is_multiple(),
            )
    }
}

impl core::fmt::Debug for Introspector<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Introspector")
            .field("registry", &self.registry.len())
            .finish_non_exhaustive()
    }
}
