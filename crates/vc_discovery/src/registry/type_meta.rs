use alloc::vec::Vec;

use crate::info::{PropertyInfo, Type, TypeInfo, Typed};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// TypeMeta

/// The addressable surface of one component type.
///
/// A `TypeMeta` holds the ordered property list of the type and, for
/// *option-driven* components, the ordered list of option names. An
/// option-driven component hides every property that is not one of its
/// options from introspection, while the resolver still reaches the full
/// property list.
///
/// # Example
///
/// ```
/// use vc_discovery::{field_property, impl_reflect_component};
/// use vc_discovery::registry::TypeMeta;
///
/// #[derive(Clone, Debug)]
/// struct Threshold { level: u8, scratch: u32 }
///
/// impl_reflect_component!(Threshold);
///
/// let meta = TypeMeta::of::<Threshold>()
///     .with_property(field_property!(Threshold, level: u8))
///     .with_property(field_property!(Threshold, scratch: u32))
///     .with_options(&["level"]);
///
/// assert_eq!(meta.properties().len(), 2);
/// assert_eq!(meta.options(), Some(&["level"][..]));
/// assert!(meta.property("scratch").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct TypeMeta {
    type_info: TypeInfo,
    properties: Vec<PropertyInfo>,
    options: Option<Vec<&'static str>>,
}

impl TypeMeta {
    /// Creates an empty [`TypeMeta`] for `T`.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info(),
            properties: Vec::new(),
            options: None,
        }
    }

    /// Adds a property, see [`insert_property`](Self::insert_property).
    #[inline]
    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.insert_property(property);
        self
    }

    /// Makes the type option-driven with the given ordered options.
    pub fn with_options(mut self, options: &[&'static str]) -> Self {
        self.options = Some(options.to_vec());
        self
    }

    /// Adds a property at the end of the list.
    ///
    /// A property with the same name is replaced in place.
    pub fn insert_property(&mut self, property: PropertyInfo) {
        match self
            .properties
            .iter_mut()
            .find(|p| p.name() == property.name())
        {
            Some(slot) => *slot = property,
            None => self.properties.push(property),
        }
    }

    /// Returns the [`TypeInfo`].
    #[inline(always)]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.type_info.ty()
    }

    /// Returns all properties in registration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns the option names of an option-driven type.
    #[inline]
    pub fn options(&self) -> Option<&[&'static str]> {
        self.options.as_deref()
    }

    /// Returns `true` if the type declares an explicit option list.
    #[inline]
    pub fn is_option_driven(&self) -> bool {
        self.options.is_some()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A component type that can describe its own [`TypeMeta`].
///
/// This is what [`TypeRegistry::register`] uses.
///
/// # Example
///
/// ```
/// use vc_discovery::{field_property, impl_reflect_component};
/// use vc_discovery::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
///
/// #[derive(Clone, Debug)]
/// struct Blur { radius: f32 }
///
/// impl_reflect_component!(Blur);
///
/// impl GetTypeMeta for Blur {
///     fn get_type_meta() -> TypeMeta {
///         TypeMeta::of::<Self>().with_property(field_property!(Blur, radius: f32))
///     }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Blur>();
/// assert!(registry.contains_type::<Blur>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide its properties",
    note = "consider implementing `GetTypeMeta` for `{Self}`"
)]
pub trait GetTypeMeta: Typed {
    /// Returns the [`TypeMeta`] of this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers component types reachable from this type.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
