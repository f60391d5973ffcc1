use alloc::boxed::Box;

use vc_utils::hash::{HashMap, HashSet};

use crate::info::Type;

// -----------------------------------------------------------------------------
// Blacklist

/// Excludes types and properties from introspection.
///
/// The predicate is only consulted when introspection runs with the
/// blacklist enabled. Closures taking
/// `(declaring, property, base, multiple)` implement this trait.
///
/// # Example
///
/// ```
/// use vc_discovery::info::Type;
/// use vc_discovery::registry::Blacklist;
///
/// let no_lists = |_: Type, _: &str, _: Type, multiple: bool| multiple;
/// assert!(no_lists.is_blacklisted(Type::of::<()>(), "items", Type::of::<u8>(), true));
/// assert!(!no_lists.is_blacklisted_type(Type::of::<()>()));
/// ```
pub trait Blacklist {
    /// Returns `true` if the property `property` declared by `declaring` is
    /// excluded.
    ///
    /// `base` is the value type, or the item type if `multiple` is set.
    fn is_blacklisted(&self, declaring: Type, property: &str, base: Type, multiple: bool) -> bool;

    /// Returns `true` if values of type `ty` expose no properties at all.
    #[inline]
    fn is_blacklisted_type(&self, _ty: Type) -> bool {
        false
    }
}

impl<F> Blacklist for F
where
    F: Fn(Type, &str, Type, bool) -> bool,
{
    #[inline]
    fn is_blacklisted(&self, declaring: Type, property: &str, base: Type, multiple: bool) -> bool {
        self(declaring, property, base, multiple)
    }
}

// -----------------------------------------------------------------------------
// NoBlacklist

/// A [`Blacklist`] that excludes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoBlacklist;

impl Blacklist for NoBlacklist {
    #[inline(always)]
    fn is_blacklisted(&self, _: Type, _: &str, _: Type, _: bool) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// BlacklistRules

/// A configurable [`Blacklist`].
///
/// - [`exclude_type`](Self::exclude_type): values of the type expose no
///   properties, and properties holding it are skipped.
/// - [`exclude_base_type`](Self::exclude_base_type): properties whose base
///   type is the given one are skipped.
/// - [`exclude_property`](Self::exclude_property): one named property of
///   one declaring type is skipped.
/// - [`exclude_multiple`](Self::exclude_multiple): all multi-valued
///   properties are skipped.
///
/// # Example
///
/// ```
/// use vc_discovery::info::Type;
/// use vc_discovery::registry::{Blacklist, BlacklistRules};
///
/// struct Canvas;
///
/// let rules = BlacklistRules::new()
///     .exclude_base_type::<f32>()
///     .exclude_property::<Canvas>("preview");
///
/// let canvas = Type::of::<Canvas>();
/// assert!(rules.is_blacklisted(canvas, "preview", Type::of::<u8>(), false));
/// assert!(rules.is_blacklisted(canvas, "weights", Type::of::<f32>(), true));
/// assert!(!rules.is_blacklisted(canvas, "width", Type::of::<u32>(), false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct BlacklistRules {
    types: HashSet<Type>,
    base_types: HashSet<Type>,
    properties: HashMap<Type, HashSet<Box<str>>>,
    multiple: bool,
}

impl BlacklistRules {
    /// Creates rules that exclude nothing.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes the type `T` entirely.
    pub fn exclude_type<T: ?Sized + 'static>(mut self) -> Self {
        self.types.insert(Type::of::<T>());
        self
    }

    /// Excludes properties whose base type is `T`.
    pub fn exclude_base_type<T: ?Sized + 'static>(mut self) -> Self {
        self.base_types.insert(Type::of::<T>());
        self
    }

    /// Excludes the property `name` declared by `T`.
    pub fn exclude_property<T: ?Sized + 'static>(mut self, name: &str) -> Self {
        self.properties
            .entry(Type::of::<T>())
            .or_default()
            .insert(Box::from(name));
        self
    }

    /// Excludes or keeps all multi-valued properties.
    pub fn exclude_multiple(mut self, exclude: bool) -> Self {
        self.multiple = exclude;
        self
    }
}

impl Blacklist for BlacklistRules {
    fn is_blacklisted(&self, declaring: Type, property: &str, base: Type, multiple: bool) -> bool {
        (self.multiple && multiple)
            || self.types.contains(&base)
            || self.base_types.contains(&base)
            || self
                .properties
                .get(&declaring)
                .is_some_and(|names| names.contains(property))
    }

    #[inline]
    fn is_blacklisted_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }
}

#[cfg(test)]
mod tests {
    use super::{Blacklist, BlacklistRules, NoBlacklist};
    use crate::info::Type;

    struct Owner;

    #[test]
    fn rules_cover_each_exclusion() {
        let owner = Type::of::<Owner>();
        let rules = BlacklistRules::new()
            .exclude_type::<Owner>()
            .exclude_multiple(true);

        assert!(rules.is_blacklisted_type(owner));
        assert!(rules.is_blacklisted(Type::of::<u8>(), "parent", owner, false));
        assert!(rules.is_blacklisted(owner, "items", Type::of::<u8>(), true));
        assert!(!rules.is_blacklisted(owner, "items", Type::of::<u8>(), false));
    }

    #[test]
    fn property_rules_are_per_declaring_type() {
        let rules = BlacklistRules::new().exclude_property::<Owner>("hidden");
        let u8_ty = Type::of::<u8>();
        assert!(rules.is_blacklisted(Type::of::<Owner>(), "hidden", u8_ty, false));
        assert!(!rules.is_blacklisted(u8_ty, "hidden", u8_ty, false));
    }

    #[test]
    fn no_blacklist_excludes_nothing() {
        let ty = Type::of::<Owner>();
        assert!(!NoBlacklist.is_blacklisted(ty, "any", ty, true));
        assert!(!NoBlacklist.is_blacklisted_type(ty));
    }
}
