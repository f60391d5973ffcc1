use core::any::TypeId;

use vc_utils::TypeIdMap;
use vc_utils::hash::HashMap;

use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The central store of component [`TypeMeta`]s, keyed by concrete type.
///
/// A registry is an explicit value: build it once at startup and pass it by
/// reference to the [`Introspector`](crate::introspect::Introspector) and
/// everything built on top of it. Scalars and sequences need no entry.
///
/// # Example
///
/// ```
/// use vc_discovery::impl_reflect_component;
/// use vc_discovery::registry::{TypeMeta, TypeRegistry};
///
/// #[derive(Clone, Debug)]
/// struct Source;
///
/// impl_reflect_component!(Source);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(TypeMeta::of::<Source>());
///
/// let path = core::any::type_name::<Source>();
/// assert!(registry.get_with_type_path(path).is_some());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` and its dependencies unless `T` is already present.
    ///
    /// Returns `true` if `T` was newly registered. To replace an existing
    /// entry use [`insert_type_meta`](Self::insert_type_meta).
    pub fn register<T: GetTypeMeta>(&mut self) -> bool {
        let inserted = self.try_insert_type_meta_with(TypeId::of::<T>(), T::get_type_meta);
        if inserted {
            T::register_dependencies(self);
        }
        inserted
    }

    /// Inserts `type_meta` unless its type is already present.
    ///
    /// Returns `true` if the value was inserted.
    #[inline]
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.try_insert_type_meta_with(type_meta.ty().id(), || type_meta)
    }

    fn try_insert_type_meta_with(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            self.type_path_to_id.insert(meta.ty().path(), type_id);
            meta
        })
    }

    /// Inserts or **overwrites** the entry of the type of `type_meta`.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        let ty = type_meta.ty();
        self.type_path_to_id.insert(ty.path(), ty.id());
        self.type_meta_table.insert(ty.id(), type_meta);
    }

    /// Returns `true` if the type with the given [`TypeId`] is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns `true` if `T` is registered.
    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.type_meta_table.contains_type::<T>()
    }

    /// Returns the [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of `T`.
    #[inline]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&TypeMeta> {
        self.type_meta_table.get_type::<T>()
    }

    /// Returns the [`TypeMeta`] of the type with the given full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}
