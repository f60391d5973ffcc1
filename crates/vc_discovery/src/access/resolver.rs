use alloc::boxed::Box;

use crate::Reflect;
use crate::access::container::{array_index, read, read_mut};
use crate::access::{Accessor, Path, PathElement, PathElementKind};
use crate::access::{PropertyContainer, PropertyContainerMut};
use crate::access::{LIST_ACCESSOR, ResolveError, ResolveErrorKind};
use crate::info::ReflectKind;
use crate::introspect::Introspector;
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// Resolver

/// Resolves, reads and writes [`Path`]s on an object graph.
///
/// Resolution walks the address one element at a time:
///
/// 1. A `get(i)` element needs the current object to be a sequence.
///    Other elements look up their property on the full property list of
///    the current object's type; options and blacklists do not apply.
/// 2. At the last element the owner and accessor are returned as a
///    [`PropertyContainer`].
/// 3. Otherwise the property is read, indexed for `name[i]`, and the walk
///    continues on the child.
///
/// The `Result` methods report a [`ResolveError`]. [`get_value`],
/// [`get_value_as`] and [`set_value`] log the error at `debug` level and
/// return `None` or `false` instead.
///
/// # Examples
///
/// ```
/// use vc_discovery::{field_property, impl_reflect_component};
/// use vc_discovery::access::{Path, Resolver};
/// use vc_discovery::registry::{TypeMeta, TypeRegistry};
///
/// #[derive(Clone, Debug)]
/// struct Stage { weights: Vec<i32> }
///
/// impl_reflect_component!(Stage);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(
///     TypeMeta::of::<Stage>().with_property(field_property!(Stage, weights: Vec<i32>)),
/// );
/// let resolver = Resolver::new(&registry);
///
/// let mut stage = Stage { weights: vec![1, 2, 3] };
/// let path = Path::parse("weights[1]").unwrap();
///
/// assert!(resolver.set_value(&mut stage, &path, Box::new(42_i32)));
/// assert_eq!(resolver.get_value_as::<i32>(&stage, &path), Some(&42));
/// assert_eq!(stage.weights, [1, 42, 3]);
///
/// let outside = Path::parse("weights[3]").unwrap();
/// assert!(resolver.get_value(&stage, &outside).is_none());
/// ```
///
/// [`get_value`]: Resolver::get_value
/// [`get_value_as`]: Resolver::get_value_as
/// [`set_value`]: Resolver::set_value
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'r> {
    introspector: Introspector<'r>,
}

impl<'r> Resolver<'r> {
    /// Creates a resolver over the given registry.
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            introspector: Introspector::new(registry),
        }
    }

    /// Creates a resolver sharing an existing [`Introspector`].
    #[inline]
    pub const fn with_introspector(introspector: Introspector<'r>) -> Self {
        Self { introspector }
    }

    /// Resolves `path` to its owner and accessor.
    ///
    /// The current object address resolves to `root` itself.
    pub fn find<'a>(
        &self,
        root: &'a dyn Reflect,
        path: &Path,
    ) -> Result<PropertyContainer<'a>, ResolveError> {
        let Some((last, init)) = path.elements().split_last() else {
            return Ok(PropertyContainer::new(path.clone(), None, root));
        };

        let mut current = root;
        for (depth, element) in init.iter().enumerate() {
            let error = |kind| ResolveError::new(path, depth, kind);
            let accessor = self.locate(current, element).map_err(error)?;
            current = read(current, accessor, array_index(element)).map_err(error)?;
        }

        let accessor = self
            .locate(current, last)
            .map_err(|kind| ResolveError::new(path, init.len(), kind))?;
        Ok(PropertyContainer::new(path.clone(), Some(accessor), current))
    }

    /// Resolves `path` to its owner and accessor, mutably.
    pub fn find_mut<'a>(
        &self,
        root: &'a mut dyn Reflect,
        path: &Path,
    ) -> Result<PropertyContainerMut<'a>, ResolveError> {
        let Some((last, init)) = path.elements().split_last() else {
            return Ok(PropertyContainerMut::new(path.clone(), None, root));
        };

        let mut current = root;
        for (depth, element) in init.iter().enumerate() {
            let error = |kind| ResolveError::new(path, depth, kind);
            let accessor = self.locate(&*current, element).map_err(error)?;
            current = read_mut(current, accessor, array_index(element)).map_err(error)?;
        }

        let accessor = self
            .locate(&*current, last)
            .map_err(|kind| ResolveError::new(path, init.len(), kind))?;
        Ok(PropertyContainerMut::new(
            path.clone(),
            Some(accessor),
            current,
        ))
    }

    /// Reads the value at `path`.
    #[inline]
    pub fn value<'a>(&self, root: &'a dyn Reflect, path: &Path) -> Result<&'a dyn Reflect, ResolveError> {
        self.find(root, path)?.value()
    }

    /// Writes the value at `path` through the terminal accessor.
    ///
    /// See [`PropertyContainerMut::set`].
    #[inline]
    pub fn try_set_value(
        &self,
        root: &mut dyn Reflect,
        path: &Path,
        value: Box<dyn Reflect>,
    ) -> Result<(), ResolveError> {
        self.find_mut(root, path)?.set(value)
    }

    /// Reads the value at `path`, `None` on any failure.
    pub fn get_value<'a>(&self, root: &'a dyn Reflect, path: &Path) -> Option<&'a dyn Reflect> {
        match self.value(root, path) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }

    /// Reads the value at `path` as a `T`, `None` on any failure or if the
    /// value is not a `T`.
    #[inline]
    pub fn get_value_as<'a, T: Reflect>(&self, root: &'a dyn Reflect, path: &Path) -> Option<&'a T> {
        self.get_value(root, path)?.downcast_ref::<T>()
    }

    /// Writes the value at `path`, `false` on any failure.
    pub fn set_value(&self, root: &mut dyn Reflect, path: &Path, value: Box<dyn Reflect>) -> bool {
        match self.try_set_value(root, path, value) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("{err}");
                false
            }
        }
    }

    fn locate(
        &self,
        current: &dyn Reflect,
        element: &PathElement,
    ) -> Result<Accessor, ResolveErrorKind> {
        if let (PathElementKind::ListAccessor, Some(index)) = (element.kind(), element.index()) {
            return match current.reflect_kind() {
                ReflectKind::Sequence => Ok(Accessor::List(index)),
                _ => Err(ResolveErrorKind::PropertyNotFound {
                    ty: current.ty(),
                    name: Box::from(LIST_ACCESSOR),
                }),
            };
        }

        match self.introspector.property(current, element.name())? {
            Some(property) => Ok(Accessor::Property(property)),
            None => Err(ResolveErrorKind::PropertyNotFound {
                ty: current.ty(),
                name: Box::from(element.name()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use super::Resolver;
    use crate::Reflect;
    use crate::access::{Path, ResolveErrorKind};
    use crate::introspect::IntrospectionError;
    use crate::testing::{Actor, Branch, registry, root};

    fn path(text: &str) -> Path {
        Path::parse(text).unwrap()
    }

    #[test]
    fn nested_properties_resolve() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let root = root();

        let title = resolver.get_value_as::<String>(&root, &path("pipeline.title"));
        assert_eq!(title.map(String::as_str), Some("demo"));

        let container = resolver.find(&root, &path("pipeline.settings.levels")).unwrap();
        assert_eq!(container.property().unwrap().name(), "levels");
        assert!(container.object().is::<crate::testing::Settings>());
    }

    #[test]
    fn indexing_is_zero_based() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let root = root();

        let first = resolver.get_value_as::<i32>(&root, &path("pipeline.settings.levels[0]"));
        assert_eq!(first, Some(&1));

        let err = resolver
            .value(&root, &path("pipeline.settings.levels[3]"))
            .unwrap_err();
        assert_eq!(err.kind, ResolveErrorKind::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(err.depth, 2);
    }

    #[test]
    fn set_then_get_leaves_siblings() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();
        let target = path("pipeline.settings.levels[1]");

        assert!(resolver.set_value(&mut root, &target, Box::new(42_i32)));
        assert_eq!(resolver.get_value_as::<i32>(&root, &target), Some(&42));
        assert_eq!(root.pipeline.settings.levels, [1, 42, 3]);
        // the whole sequence went through the write accessor
        assert_eq!(root.pipeline.settings.changes, 1);
    }

    #[test]
    fn array_index_on_a_branch() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let branch = Branch {
            name: String::from("pair"),
            actors: vec![Actor::new("x", 0.0), Actor::new("y", 0.0)],
        };

        assert!(Path::parse("actors(1)").is_err());
        let y = resolver.get_value_as::<Actor>(&branch, &path("actors[1]"));
        assert_eq!(y.map(|actor| actor.name.as_str()), Some("y"));
    }

    #[test]
    fn list_accessor_on_sequences() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();

        let name = resolver.get_value_as::<String>(&root, &path("pipeline.actors.get(1).name"));
        assert_eq!(name.map(String::as_str), Some("blur"));

        let slot = path("pipeline.actors.get(1)");
        assert!(resolver.set_value(&mut root, &slot, Box::new(Actor::new("sharpen", 3.0))));
        let actor = resolver.get_value_as::<Actor>(&root, &slot).unwrap();
        assert_eq!(actor, &Actor::new("sharpen", 3.0));

        let err = resolver
            .value(&root, &path("pipeline.title.get(0)"))
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ResolveErrorKind::PropertyNotFound { ref name, .. } if &**name == "get"
        ));
    }

    #[test]
    fn resolution_failures() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();

        let err = resolver.find(&root, &path("pipeline.missing")).unwrap_err();
        assert!(matches!(err.kind, ResolveErrorKind::PropertyNotFound { .. }));
        assert_eq!(err.depth, 1);

        let err = resolver.value(&root, &path("pipeline.title[0]")).unwrap_err();
        assert!(matches!(err.kind, ResolveErrorKind::NotASequence { .. }));

        let err = resolver
            .try_set_value(&mut root, &path("pipeline.settings.changes"), Box::new(5_u32))
            .unwrap_err();
        assert_eq!(err.kind, ResolveErrorKind::ReadOnly { name: "changes" });

        let err = resolver
            .try_set_value(&mut root, &path("pipeline.title"), Box::new(5_i32))
            .unwrap_err();
        assert!(matches!(err.kind, ResolveErrorKind::TypeMismatch { found } if found.is::<i32>()));
        assert_eq!(root.pipeline.title, "demo");

        assert!(!resolver.set_value(&mut root, &path("pipeline.settings.levels[9]"), Box::new(1_i32)));
        assert_eq!(root.pipeline.settings.changes, 0);
    }

    #[test]
    fn unregistered_types_fail_introspection() {
        let registry = crate::registry::TypeRegistry::new();
        let resolver = Resolver::new(&registry);
        let root = root();

        let err = resolver.find(&root, &path("pipeline")).unwrap_err();
        assert!(matches!(
            err.kind,
            ResolveErrorKind::Introspection(IntrospectionError::UnregisteredType(_))
        ));
    }

    #[test]
    fn optional_properties() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();
        let backup = path("pipeline.settings.backup");

        let err = resolver.value(&root, &backup).unwrap_err();
        assert_eq!(err.kind, ResolveErrorKind::InvocationFailure { name: "backup" });

        assert!(resolver.set_value(&mut root, &backup, Box::new(Actor::new("spare", 1.0))));
        let name = resolver.get_value_as::<String>(&root, &path("pipeline.settings.backup.name"));
        assert_eq!(name.map(String::as_str), Some("spare"));
    }

    #[test]
    fn hidden_options_stay_addressable() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let root = root();

        let name = resolver.get_value_as::<String>(&root, &path("pipeline.actors[3].scratch.name"));
        assert_eq!(name.map(String::as_str), Some("scratch"));
    }

    #[test]
    fn current_object() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();
        let current = Path::current();

        let value = resolver.value(&root, &current).unwrap();
        assert!(value.is::<crate::testing::Root>());

        let err = resolver
            .try_set_value(&mut root, &current, Box::new(0_u8))
            .unwrap_err();
        assert_eq!(err.kind, ResolveErrorKind::CurrentObject);
    }

    #[test]
    fn value_mut_edits_in_place() {
        let registry = registry();
        let resolver = Resolver::new(&registry);
        let mut root = root();

        let mut container = resolver
            .find_mut(&mut root, &path("pipeline.actors[2].actors[0].gain"))
            .unwrap();
        *container.value_mut().unwrap().downcast_mut::<f64>().unwrap() = 4.0;

        let gain: &dyn Reflect = resolver
            .value(&root, &path("pipeline.actors[2].actors[0].gain"))
            .unwrap();
        assert_eq!(gain.downcast_ref::<f64>(), Some(&4.0));
    }
}
