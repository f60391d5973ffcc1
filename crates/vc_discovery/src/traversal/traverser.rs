use alloc::boxed::Box;

use crate::Reflect;
use crate::access::{Path, PathElement};
use crate::info::PropertyInfo;
use crate::introspect::{IntrospectionCache, Introspector};
use crate::registry::{Blacklist, TypeRegistry};
use crate::traversal::{Observer, Primitivity, ScalarPrimitives};

// -----------------------------------------------------------------------------
// Traverser

/// Depth-first, single-pass enumeration of an object graph.
///
/// The root is visited first under the current object address `.`. Then,
/// for every object, each non-[primitive](Primitivity) property returned
/// by introspection is read:
///
/// - a value without content (e.g. an empty optional) is skipped;
/// - a sequence visits each element as `name[i]`, index-ascending, and
///   descends into it before moving on;
/// - anything else is visited as `name` and descended into.
///
/// Introspection results are cached per runtime type for one call.
/// A node whose introspection fails is logged and treated as having no
/// properties; traversal of its siblings continues.
///
/// The graph must be a tree. A reference cycle, possible only through
/// custom accessors, does not terminate.
///
/// # Examples
///
/// ```
/// use vc_discovery::{Reflect, field_property, impl_reflect_component};
/// use vc_discovery::access::Path;
/// use vc_discovery::info::PropertyInfo;
/// use vc_discovery::registry::{TypeMeta, TypeRegistry};
/// use vc_discovery::traversal::Traverser;
///
/// #[derive(Clone, Debug)]
/// struct Node { label: String, children: Vec<Node> }
///
/// impl_reflect_component!(Node);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(
///     TypeMeta::of::<Node>()
///         .with_property(field_property!(Node, label: String))
///         .with_property(field_property!(Node, children: Vec<Node>)),
/// );
///
/// let leaf = Node { label: "leaf".into(), children: vec![] };
/// let tree = Node { label: "top".into(), children: vec![leaf.clone(), leaf] };
///
/// let mut visited = Vec::new();
/// Traverser::new(&registry).traverse(
///     &mut |path: &Path, _: Option<&PropertyInfo>, _: Option<&dyn Reflect>, _: &dyn Reflect| {
///         visited.push(path.to_string());
///     },
///     &tree,
/// );
/// assert_eq!(visited, [".", "children[0]", "children[1]"]);
/// ```
pub struct Traverser<'r> {
    introspector: Introspector<'r>,
    primitivity: Box<dyn Primitivity + 'r>,
    use_blacklist: bool,
}

impl<'r> Traverser<'r> {
    /// Creates a traverser with [`ScalarPrimitives`] and the blacklist
    /// enabled but empty.
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_introspector(Introspector::new(registry))
    }

    /// Creates a traverser sharing an existing [`Introspector`].
    #[inline]
    pub fn with_introspector(introspector: Introspector<'r>) -> Self {
        Self {
            introspector,
            primitivity: Box::new(ScalarPrimitives),
            use_blacklist: true,
        }
    }

    /// Sets the [`Blacklist`] used during introspection.
    #[inline]
    pub fn with_blacklist(mut self, blacklist: &'r dyn Blacklist) -> Self {
        self.introspector = self.introspector.with_blacklist(blacklist);
        self
    }

    /// Sets the [`Primitivity`] predicate.
    #[inline]
    pub fn with_primitivity(mut self, primitivity: impl Primitivity + 'r) -> Self {
        self.primitivity = Box::new(primitivity);
        self
    }

    /// Enables or disables the blacklist; enabled by default.
    #[inline]
    pub fn use_blacklist(mut self, enabled: bool) -> Self {
        self.use_blacklist = enabled;
        self
    }

    /// Returns the underlying [`Introspector`].
    #[inline(always)]
    pub fn introspector(&self) -> &Introspector<'r> {
        &self.introspector
    }

    /// Visits `root` and every reachable non-primitive property below it.
    pub fn traverse<'a>(&self, observer: &mut impl Observer<'a>, root: &'a dyn Reflect) {
        let path = Path::current();
        observer.visit(&path, None, None, root);

        let mut cache = IntrospectionCache::new();
        self.traverse_node(&mut cache, observer, &path, root);
    }

    fn traverse_node<'a>(
        &self,
        cache: &mut IntrospectionCache,
        observer: &mut impl Observer<'a>,
        path: &Path,
        object: &'a dyn Reflect,
    ) {
        let introspection = cache.introspect(&self.introspector, object, self.use_blacklist);
        let introspection = match introspection {
            Ok(introspection) => introspection,
            Err(err) => {
                log::warn!("skipping properties of `{path}`: {err}");
                return;
            }
        };

        for property in &introspection {
            if self.primitivity.is_primitive(property.type_info()) {
                continue;
            }

            let name = property.name();
            let Some(value) = property.read(object) else {
                log::debug!("`{path}`: property `{name}` has no value");
                continue;
            };

            match value.as_sequence() {
                Some(sequence) => {
                    for (index, item) in sequence.iter().enumerate() {
                        let child = path.append_element(PathElement::array_index(name, index));
                        self.visit(cache, observer, &child, property, object, item);
                    }
                }
                None => {
                    let child = path.append_element(PathElement::object(name));
                    self.visit(cache, observer, &child, property, object, value);
                }
            }
        }
    }

    #[inline]
    fn visit<'a>(
        &self,
        cache: &mut IntrospectionCache,
        observer: &mut impl Observer<'a>,
        path: &Path,
        property: &PropertyInfo,
        parent: &'a dyn Reflect,
        child: &'a dyn Reflect,
    ) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        log::trace!("visit `{path}` ({})", child.ty());

        observer.visit(path, Some(property), Some(parent), child);
        self.traverse_node(cache, observer, path, child);
    }
}

impl core::fmt::Debug for Traverser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Traverser")
            .field("introspector", &self.introspector)
            .field("use_blacklist", &self.use_blacklist)
            .finish_non_exhaustive()
    }
}
