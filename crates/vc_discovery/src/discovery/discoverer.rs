use crate::Reflect;
use crate::access::{Accessor, Path, PropertyContainer};
use crate::discovery::DiscoveryHandler;
use crate::info::PropertyInfo;
use crate::introspect::Introspector;
use crate::registry::{Blacklist, TypeRegistry};
use crate::traversal::{Observer, Primitivity, Traverser};

// -----------------------------------------------------------------------------
// Discovery

/// Evaluates a set of handlers against every node of an object graph in a
/// single traversal.
///
/// The root is tested once, under the current object address `.`, with no
/// property. Every other node is tested as the [`Traverser`] visits it, and
/// each handler it matches receives a [`PropertyContainer`] holding the
/// address, the parent object and the property that reached the node.
/// Handlers are independent; accumulation follows traversal order.
///
/// # Examples
///
/// ```
/// use vc_discovery::{Reflect, field_property, impl_reflect_component};
/// use vc_discovery::discovery::{Discovery, DiscoveryHandler, Handler};
/// use vc_discovery::registry::{TypeMeta, TypeRegistry};
///
/// #[derive(Clone, Debug)]
/// struct Stage { name: String, next: Vec<Stage> }
///
/// impl_reflect_component!(Stage);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(
///     TypeMeta::of::<Stage>()
///         .with_property(field_property!(Stage, name: String))
///         .with_property(field_property!(Stage, next: Vec<Stage>)),
/// );
///
/// let leaf = |name: &str| Stage { name: name.into(), next: vec![] };
/// let graph = Stage { name: "load".into(), next: vec![leaf("blur"), leaf("save")] };
///
/// let mut handlers = [
///     Handler::for_type::<Stage>(),
///     Handler::for_type::<Stage>().with_regex(r"next\[0\]").unwrap().inverted(true),
/// ];
/// Discovery::new(&registry).discover(&mut handlers, &graph);
///
/// let paths = |h: &Handler<'_>| -> Vec<String> {
///     h.containers().iter().map(|c| c.path().to_string()).collect()
/// };
/// assert_eq!(paths(&handlers[0]), [".", "next[0]", "next[1]"]);
/// assert_eq!(paths(&handlers[1]), [".", "next[1]"]);
/// ```
#[derive(Debug)]
pub struct Discovery<'r> {
    traverser: Traverser<'r>,
}

impl<'r> Discovery<'r> {
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::from_traverser(Traverser::new(registry))
    }

    #[inline]
    pub fn with_introspector(introspector: Introspector<'r>) -> Self {
        Self::from_traverser(Traverser::with_introspector(introspector))
    }

    /// Drives discovery with a configured [`Traverser`].
    #[inline]
    pub fn from_traverser(traverser: Traverser<'r>) -> Self {
        Self { traverser }
    }

    /// See [`Traverser::with_blacklist`].
    #[inline]
    pub fn with_blacklist(self, blacklist: &'r dyn Blacklist) -> Self {
        Self::from_traverser(self.traverser.with_blacklist(blacklist))
    }

    /// See [`Traverser::with_primitivity`].
    #[inline]
    pub fn with_primitivity(self, primitivity: impl Primitivity + 'r) -> Self {
        Self::from_traverser(self.traverser.with_primitivity(primitivity))
    }

    /// See [`Traverser::use_blacklist`].
    #[inline]
    pub fn use_blacklist(self, enabled: bool) -> Self {
        Self::from_traverser(self.traverser.use_blacklist(enabled))
    }

    #[inline(always)]
    pub fn traverser(&self) -> &Traverser<'r> {
        &self.traverser
    }

    /// Appends the matches below `root` to each handler's accumulator.
    pub fn discover<'a, H: DiscoveryHandler<'a>>(&self, handlers: &mut [H], root: &'a dyn Reflect) {
        let current = Path::current();
        let address = current.to_string();
        for handler in handlers.iter_mut() {
            if handler.matches(&address, root) {
                handler.add_container(PropertyContainer::new(current.clone(), None, root));
            }
        }

        let mut matcher = Matcher { handlers };
        self.traverser.traverse(&mut matcher, root);
    }
}

// -----------------------------------------------------------------------------
// Matcher

struct Matcher<'h, H> {
    handlers: &'h mut [H],
}

impl<'a, H: DiscoveryHandler<'a>> Observer<'a> for Matcher<'_, H> {
    fn visit(
        &mut self,
        path: &Path,
        property: Option<&PropertyInfo>,
        parent: Option<&'a dyn Reflect>,
        child: &'a dyn Reflect,
    ) {
        // The root was matched before traversal started.
        let (Some(property), Some(parent)) = (property, parent) else {
            return;
        };

        let address = path.to_string();
        for handler in self.handlers.iter_mut() {
            if handler.matches(&address, child) {
                let accessor = Some(Accessor::Property(*property));
                handler.add_container(PropertyContainer::new(path.clone(), accessor, parent));
            }
        }
    }
}
