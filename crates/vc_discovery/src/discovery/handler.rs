use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::access::PropertyContainer;
use crate::discovery::PathPattern;

// -----------------------------------------------------------------------------
// DiscoveryHandler

/// A predicate evaluated against every node of a discovery run, together
/// with the accumulator of its matches.
///
/// The accumulator is append-only during a run; call
/// [`clear_containers`](DiscoveryHandler::clear_containers) before reusing
/// a handler.
pub trait DiscoveryHandler<'a> {
    /// Tests the runtime value of a node.
    fn handles(&self, value: &dyn Reflect) -> bool;

    /// The address filter.
    fn pattern(&self) -> &PathPattern;

    /// Whether the address filter is negated. Ignored for
    /// [`PathPattern::MatchAll`].
    fn is_inverted(&self) -> bool {
        false
    }

    fn add_container(&mut self, container: PropertyContainer<'a>);

    fn containers(&self) -> &[PropertyContainer<'a>];

    fn clear_containers(&mut self);

    /// Address filter first, then the value predicate.
    ///
    /// `address` is the canonical text of the node's [`Path`](crate::access::Path).
    fn matches(&self, address: &str, value: &dyn Reflect) -> bool {
        self.pattern().matches(address, self.is_inverted()) && self.handles(value)
    }
}

impl<'a, T: DiscoveryHandler<'a> + ?Sized> DiscoveryHandler<'a> for &mut T {
    #[inline]
    fn handles(&self, value: &dyn Reflect) -> bool {
        (**self).handles(value)
    }

    #[inline]
    fn pattern(&self) -> &PathPattern {
        (**self).pattern()
    }

    #[inline]
    fn is_inverted(&self) -> bool {
        (**self).is_inverted()
    }

    #[inline]
    fn add_container(&mut self, container: PropertyContainer<'a>) {
        (**self).add_container(container);
    }

    #[inline]
    fn containers(&self) -> &[PropertyContainer<'a>] {
        (**self).containers()
    }

    #[inline]
    fn clear_containers(&mut self) {
        (**self).clear_containers();
    }

    #[inline]
    fn matches(&self, address: &str, value: &dyn Reflect) -> bool {
        (**self).matches(address, value)
    }
}

impl<'a, T: DiscoveryHandler<'a> + ?Sized> DiscoveryHandler<'a> for Box<T> {
    #[inline]
    fn handles(&self, value: &dyn Reflect) -> bool {
        (**self).handles(value)
    }

    #[inline]
    fn pattern(&self) -> &PathPattern {
        (**self).pattern()
    }

    #[inline]
    fn is_inverted(&self) -> bool {
        (**self).is_inverted()
    }

    #[inline]
    fn add_container(&mut self, container: PropertyContainer<'a>) {
        (**self).add_container(container);
    }

    #[inline]
    fn containers(&self) -> &[PropertyContainer<'a>] {
        (**self).containers()
    }

    #[inline]
    fn clear_containers(&mut self) {
        (**self).clear_containers();
    }

    #[inline]
    fn matches(&self, address: &str, value: &dyn Reflect) -> bool {
        (**self).matches(address, value)
    }
}

// -----------------------------------------------------------------------------
// Handler

/// The stock [`DiscoveryHandler`]: a boxed value predicate, a
/// [`PathPattern`] and an invert flag.
///
/// # Examples
///
/// ```
/// use vc_discovery::discovery::{DiscoveryHandler, Handler};
///
/// let handler = Handler::for_type::<String>()
///     .with_regex(r".*\.name")
///     .unwrap()
///     .inverted(true);
///
/// assert!(handler.is_inverted());
/// assert!(handler.containers().is_empty());
/// ```
pub struct Handler<'a> {
    predicate: Box<dyn Fn(&dyn Reflect) -> bool>,
    pattern: PathPattern,
    invert: bool,
    containers: Vec<PropertyContainer<'a>>,
}

impl<'a> Handler<'a> {
    /// Creates a handler accepting every address whose value satisfies
    /// `predicate`.
    pub fn new(predicate: impl Fn(&dyn Reflect) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            pattern: PathPattern::MatchAll,
            invert: false,
            containers: Vec::new(),
        }
    }

    /// Creates a handler accepting values whose runtime type is `T`.
    #[inline]
    pub fn for_type<T: Reflect>() -> Self {
        Self::new(|value| value.is::<T>())
    }

    /// Replaces the address filter with a whole-string regular expression.
    pub fn with_regex(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.with_pattern(PathPattern::regex(pattern)?))
    }

    #[inline]
    pub fn with_pattern(mut self, pattern: PathPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Negates the regex half of the match.
    #[inline]
    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Moves the accumulated matches out, leaving the handler empty.
    #[inline]
    pub fn take_containers(&mut self) -> Vec<PropertyContainer<'a>> {
        core::mem::take(&mut self.containers)
    }
}

impl<'a> DiscoveryHandler<'a> for Handler<'a> {
    #[inline]
    fn handles(&self, value: &dyn Reflect) -> bool {
        (self.predicate)(value)
    }

    #[inline]
    fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    #[inline]
    fn is_inverted(&self) -> bool {
        self.invert
    }

    #[inline]
    fn add_container(&mut self, container: PropertyContainer<'a>) {
        self.containers.push(container);
    }

    #[inline]
    fn containers(&self) -> &[PropertyContainer<'a>] {
        &self.containers
    }

    #[inline]
    fn clear_containers(&mut self) {
        self.containers.clear();
    }
}

impl fmt::Debug for Handler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("pattern", &self.pattern)
            .field("invert", &self.invert)
            .field("containers", &self.containers)
            .finish_non_exhaustive()
    }
}
