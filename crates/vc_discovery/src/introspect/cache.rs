use vc_utils::TypeIdMap;

use crate::Reflect;
use crate::introspect::{Introspection, IntrospectionError, Introspector};

// -----------------------------------------------------------------------------
// IntrospectionCache

/// Caches [`Introspection`] results per runtime type.
///
/// A cache lives for one run, e.g. one traversal, and is never shared
/// globally. Results with and without the blacklist are kept apart.
#[derive(Debug, Default)]
pub struct IntrospectionCache {
    entries: [TypeIdMap<Result<Introspection, IntrospectionError>>; 2],
}

impl IntrospectionCache {
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for the type of `value`, introspecting it
    /// on first use.
    pub fn introspect(
        &mut self,
        introspector: &Introspector<'_>,
        value: &dyn Reflect,
        use_blacklist: bool,
    ) -> Result<Introspection, IntrospectionError> {
        self.entries[use_blacklist as usize]
            .get_or_insert(value.ty().id(), || {
                introspector.introspect(value, use_blacklist)
            })
            .clone()
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.iter().map(TypeIdMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(TypeIdMap::is_empty)
    }

    /// Drops every cached result.
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(TypeIdMap::clear);
    }
}
