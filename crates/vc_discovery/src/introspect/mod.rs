//! Enumerates the inspectable properties of values and types.
//!
//! ## Menu
//!
//! - [`Introspector`]: lists properties from a [`TypeRegistry`], honoring
//!   option-driven types and an optional [`Blacklist`].
//! - [`Introspection`]: the ordered result of one query.
//! - [`IntrospectionCache`]: per-run cache of results keyed by runtime type.
//! - [`IntrospectionError`]: unregistered types and unknown options.
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry
//! [`Blacklist`]: crate::registry::Blacklist

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod error;
mod introspection;
mod introspector;

// -----------------------------------------------------------------------------
// Exports

pub use cache::IntrospectionCache;
pub use error::IntrospectionError;
pub use introspection::Introspection;
pub use introspector::Introspector;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{IntrospectionCache, IntrospectionError, Introspector};
    use crate::info::{Type, Typed};
    use crate::registry::{BlacklistRules, TypeMeta};
    use crate::testing::{Actor, Filter, Pipeline, Settings, registry, root};

    fn names(result: &super::Introspection) -> Vec<&'static str> {
        result.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn option_driven_values_expose_their_options() {
        let registry = registry();
        let introspector = Introspector::new(&registry);

        let result = introspector.introspect(&Filter::default(), false).unwrap();
        assert!(result.is_option_driven());
        assert_eq!(names(&result), ["fallback", "threshold"]);

        // type mode ignores the option list
        let result = introspector
            .introspect_type(<Filter as Typed>::type_info(), false)
            .unwrap();
        assert!(!result.is_option_driven());
        assert_eq!(names(&result), ["threshold", "scratch", "fallback"]);
    }

    #[test]
    fn type_mode_needs_read_and_write() {
        let registry = registry();
        let introspector = Introspector::new(&registry);

        let result = introspector.introspect(&Settings::default(), false).unwrap();
        assert_eq!(names(&result), ["levels", "backup"]);
    }

    #[test]
    fn blacklist_only_applies_when_enabled() {
        let registry = registry();
        let rules = BlacklistRules::new()
            .exclude_property::<Filter>("fallback")
            .exclude_type::<Actor>();
        let introspector = Introspector::new(&registry).with_blacklist(&rules);

        let filter = Filter::default();
        let result = introspector.introspect(&filter, true).unwrap();
        assert_eq!(names(&result), ["threshold"]);
        let result = introspector.introspect(&filter, false).unwrap();
        assert_eq!(names(&result), ["fallback", "threshold"]);

        // a blacklisted type exposes nothing
        let actor = Actor::default();
        assert!(introspector.introspect(&actor, true).unwrap().is_empty());
        assert_eq!(introspector.introspect(&actor, false).unwrap().len(), 2);
    }

    #[test]
    fn multi_valued_properties_can_be_excluded() {
        let registry = registry();
        let rules = BlacklistRules::new().exclude_multiple(true);
        let introspector = Introspector::new(&registry).with_blacklist(&rules);

        let root = root();
        let result = introspector.introspect(&root.pipeline, true).unwrap();
        assert_eq!(names(&result), ["title", "settings"]);
    }

    #[test]
    fn scalars_and_sequences_have_no_properties() {
        let registry = registry();
        let introspector = Introspector::new(&registry);

        assert!(introspector.introspect(&5_u8, true).unwrap().is_empty());
        let levels = alloc::vec![1_i32];
        assert!(introspector.introspect(&levels, true).unwrap().is_empty());
        assert!(introspector.property(&levels, "len").unwrap().is_none());
    }

    #[test]
    fn introspection_failures() {
        let mut registry = registry();
        let introspector = Introspector::new(&registry);
        assert!(introspector.property(&root().pipeline, "title").unwrap().is_some());

        registry.insert_type_meta(TypeMeta::of::<Filter>().with_options(&["missing"]));
        let introspector = Introspector::new(&registry);
        assert_eq!(
            introspector.introspect(&Filter::default(), false).unwrap_err(),
            IntrospectionError::UnknownOption {
                ty: Type::of::<Filter>(),
                option: "missing",
            }
        );

        let empty = crate::registry::TypeRegistry::new();
        let introspector = Introspector::new(&empty);
        assert_eq!(
            introspector.introspect(&Actor::default(), false).unwrap_err(),
            IntrospectionError::UnregisteredType(Type::of::<Actor>())
        );
    }

    #[test]
    fn cache_keeps_one_result_per_type() {
        let registry = registry();
        let introspector = Introspector::new(&registry);
        let mut cache = IntrospectionCache::new();

        let root = root();
        let first = cache.introspect(&introspector, &root.pipeline, true).unwrap();
        let again = cache.introspect(&introspector, &root.pipeline, true).unwrap();
        assert_eq!(names(&first), names(&again));
        assert_eq!(cache.len(), 1);

        cache.introspect(&introspector, &root.pipeline, false).unwrap();
        cache.introspect(&introspector, &Pipeline::clone(&root.pipeline), false).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
