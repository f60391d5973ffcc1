//! Depth-first enumeration of object graphs.
//!
//! - [`Traverser`]: visits every reachable non-primitive property once.
//! - [`Observer`]: receives `(path, property, parent, child)` for each node.
//! - [`Primitivity`]: decides where traversal stops, [`ScalarPrimitives`]
//!   by default.

// -----------------------------------------------------------------------------
// Modules

mod observer;
mod traverser;

// -----------------------------------------------------------------------------
// Exports

pub use observer::{Observer, Primitivity, ScalarPrimitives};
pub use traverser::Traverser;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Traverser;
    use crate::Reflect;
    use crate::access::{Path, Resolver};
    use crate::info::{PropertyInfo, ReflectKind, TypeInfo};
    use crate::registry::{BlacklistRules, GetTypeMeta, TypeMeta, TypeRegistry};
    use crate::testing::{Actor, Filter, registry, root};
    use crate::{field_property, impl_reflect_component};

    fn collect_paths(traverser: &Traverser<'_>, root: &dyn Reflect) -> Vec<String> {
        let mut paths = Vec::new();
        let mut observer =
            |path: &Path, _: Option<&PropertyInfo>, _: Option<&dyn Reflect>, _: &dyn Reflect| {
                paths.push(path.to_string());
            };
        traverser.traverse(&mut observer, root);
        paths
    }

    #[test]
    fn pipeline_visit_order() {
        let registry = registry();
        let root = root();
        let paths = collect_paths(&Traverser::new(&registry), &root);
        assert_eq!(
            paths,
            [
                ".",
                "pipeline",
                "pipeline.actors[0]",
                "pipeline.actors[1]",
                "pipeline.actors[2]",
                "pipeline.actors[2].actors[0]",
                "pipeline.actors[3]",
                "pipeline.actors[3].fallback",
                "pipeline.settings",
            ]
        );
    }

    #[derive(Clone, Debug, Default)]
    struct Leaf {
        id: u32,
    }

    #[derive(Clone, Debug, Default)]
    struct Middle {
        inner: Leaf,
        items: Vec<Leaf>,
    }

    #[derive(Clone, Debug, Default)]
    struct Top {
        head: Middle,
        tail: Leaf,
    }

    impl_reflect_component!(Leaf, Middle, Top);

    fn level_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.insert_type_meta(TypeMeta::of::<Leaf>().with_property(field_property!(Leaf, id: u32)));
        registry.insert_type_meta(
            TypeMeta::of::<Middle>()
                .with_property(field_property!(Middle, inner: Leaf))
                .with_property(field_property!(Middle, items: Vec<Leaf>)),
        );
        registry.insert_type_meta(
            TypeMeta::of::<Top>()
                .with_property(field_property!(Top, head: Middle))
                .with_property(field_property!(Top, tail: Leaf)),
        );
        registry
    }

    #[test]
    fn arrays_expand_before_the_next_property() {
        let registry = level_registry();
        let top = Top {
            head: Middle {
                inner: Leaf { id: 1 },
                items: vec![Leaf { id: 2 }, Leaf { id: 3 }],
            },
            tail: Leaf { id: 4 },
        };

        let paths = collect_paths(&Traverser::new(&registry), &top);
        assert_eq!(
            paths,
            [".", "head", "head.inner", "head.items[0]", "head.items[1]", "tail"]
        );
    }

    #[test]
    fn observer_receives_parents_and_properties() {
        let registry = registry();
        let root = root();
        let resolver = Resolver::new(&registry);

        let mut seen = 0;
        let mut observer = |path: &Path,
                            property: Option<&PropertyInfo>,
                            parent: Option<&dyn Reflect>,
                            child: &dyn Reflect| {
            seen += 1;
            if path.is_current() {
                assert!(property.is_none() && parent.is_none());
                return;
            }
            // every visited address resolves back to the visited value
            let value = resolver.value(&root, path).unwrap();
            assert!(core::ptr::addr_eq(value, child));
            assert_eq!(property.unwrap().name(), path.last().unwrap().name());
            assert!(parent.is_some());
        };
        Traverser::new(&registry).traverse(&mut observer, &root);
        assert_eq!(seen, 9);
    }

    #[test]
    fn blacklist_and_primitivity_prune() {
        let registry = registry();
        let root = root();

        let rules = BlacklistRules::new().exclude_type::<Filter>();
        let traverser = Traverser::new(&registry).with_blacklist(&rules);
        let paths = collect_paths(&traverser, &root);
        assert!(paths.contains(&"pipeline.actors[3]".to_string()));
        assert!(!paths.contains(&"pipeline.actors[3].fallback".to_string()));

        let paths = collect_paths(&traverser.use_blacklist(false), &root);
        assert!(paths.contains(&"pipeline.actors[3].fallback".to_string()));

        // actors are terminal wherever they appear
        let shallow = Traverser::new(&registry).with_primitivity(|info: TypeInfo| {
            info.base().kind() != ReflectKind::Composite || info.base().ty().is::<Actor>()
        });
        let paths = collect_paths(&shallow, &root);
        assert_eq!(
            paths,
            [
                ".",
                "pipeline",
                "pipeline.actors[0]",
                "pipeline.actors[1]",
                "pipeline.actors[2]",
                "pipeline.actors[3]",
                "pipeline.settings",
            ]
        );
    }

    #[test]
    fn unregistered_nodes_are_skipped() {
        #[derive(Clone, Debug)]
        struct Loose;
        impl_reflect_component!(Loose);

        #[derive(Clone, Debug)]
        struct Holder {
            loose: Loose,
            actor: Actor,
        }
        impl_reflect_component!(Holder);

        impl GetTypeMeta for Holder {
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
                    .with_property(field_property!(Holder, loose: Loose))
                    .with_property(field_property!(Holder, actor: Actor))
            }
        }

        let mut registry = TypeRegistry::new();
        registry.register::<Holder>();

        let holder = Holder {
            loose: Loose,
            actor: Actor::default(),
        };
        let paths = collect_paths(&Traverser::new(&registry), &holder);
        assert_eq!(paths, [".", "loose", "actor"]);
    }
}
