//! Shared test fixtures: a small pipeline graph.
//!
//! ```text
//! Root
//! └─ pipeline: Pipeline
//!    ├─ title: String
//!    ├─ actors: Vec<Box<dyn Reflect>>
//!    │  ├─ [0] Actor "source"
//!    │  ├─ [1] Actor "blur"
//!    │  ├─ [2] Branch "side"
//!    │  │      └─ actors: [Actor "sink"]
//!    │  └─ [3] Filter (options: fallback, threshold)
//!    │         ├─ scratch: Actor "scratch" (hidden)
//!    │         └─ fallback: Actor "fallback"
//!    └─ settings: Settings
//!       ├─ levels: Vec<i32> (writes count `changes`)
//!       ├─ changes: u32 (read only)
//!       └─ backup: Option<Actor>
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
use crate::{Reflect, field_property, impl_reflect_component};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Actor {
    pub name: String,
    pub gain: f64,
}

impl Actor {
    pub fn new(name: &str, gain: f64) -> Self {
        Self {
            name: String::from(name),
            gain,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Branch {
    pub name: String,
    pub actors: Vec<Actor>,
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub levels: Vec<i32>,
    pub changes: u32,
    pub backup: Option<Actor>,
}

#[derive(Clone, Debug)]
pub struct Pipeline {
    pub title: String,
    pub actors: Vec<Box<dyn Reflect>>,
    pub settings: Settings,
}

#[derive(Clone, Debug)]
pub struct Root {
    pub pipeline: Pipeline,
}

#[derive(Clone, Debug, Default)]
pub struct Filter {
    pub threshold: u8,
    pub scratch: Actor,
    pub fallback: Actor,
}

impl_reflect_component!(Actor, Branch, Settings, Pipeline, Root, Filter);

impl GetTypeMeta for Actor {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_property(field_property!(Actor, name: String))
            .with_property(field_property!(Actor, gain: f64))
    }
}

impl GetTypeMeta for Branch {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_property(field_property!(Branch, name: String))
            .with_property(field_property!(Branch, actors: Vec<Actor>))
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Actor>();
    }
}

fn write_levels(owner: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
    let Some(settings) = owner.downcast_mut::<Settings>() else {
        return Err(value);
    };
    settings.levels = <Vec<i32> as Reflect>::from_boxed_reflect(value)?;
    settings.changes += 1;
    Ok(())
}

impl GetTypeMeta for Settings {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_property(field_property!(Settings, levels: Vec<i32>, read_only).with_write(write_levels))
            .with_property(field_property!(Settings, changes: u32, read_only))
            .with_property(field_property!(Settings, backup: Actor, optional))
    }
}

impl GetTypeMeta for Pipeline {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_property(field_property!(Pipeline, title: String))
            .with_property(field_property!(Pipeline, actors: Vec<Box<dyn Reflect>>))
            .with_property(field_property!(Pipeline, settings: Settings))
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Actor>();
        registry.register::<Branch>();
        registry.register::<Filter>();
        registry.register::<Settings>();
    }
}

impl GetTypeMeta for Root {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>().with_property(field_property!(Root, pipeline: Pipeline))
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Pipeline>();
    }
}

impl GetTypeMeta for Filter {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_property(field_property!(Filter, threshold: u8))
            .with_property(field_property!(Filter, scratch: Actor))
            .with_property(field_property!(Filter, fallback: Actor))
            .with_options(&["fallback", "threshold"])
    }
}

pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Root>();
    registry
}

pub fn root() -> Root {
    let filter = Filter {
        threshold: 7,
        scratch: Actor::new("scratch", 0.0),
        fallback: Actor::new("fallback", 1.0),
    };
    let branch = Branch {
        name: String::from("side"),
        actors: vec![Actor::new("sink", 2.0)],
    };

    Root {
        pipeline: Pipeline {
            title: String::from("demo"),
            actors: vec![
                Box::new(Actor::new("source", 1.0)),
                Box::new(Actor::new("blur", 0.5)),
                Box::new(branch),
                Box::new(filter),
            ],
            settings: Settings {
                levels: vec![1, 2, 3],
                changes: 0,
                backup: None,
            },
        },
    }
}
