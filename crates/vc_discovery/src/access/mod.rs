//! Addresses into object graphs, and their resolution.
//!
//! ## Menu
//!
//! - [`Path`] / [`PathElement`]: the address language, parsed from and
//!   printed to its canonical text form.
//! - [`Resolver`]: walks a [`Path`] over a graph to read or write a value.
//! - [`PropertyContainer`] / [`PropertyContainerMut`]: a resolved address,
//!   an owner object together with an [`Accessor`].
//!
//! ## Syntax
//!
//! | segment    | meaning                                        |
//! |------------|------------------------------------------------|
//! | `name`     | the property `name`                            |
//! | `name[i]`  | element `i` of the sequence property `name`    |
//! | `get(i)`   | element `i` of the current object, a sequence  |
//! | `.`        | the whole address: the current (root) object   |
//!
//! Segments are joined with `.`, e.g. `pipeline.actors[1].get(0)`.

// -----------------------------------------------------------------------------
// Modules

mod container;
mod error;
mod path;
mod resolver;

// -----------------------------------------------------------------------------
// Exports

pub use container::{Accessor, PropertyContainer, PropertyContainerMut};
pub use error::{ResolveError, ResolveErrorKind};
pub use path::{CURRENT, LIST_ACCESSOR, ParseError, ParseErrorKind, is_valid_name};
pub use path::{Path, PathElement, PathElementKind};
pub use resolver::Resolver;
