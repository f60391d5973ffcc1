//! The explicit type registry that replaces runtime bean reflection.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: the ordered property list of a component type, and its
//!   option list if it is option-driven.
//! - [`GetTypeMeta`]: a component that can describe its own [`TypeMeta`].
//! - [`TypeRegistry`]: the store of [`TypeMeta`]s, keyed by `TypeId`.
//! - [`Blacklist`]: excludes types and properties from introspection, with
//!   [`NoBlacklist`] and [`BlacklistRules`] as ready-made implementations.

// -----------------------------------------------------------------------------
// Modules

mod blacklist;
mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use blacklist::{Blacklist, BlacklistRules, NoBlacklist};
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
