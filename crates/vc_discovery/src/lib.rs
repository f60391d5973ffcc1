#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod reflection;
mod serde;

pub mod access;
pub mod discovery;
pub mod info;
pub mod introspect;
pub mod ops;
pub mod registry;
pub mod traversal;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
}

pub use reflection::Reflect;
