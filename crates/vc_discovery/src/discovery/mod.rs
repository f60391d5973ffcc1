//! Predicate matching over a traversal.
//!
//! A [`Discovery`] run walks an object graph once and hands every node,
//! the root included, to each [`DiscoveryHandler`]. A node matches a handler
//! when its address passes the handler's [`PathPattern`] (negated when the
//! handler is inverted) and its value passes the handler's predicate.
//!
//! [`Handler`] is the ready-made handler: a type test or closure, an
//! optional whole-string regex and an invert flag.

// -----------------------------------------------------------------------------
// Modules

mod discoverer;
mod handler;
mod pattern;

// -----------------------------------------------------------------------------
// Exports

pub use discoverer::Discovery;
pub use handler::{DiscoveryHandler, Handler};
pub use pattern::PathPattern;

// -----------------------------------------------------------------------------
// Tests
