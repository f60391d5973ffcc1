//! Built-in [`Reflect`](crate::Reflect) implementations.
//!
//! - scalars: `bool`, `char`, `u8`-`u128`, `i8`-`i128`, `usize`, `isize`,
//!   `f32`, `f64`, `String`
//! - sequences: `Vec<T>`
//! - `Box<dyn Reflect>`, delegating to the boxed value
//!
//! Components are implemented with [`impl_reflect_component!`](crate::impl_reflect_component).

mod boxed;
mod component;
mod scalar;
mod vec;
