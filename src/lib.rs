//! Vector, matrix and transform utilities.
//!
//! The types in this crate are plain `#[repr(C)]` value types with public
//! components. Operations that a SIMD math library performs more efficiently
//! (transform composition, rotation, look-at, projection, transposition,
//! inversion) are delegated to a [`TransformBackend`](backend::TransformBackend),
//! which by default is the [`glam`]-based
//! [`GlamBackend`](backend::GlamBackend).

#[macro_use]
mod macros;

pub mod angle;
pub mod backend;
pub mod matrix;
pub mod scalar;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use angle::{Angle, Degrees, Radians};
pub use backend::{DefaultBackend, TransformBackend};
pub use matrix::Matrix4x4;
pub use scalar::{EPSILON_FLOAT, VEC_PRECISION};
pub use vector::{Vector2, Vector3, Vector4};
