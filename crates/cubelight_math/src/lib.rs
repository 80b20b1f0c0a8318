//! 3D Mathematics helpers
//!
//! This crate provides the small amount of vector and matrix math the cubelight
//! scene store needs to place cubes:
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for model transforms

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
