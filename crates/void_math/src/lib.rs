//! # void_math - Editor Math Types
//!
//! Value types the inspector reads from and writes to serialized properties:
//! vectors, colors and angle units.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod vector;
pub mod angle;
pub mod color;

pub use vector::*;
pub use angle::*;
pub use color::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

pub mod prelude {
    pub use crate::vector::{Vec3, VectorComponent};
    pub use crate::angle::{Degree, Radian};
    pub use crate::color::Color;
    pub use crate::{lerp, clamp};
}
