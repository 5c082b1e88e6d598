//! Vertex types and color helpers

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Linear RGB color with each channel in `[0, 1]`
pub type Color3f = [f32; 3];

/// Normalize 8-bit channels to `[0, 1]`
#[inline]
pub fn color_from_rgb8(r: u8, g: u8, b: u8) -> Color3f {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Split a packed `0xRRGGBB` value into normalized channels
pub fn color_from_hex(hex: u32) -> Color3f {
    color_from_rgb8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}
