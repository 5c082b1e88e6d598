//! Layout constants for reconstruction, grid and camera placement

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{Error, Point3f, Result};

/// An independent value per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Axes {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Scene layout shared by the reconstructor, the grid builder and the viewer.
///
/// Every field has a default, so a partial JSON document only overrides the
/// values it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Offset added to every vertex and grid line
    pub translate: Axes,
    /// Per-axis scale of pixel coordinates and depth
    pub scale: Axes,
    /// Grid line color as `0xRRGGBB`
    pub line_color: u32,
    pub line_opacity: f32,
    pub line_thickness: f32,
    /// Length of the four depth-direction rails
    pub line_length_z: f32,
    /// Depth offset applied to every cross-bar
    pub z_offset: f32,
    pub grid_start: u32,
    pub grid_interval: u32,
    pub max_z_depth: u32,
    pub camera_position: Axes,
    /// Lens focal length in millimetres
    pub camera_focal_length: f32,
    /// Rotation of the whole cloud about the vertical axis, in radians
    pub rotation_y: f32,
    /// Number of pixel rows sampled from each source
    pub point_cloud_width: usize,
    /// Number of pixel columns sampled from each source
    pub point_cloud_height: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            translate: Axes::new(-150.0, -100.0, -250.0),
            scale: Axes::splat(1.0),
            line_color: 0x555555,
            line_opacity: 0.06,
            line_thickness: 1.0,
            line_length_z: 256.0,
            z_offset: 125.0,
            grid_start: 5,
            grid_interval: 10,
            max_z_depth: 255,
            camera_position: Axes::new(100.0, 100.0, 400.0),
            camera_focal_length: 20.0,
            rotation_y: 0.0,
            point_cloud_width: 512,
            point_cloud_height: 512,
        }
    }
}

impl SceneConfig {
    pub fn camera_position(&self) -> Point3f {
        Point3f::new(
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
        )
    }

    /// Number of depth steps that receive cross-bars
    pub fn grid_steps(&self) -> usize {
        if self.grid_start > self.max_z_depth {
            return 0;
        }
        let interval = self.grid_interval.max(1);
        ((self.max_z_depth - self.grid_start) / interval) as usize + 1
    }

    /// Reject values that would hang grid generation or produce empty output
    pub fn validate(&self) -> Result<()> {
        if self.grid_interval == 0 {
            return Err(Error::Config("grid_interval must be greater than zero".to_string()));
        }
        if !(0.0..=1.0).contains(&self.line_opacity) {
            return Err(Error::Config(format!(
                "line_opacity must lie in [0, 1], got {}",
                self.line_opacity
            )));
        }
        if self.line_thickness <= 0.0 {
            return Err(Error::Config(format!(
                "line_thickness must be positive, got {}",
                self.line_thickness
            )));
        }
        if self.camera_focal_length <= 0.0 {
            return Err(Error::Config(format!(
                "camera_focal_length must be positive, got {}",
                self.camera_focal_length
            )));
        }
        // The camera looks at the origin with +y as up
        if self.camera_position.x.hypot(self.camera_position.z) <= f32::EPSILON {
            return Err(Error::Config(format!(
                "camera_position ({}, {}, {}) lies on the vertical axis through the origin",
                self.camera_position.x, self.camera_position.y, self.camera_position.z
            )));
        }
        if self.line_color > 0xffffff {
            return Err(Error::Config(format!(
                "line_color {:#x} is not a 24-bit RGB value",
                self.line_color
            )));
        }
        Ok(())
    }
}
