//! Point cloud mesh data structures

use crate::transform::Transform3D;
use crate::vertex::*;
use serde::{Deserialize, Serialize};

/// A triangle soup built from per-pixel samples.
///
/// Positions and colors are parallel lists; every consecutive triple of
/// vertices forms one triangle and no vertex is shared between triangles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloudMesh {
    pub positions: Vec<Point3f>,
    pub colors: Vec<Color3f>,
}

/// Material attached to a reconstructed mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshMaterial {
    /// Shade with the per-vertex colors instead of a uniform color
    pub vertex_colors: bool,
    pub opacity: f32,
}

impl Default for MeshMaterial {
    fn default() -> Self {
        Self {
            vertex_colors: true,
            opacity: 1.0,
        }
    }
}

impl PointCloudMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    /// Append one flat-colored triangle
    pub fn push_triangle(&mut self, corners: [Point3f; 3], color: Color3f) {
        self.positions.extend_from_slice(&corners);
        self.colors.extend_from_slice(&[color; 3]);
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over the triangles as `(corners, color)` pairs
    pub fn triangles(&self) -> impl Iterator<Item = ([Point3f; 3], Color3f)> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| ([p[0], p[1], p[2]], c[0]))
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` slice
    pub fn position_array(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as a flat `[r, g, b, r, g, b, ...]` slice
    pub fn color_array(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Apply a transformation to every position
    pub fn apply_transform(&mut self, transform: &Transform3D) {
        for position in &mut self.positions {
            *position = transform.transform_point(position);
        }
    }

    /// Rotate the whole mesh about the vertical axis
    pub fn rotate_y(&mut self, angle: f32) {
        if angle != 0.0 {
            self.apply_transform(&Transform3D::rotation_y(angle));
        }
    }
}
