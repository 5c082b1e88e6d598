//! Bounding grid primitives

use crate::transform::Transform3D;
use crate::vertex::*;
use serde::{Deserialize, Serialize};

/// One reference line, drawn as a thin axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub center: Point3f,
    /// Width, height and depth of the box
    pub size: Vector3f,
}

impl GridLine {
    pub fn new(center: Point3f, size: Vector3f) -> Self {
        Self { center, size }
    }

    /// Minimum and maximum corners of the box
    pub fn bounds(&self) -> (Point3f, Point3f) {
        let half = self.size * 0.5;
        (self.center - half, self.center + half)
    }

    /// The eight box corners, bottom face first
    pub fn corners(&self) -> [Point3f; 8] {
        let (min, max) = self.bounds();
        [
            Point3f::new(min.x, min.y, min.z),
            Point3f::new(max.x, min.y, min.z),
            Point3f::new(max.x, min.y, max.z),
            Point3f::new(min.x, min.y, max.z),
            Point3f::new(min.x, max.y, min.z),
            Point3f::new(max.x, max.y, min.z),
            Point3f::new(max.x, max.y, max.z),
            Point3f::new(min.x, max.y, max.z),
        ]
    }

    /// Index of the longest box axis (0 = x, 1 = y, 2 = z)
    pub fn major_axis(&self) -> usize {
        self.size.imax()
    }
}

/// Unlit, blended material shared by all grid lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMaterial {
    /// Packed `0xRRGGBB`
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
}

impl LineMaterial {
    pub fn rgb(&self) -> Color3f {
        color_from_hex(self.color)
    }

    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, self.opacity]
    }
}

/// The full set of reference lines around a reconstructed volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingGrid {
    pub lines: Vec<GridLine>,
    pub material: LineMaterial,
    /// Rotation of the whole grid about the vertical axis, in radians
    pub rotation_y: f32,
}

impl BoundingGrid {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridLine> {
        self.lines.iter()
    }

    /// Group transform the sink applies to every line
    pub fn transform(&self) -> Transform3D {
        Transform3D::rotation_y(self.rotation_y)
    }
}

impl<'a> IntoIterator for &'a BoundingGrid {
    type Item = &'a GridLine;
    type IntoIter = std::slice::Iter<'a, GridLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bounds_and_axis() {
        let line = GridLine::new(
            Point3f::new(106.0, -100.0, -120.0),
            Vector3f::new(512.0, 1.0, 1.0),
        );
        let (min, max) = line.bounds();
        assert_eq!(min, Point3f::new(-150.0, -100.5, -120.5));
        assert_eq!(max, Point3f::new(362.0, -99.5, -119.5));
        assert_eq!(line.major_axis(), 0);
        assert_eq!(line.corners()[6], max);
    }

    #[test]
    fn test_material_rgba() {
        let material = LineMaterial {
            color: 0xff0000,
            opacity: 0.25,
            transparent: true,
        };
        assert_eq!(material.rgba(), [1.0, 0.0, 0.0, 0.25]);
    }
}
