//! Core traits for paintcloud

use crate::{grid::*, mesh::*, pixel::PixelBuffer, transform::Transform3D, vertex::*, Result};

/// Something that can hand out RGBA pixels of a rasterized image.
///
/// Mirrors a canvas pixel read: pixels of the requested region that fall
/// outside the raster come back as transparent black.
pub trait PixelSource {
    /// Extract the `width x height` region whose top-left pixel is `(x, y)`
    fn pixel_buffer(&self, x: usize, y: usize, width: usize, height: usize) -> Result<PixelBuffer>;
}

impl PixelSource for PixelBuffer {
    fn pixel_buffer(&self, x: usize, y: usize, width: usize, height: usize) -> Result<PixelBuffer> {
        let mut data = Vec::with_capacity(width * height * crate::CHANNELS);
        for row in y..y + height {
            for col in x..x + width {
                if col < self.width() && row < self.height() {
                    data.extend_from_slice(&self.pixel(col, row));
                } else {
                    data.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
        }
        Ok(PixelBuffer::from_raw(width, height, data))
    }
}

/// A scene graph that accepts reconstructed geometry.
///
/// Rendering, projection and user interaction are the sink's business.
pub trait GeometrySink {
    /// Install a reconstructed mesh
    fn add_mesh(&mut self, mesh: &PointCloudMesh, material: &MeshMaterial);

    /// Install one reference line, placed by `transform`
    fn add_line(&mut self, line: &GridLine, material: &LineMaterial, transform: &Transform3D);

    /// Drop every mesh previously installed with [`GeometrySink::add_mesh`]
    fn clear_meshes(&mut self);

    /// Install a whole bounding grid
    fn add_grid(&mut self, grid: &BoundingGrid) {
        let transform = grid.transform();
        for line in grid {
            self.add_line(line, &grid.material, &transform);
        }
    }
}

/// Trait for objects with a spatial extent
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

fn bounds_of<'a>(mut points: impl Iterator<Item = &'a Point3f>) -> (Point3f, Point3f) {
    let Some(first) = points.next() else {
        return (Point3f::origin(), Point3f::origin());
    };

    let mut min = *first;
    let mut max = *first;
    for p in points {
        min = min.inf(p);
        max = max.sup(p);
    }
    (min, max)
}

impl Drawable for PointCloudMesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(self.positions.iter())
    }
}

impl Drawable for BoundingGrid {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let transform = self.transform();
        let corners: Vec<Point3f> = self
            .lines
            .iter()
            .flat_map(|line| line.corners())
            .map(|p| transform.transform_point(&p))
            .collect();
        bounds_of(corners.iter())
    }
}
