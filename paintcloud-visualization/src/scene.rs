//! In-memory scene graph that records installed geometry

use paintcloud_core::{
    Drawable, GeometrySink, GridLine, LineMaterial, MeshMaterial, Point3f, PointCloudMesh,
    Transform3D,
};

/// A reconstructed mesh as installed in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub mesh: PointCloudMesh,
    pub material: MeshMaterial,
}

/// One grid line as installed in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineNode {
    pub line: GridLine,
    pub material: LineMaterial,
    pub transform: Transform3D,
}

/// Scene graph holding a mesh group and the reference lines.
///
/// Every change bumps a revision counter, which renderers compare against
/// the last revision they drew.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<MeshNode>,
    lines: Vec<LineNode>,
    revision: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meshes(&self) -> &[MeshNode] {
        &self.meshes
    }

    pub fn lines(&self) -> &[LineNode] {
        &self.lines
    }

    /// Number of changes made since the scene was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Total vertex count over every installed mesh
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|node| node.mesh.vertex_count()).sum()
    }

    /// Extent of all meshes and lines, in scene space
    pub fn bounding_box(&self) -> Option<(Point3f, Point3f)> {
        let mesh_bounds = self
            .meshes
            .iter()
            .filter(|node| !node.mesh.is_empty())
            .map(|node| node.mesh.bounding_box());
        let line_bounds = self.lines.iter().map(|node| {
            let corners = node.line.corners().map(|p| node.transform.transform_point(&p));
            corners[1..].iter().fold((corners[0], corners[0]), |(min, max), p| {
                (min.inf(p), max.sup(p))
            })
        });

        mesh_bounds
            .chain(line_bounds)
            .reduce(|(amin, amax), (bmin, bmax)| (amin.inf(&bmin), amax.sup(&bmax)))
    }
}

impl GeometrySink for Scene {
    fn add_mesh(&mut self, mesh: &PointCloudMesh, material: &MeshMaterial) {
        self.meshes.push(MeshNode {
            mesh: mesh.clone(),
            material: *material,
        });
        self.revision += 1;
    }

    fn add_line(&mut self, line: &GridLine, material: &LineMaterial, transform: &Transform3D) {
        self.lines.push(LineNode {
            line: *line,
            material: *material,
            transform: *transform,
        });
        self.revision += 1;
    }

    fn clear_meshes(&mut self) {
        if !self.meshes.is_empty() {
            self.meshes.clear();
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintcloud_core::Vector3f;

    fn unit_line() -> GridLine {
        GridLine::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(2.0, 2.0, 2.0))
    }

    fn material() -> LineMaterial {
        LineMaterial {
            color: 0x555555,
            opacity: 0.06,
            transparent: true,
        }
    }

    #[test]
    fn test_records_geometry() {
        let mut scene = Scene::new();
        assert_eq!(scene.bounding_box(), None);

        let mut mesh = PointCloudMesh::new();
        mesh.push_triangle(
            [
                Point3f::new(3.0, 0.0, 0.0),
                Point3f::new(4.0, 1.0, 0.0),
                Point3f::new(4.0, 2.0, 0.0),
            ],
            [1.0, 1.0, 1.0],
        );
        scene.add_mesh(&mesh, &MeshMaterial::default());
        scene.add_line(&unit_line(), &material(), &Transform3D::identity());

        assert_eq!(scene.meshes().len(), 1);
        assert_eq!(scene.lines().len(), 1);
        assert_eq!(scene.vertex_count(), 3);
        assert_eq!(scene.revision(), 2);
        assert_eq!(
            scene.bounding_box(),
            Some((Point3f::new(-1.0, -1.0, -1.0), Point3f::new(4.0, 2.0, 1.0)))
        );
    }

    #[test]
    fn test_clear_meshes_keeps_lines() {
        let mut scene = Scene::new();
        scene.add_mesh(&PointCloudMesh::new(), &MeshMaterial::default());
        scene.add_line(&unit_line(), &material(), &Transform3D::identity());

        scene.clear_meshes();
        assert!(scene.meshes().is_empty());
        assert_eq!(scene.lines().len(), 1);
        assert_eq!(scene.revision(), 3);

        // Nothing to clear, nothing changes
        scene.clear_meshes();
        assert_eq!(scene.revision(), 3);
    }
}
