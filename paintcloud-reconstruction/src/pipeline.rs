//! One-shot construction of everything a viewer installs for a painting

use crate::bounding_grid::build_grid;
use crate::depth_mesh::{reconstruct, try_reconstruct};
use paintcloud_core::{BoundingGrid, PixelBuffer, PointCloudMesh, Result, SceneConfig};

/// Reconstructed mesh plus its reference grid, in a shared frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub mesh: PointCloudMesh,
    pub grid: BoundingGrid,
}

/// Reconstruct the mesh and rotate it into place.
///
/// Samples `config.point_cloud_width x config.point_cloud_height` pixels and
/// applies `config.rotation_y` to the finished mesh.
pub fn build_mesh(
    depth: &PixelBuffer,
    color: &PixelBuffer,
    config: &SceneConfig,
) -> PointCloudMesh {
    let mut mesh = reconstruct(
        depth,
        color,
        config.point_cloud_width,
        config.point_cloud_height,
        config,
    );
    mesh.rotate_y(config.rotation_y);
    mesh
}

/// Validating variant of [`build_mesh`]
pub fn try_build_mesh(
    depth: &PixelBuffer,
    color: &PixelBuffer,
    config: &SceneConfig,
) -> Result<PointCloudMesh> {
    let mut mesh = try_reconstruct(
        depth,
        color,
        config.point_cloud_width,
        config.point_cloud_height,
        config,
    )?;
    mesh.rotate_y(config.rotation_y);
    Ok(mesh)
}

/// Build the grid for the configured point cloud size
pub fn build_scene_grid(config: &SceneConfig) -> BoundingGrid {
    build_grid(config.point_cloud_width, config.point_cloud_height, config)
}

/// Validate `config`, then build both mesh and grid
pub fn build_scene(
    depth: &PixelBuffer,
    color: &PixelBuffer,
    config: &SceneConfig,
) -> Result<SceneGeometry> {
    config.validate()?;
    Ok(SceneGeometry {
        mesh: try_build_mesh(depth, color, config)?,
        grid: build_scene_grid(config),
    })
}
