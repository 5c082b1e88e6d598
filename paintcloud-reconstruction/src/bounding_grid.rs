//! Bounding grid generation
//!
//! The grid frames the reconstructed volume with translucent lines: three
//! cross-bars (bottom, top, left edge) at every depth step, plus four rails
//! along the depth axis at the corners of the image rectangle.

use paintcloud_core::{
    BoundingGrid, GridLine, LineMaterial, Point3f, SceneConfig, Transform3D, Vector3f,
};

/// Material shared by every line of the grid
pub fn line_material(config: &SceneConfig) -> LineMaterial {
    LineMaterial {
        color: config.line_color,
        opacity: config.line_opacity,
        transparent: true,
    }
}

/// Depth values (before `z_offset`) that receive cross-bars
pub fn cross_bar_depths(config: &SceneConfig) -> impl Iterator<Item = u32> {
    let interval = config.grid_interval.max(1) as usize;
    (config.grid_start..=config.max_z_depth).step_by(interval)
}

/// Number of lines [`build_grid`] produces for `config`
pub fn expected_line_count(config: &SceneConfig) -> usize {
    config.grid_steps() * 3 + 4
}

/// Build the reference grid around a `width x height` point cloud.
///
/// Line centers are translated by `config.translate` and then scaled by
/// `config.scale`; the grid's rotation is left to the sink through
/// [`BoundingGrid::transform`].
pub fn build_grid(width: usize, height: usize, config: &SceneConfig) -> BoundingGrid {
    let placement =
        Transform3D::scaling(&config.scale) * Transform3D::translation(&config.translate);
    let mut lines = Vec::with_capacity(expected_line_count(config));
    let mut push = |x: f32, y: f32, z: f32, size: Vector3f| {
        let center = placement.transform_point(&Point3f::new(x, y, z));
        lines.push(GridLine::new(center, size));
    };

    let w = width as f32;
    let h = height as f32;
    let t = config.line_thickness;

    // Cross-bars; the right edge intentionally gets none
    for z in cross_bar_depths(config) {
        let z = z as f32 + config.z_offset;
        push(w / 2.0, 0.0, z, Vector3f::new(w, t, t));
        push(w / 2.0, h, z, Vector3f::new(w, t, t));
        push(0.0, h / 2.0, z, Vector3f::new(t, h, t));
    }

    // Rails along the depth axis
    let rail = Vector3f::new(t, t, config.line_length_z);
    for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        push(x, y, config.line_length_z, rail);
    }

    tracing::debug!(width, height, lines = lines.len(), "Built bounding grid");

    BoundingGrid {
        lines,
        material: line_material(config),
        rotation_y: config.rotation_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_line_count() {
        let config = SceneConfig::default();
        let grid = build_grid(512, 512, &config);
        assert_eq!(grid.len(), 82);
        assert_eq!(expected_line_count(&config), 82);
        assert_eq!(cross_bar_depths(&config).count(), 26);
        assert_eq!(cross_bar_depths(&config).last(), Some(255));
    }

    #[test]
    fn test_cross_bar_layout() {
        let config = SceneConfig::default();
        let grid = build_grid(200, 100, &config);
        let [bottom, top, left] = [grid.lines[0], grid.lines[1], grid.lines[2]];

        // z = 5 + 125 - 250
        assert_relative_eq!(bottom.center, Point3f::new(-50.0, -100.0, -120.0));
        assert_relative_eq!(top.center, Point3f::new(-50.0, 0.0, -120.0));
        assert_relative_eq!(left.center, Point3f::new(-150.0, -50.0, -120.0));

        assert_eq!(bottom.size, Vector3f::new(200.0, 1.0, 1.0));
        assert_eq!(top.size, Vector3f::new(200.0, 1.0, 1.0));
        assert_eq!(left.size, Vector3f::new(1.0, 100.0, 1.0));

        // Second step is one interval deeper
        assert_relative_eq!(grid.lines[3].center.z, -110.0);
    }

    #[test]
    fn test_no_right_edge_cross_bars() {
        let config = SceneConfig::default();
        let grid = build_grid(200, 100, &config);
        let right_x = 200.0 + config.translate.x;

        let right_verticals = grid
            .iter()
            .filter(|line| line.major_axis() == 1)
            .filter(|line| (line.center.x - right_x).abs() < 1e-3)
            .count();
        assert_eq!(right_verticals, 0);
    }

    #[test]
    fn test_corner_rails() {
        let config = SceneConfig::default();
        let grid = build_grid(200, 100, &config);
        let rails = &grid.lines[grid.len() - 4..];

        let expected = [(0.0, 0.0), (200.0, 0.0), (200.0, 100.0), (0.0, 100.0)];
        for (rail, (x, y)) in rails.iter().zip(expected) {
            assert_relative_eq!(
                rail.center,
                Point3f::new(x - 150.0, y - 100.0, 256.0 - 250.0)
            );
            assert_eq!(rail.size, Vector3f::new(1.0, 1.0, 256.0));
            assert_eq!(rail.major_axis(), 2);
        }
    }

    #[test]
    fn test_shared_material_and_rotation() {
        let config = SceneConfig {
            rotation_y: 0.5,
            ..Default::default()
        };
        let grid = build_grid(64, 64, &config);
        assert_eq!(grid.material.color, 0x555555);
        assert_relative_eq!(grid.material.opacity, 0.06);
        assert!(grid.material.transparent);
        assert_eq!(grid.rotation_y, 0.5);
        assert!(!grid.transform().is_identity(1e-3));
    }

    #[test]
    fn test_translate_then_scale() {
        let config = SceneConfig {
            scale: paintcloud_core::Axes::new(2.0, 2.0, 2.0),
            ..Default::default()
        };
        let grid = build_grid(100, 100, &config);
        let rail = grid.lines[grid.len() - 4];
        assert_relative_eq!(rail.center, Point3f::new(-300.0, -200.0, 12.0));
    }

    #[test]
    fn test_grid_start_past_max_depth() {
        let config = SceneConfig {
            grid_start: 256,
            ..Default::default()
        };
        let grid = build_grid(10, 10, &config);
        assert_eq!(grid.len(), 4);
        assert_eq!(expected_line_count(&config), 4);
    }
}
