//! Depth map to point cloud mesh reconstruction
//!
//! Every sampled pixel becomes one small, flat triangle whose position comes
//! from the pixel coordinates and the depth map intensity, and whose color
//! comes from the painting. Neighbouring pixels share no vertices, so the
//! result renders as a dense cloud of thick points rather than a surface.

use paintcloud_core::{
    color_from_rgb8, Dimensions, Error, PixelBuffer, Point3f, PointCloudMesh, Result, SceneConfig,
    CHANNELS,
};

/// Corner offsets of the triangle emitted for each pixel
pub const TRIANGLE_OFFSETS: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// First column sampled in every row; column 0 is never read
pub const FIRST_SAMPLED_COLUMN: usize = 1;

/// Number of vertices [`reconstruct`] produces for `width x height`
pub fn expected_vertex_count(width: usize, height: usize) -> usize {
    width * height.saturating_sub(FIRST_SAMPLED_COLUMN) * 3
}

/// Channel offset shared by both buffers for row `i`, column `j`
#[inline]
pub fn channel_index(i: usize, j: usize, height: usize) -> usize {
    (i * height + j) * CHANNELS
}

/// Scene-space anchor of the triangle for row `i`, column `j` at raw `depth`
#[inline]
pub fn base_point(i: usize, j: usize, depth: u8, height: usize, config: &SceneConfig) -> Point3f {
    let x = j as f32;
    let y = height as f32 - i as f32;
    let z = depth as f32;
    Point3f::new(
        x * config.scale.x + config.translate.x,
        y * config.scale.y + config.translate.y,
        z * config.scale.z + config.translate.z,
    )
}

/// Build the per-pixel triangle soup from a depth map and a painting.
///
/// Rows `i` run over `0..width` and columns `j` over `1..height`, both
/// buffers being addressed at `(i * height + j) * 4`. The depth map's red
/// channel is used as raw z; the painting's RGB becomes a flat color for
/// the triangle.
///
/// No validation is performed: channels read past the end of a short
/// buffer count as 0. Use [`try_reconstruct`] to reject such input.
pub fn reconstruct(
    depth: &PixelBuffer,
    color: &PixelBuffer,
    width: usize,
    height: usize,
    config: &SceneConfig,
) -> PointCloudMesh {
    let mut mesh = PointCloudMesh::with_capacity(expected_vertex_count(width, height));

    for i in 0..width {
        for j in FIRST_SAMPLED_COLUMN..height {
            let idx = channel_index(i, j, height);

            let base = base_point(i, j, depth.channel(idx), height, config);
            let corners = TRIANGLE_OFFSETS
                .map(|[dx, dy, dz]| Point3f::new(base.x + dx, base.y + dy, base.z + dz));

            let rgb = color_from_rgb8(
                color.channel(idx),
                color.channel(idx + 1),
                color.channel(idx + 2),
            );
            mesh.push_triangle(corners, rgb);
        }
    }

    tracing::debug!(
        width,
        height,
        vertices = mesh.vertex_count(),
        "Reconstructed point cloud mesh"
    );

    mesh
}

/// Like [`reconstruct`], but fails when either buffer is too short to be
/// addressed at every pixel of `width x height`.
pub fn try_reconstruct(
    depth: &PixelBuffer,
    color: &PixelBuffer,
    width: usize,
    height: usize,
    config: &SceneConfig,
) -> Result<PointCloudMesh> {
    let dims = Dimensions::new(width, height);
    for (name, buffer) in [("depth", depth), ("color", color)] {
        if !buffer.covers(dims) {
            return Err(Error::InvalidInput(format!(
                "{} buffer holds {} channel values, {}x{} needs {}",
                name,
                buffer.len(),
                width,
                height,
                dims.required_len()
            )));
        }
    }

    Ok(reconstruct(depth, color, width, height, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gradient_depth(width: usize, height: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for p in 0..width * height {
            let v = (p * 7 % 256) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
        PixelBuffer::from_raw(width, height, data)
    }

    #[test]
    fn test_vertex_count() {
        let config = SceneConfig::default();
        let depth = gradient_depth(4, 3);
        let color = PixelBuffer::filled(4, 3, [10, 20, 30, 255]);

        let mesh = reconstruct(&depth, &color, 4, 3, &config);
        assert_eq!(mesh.vertex_count(), 4 * 2 * 3);
        assert_eq!(mesh.colors.len(), mesh.vertex_count());
        assert_eq!(expected_vertex_count(4, 3), 24);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let config = SceneConfig::default();
        let buffer = PixelBuffer::filled(3, 1, [0, 0, 0, 255]);

        assert!(reconstruct(&buffer, &buffer, 3, 1, &config).is_empty());
        assert!(reconstruct(&buffer, &buffer, 0, 1, &config).is_empty());
        assert!(reconstruct(&buffer, &buffer, 3, 0, &config).is_empty());
        assert_eq!(expected_vertex_count(3, 0), 0);
    }

    #[test]
    fn test_first_sample_position_and_color() {
        let config = SceneConfig::default();
        let (width, height) = (2, 3);
        let depth = PixelBuffer::filled(width, height, [0, 0, 0, 255]);
        let color = PixelBuffer::filled(width, height, [255, 0, 0, 255]);

        let mesh = reconstruct(&depth, &color, width, height, &config);

        // i = 0, j = 1 -> x = 1, y = height, z = 0
        let base = Point3f::new(
            1.0 + config.translate.x,
            height as f32 + config.translate.y,
            config.translate.z,
        );
        assert_eq!(base_point(0, 1, 0, height, &config), base);
        assert_relative_eq!(
            mesh.positions[0],
            Point3f::new(base.x - 1.0, base.y - 1.0, base.z - 1.0)
        );
        assert_relative_eq!(
            mesh.positions[1],
            Point3f::new(base.x + 1.0, base.y, base.z + 1.0)
        );
        assert_relative_eq!(
            mesh.positions[2],
            Point3f::new(base.x + 1.0, base.y + 1.0, base.z + 1.0)
        );
        assert_eq!(&mesh.colors[..3], &[[1.0, 0.0, 0.0]; 3]);
    }

    #[test]
    fn test_scale_is_applied_before_translation() {
        let config = SceneConfig {
            scale: paintcloud_core::Axes::new(2.0, 3.0, 0.5),
            ..Default::default()
        };
        let base = base_point(1, 4, 100, 10, &config);
        assert_relative_eq!(base.x, 4.0 * 2.0 - 150.0);
        assert_relative_eq!(base.y, 9.0 * 3.0 - 100.0);
        assert_relative_eq!(base.z, 100.0 * 0.5 - 250.0);
    }

    #[test]
    fn test_depth_reads_red_channel_only() {
        let config = SceneConfig::default();
        let color = PixelBuffer::filled(1, 2, [0, 0, 0, 255]);
        let depth = PixelBuffer::from_raw(1, 2, vec![0, 0, 0, 0, 40, 200, 200, 200]);

        let mesh = reconstruct(&depth, &color, 1, 2, &config);
        assert_eq!(mesh.vertex_count(), 3);
        assert_relative_eq!(mesh.positions[0].z, 40.0 + config.translate.z - 1.0);
    }

    #[test]
    fn test_short_buffers_read_as_zero() {
        let config = SceneConfig::default();
        let depth = PixelBuffer::from_raw(2, 2, vec![]);
        let color = PixelBuffer::from_raw(2, 2, vec![]);

        let mesh = reconstruct(&depth, &color, 2, 2, &config);
        assert_eq!(mesh.vertex_count(), 6);
        assert!(mesh.colors.iter().all(|c| *c == [0.0, 0.0, 0.0]));
        assert_relative_eq!(mesh.positions[0].z, config.translate.z - 1.0);
    }

    #[test]
    fn test_try_reconstruct_rejects_short_buffers() {
        let config = SceneConfig::default();
        let full = PixelBuffer::filled(3, 3, [1, 2, 3, 255]);
        let short = PixelBuffer::from_raw(3, 3, vec![0; 3 * 3 * CHANNELS - 1]);

        assert!(try_reconstruct(&full, &full, 3, 3, &config).is_ok());
        assert!(matches!(
            try_reconstruct(&short, &full, 3, 3, &config),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            try_reconstruct(&full, &short, 3, 3, &config),
            Err(Error::InvalidInput(_))
        ));
        assert!(try_reconstruct(&full, &full, 4, 3, &config).is_err());
    }
}
