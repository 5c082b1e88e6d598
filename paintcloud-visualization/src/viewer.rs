//! Point cloud viewer: camera, controls and geometry lifecycle

use crate::camera::Camera;
use crate::controls::{ControlInput, OrbitControls};
use nalgebra::{Point3, Vector3};
use paintcloud_core::{GeometrySink, MeshMaterial, PixelSource, Result, SceneConfig};
use paintcloud_reconstruction::{build_mesh, build_scene_grid};

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 2000.0;

/// Shows a reconstructed painting in any [`GeometrySink`].
///
/// The bounding grid is installed once, when the viewer is created. Each
/// call to [`PointCloudViewer::load_point_cloud`] replaces the previous mesh
/// wholesale. Redraws are on demand: [`PointCloudViewer::frame`] reports
/// whether anything changed since the last frame.
pub struct PointCloudViewer<S: GeometrySink> {
    sink: S,
    camera: Camera,
    controls: OrbitControls,
    config: SceneConfig,
    needs_render: bool,
}

impl<S: GeometrySink> PointCloudViewer<S> {
    /// Create a viewer for a `width x height` viewport
    pub fn new(
        mut sink: S,
        width: u32,
        height: u32,
        enable_rotate: bool,
        config: SceneConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut camera = Camera::new(
            config.camera_position(),
            Point3::origin(),
            Vector3::y(),
            std::f32::consts::FRAC_PI_4,
            aspect_ratio(width, height),
            NEAR_PLANE,
            FAR_PLANE,
        );
        camera.set_focal_length(config.camera_focal_length);

        let grid = build_scene_grid(&config);
        sink.add_grid(&grid);

        tracing::info!(
            width,
            height,
            grid_lines = grid.len(),
            fov = camera.fov.to_degrees(),
            "Point cloud viewer ready"
        );

        Ok(Self {
            sink,
            camera,
            controls: OrbitControls::new(enable_rotate, height as f32),
            config,
            needs_render: true,
        })
    }

    /// Reconstruct the painting from its depth map and show it.
    ///
    /// Reads the configured point cloud size from the top-left corner of
    /// both sources. The previous mesh is removed before the new one is
    /// installed.
    pub fn load_point_cloud(
        &mut self,
        painting: &dyn PixelSource,
        depth_map: &dyn PixelSource,
    ) -> Result<()> {
        let (width, height) = (self.config.point_cloud_width, self.config.point_cloud_height);
        let depth = depth_map.pixel_buffer(0, 0, width, height)?;
        let color = painting.pixel_buffer(0, 0, width, height)?;

        let mesh = build_mesh(&depth, &color, &self.config);

        self.sink.clear_meshes();
        self.sink.add_mesh(&mesh, &MeshMaterial::default());
        self.needs_render = true;

        tracing::info!(
            width,
            height,
            vertices = mesh.vertex_count(),
            "Loaded point cloud"
        );
        Ok(())
    }

    /// Feed one piece of user input to the orbit controls
    pub fn handle_input(&mut self, input: ControlInput) -> bool {
        let moved = self.controls.apply(&mut self.camera, input);
        self.needs_render |= moved;
        moved
    }

    /// Adapt the camera to a new viewport size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect_ratio(aspect_ratio(width, height));
        self.controls.viewport_height = height.max(1) as f32;
        self.needs_render = true;
    }

    /// One tick of the animation loop; true when a redraw is due
    pub fn frame(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
