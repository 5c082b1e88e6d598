//! Orbit-style camera controls

use crate::camera::Camera;

/// One piece of user input, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    /// Drag with the rotate button held
    Rotate { dx: f32, dy: f32 },
    /// Wheel or pinch; positive values move away from the target
    Zoom { delta: f32 },
    /// Drag with the pan button held
    Pan { dx: f32, dy: f32 },
}

/// Rotate, zoom and pan a camera around its target
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Viewport height in pixels; a drag across it turns a full circle
    pub viewport_height: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            viewport_height: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn new(enable_rotate: bool, viewport_height: f32) -> Self {
        Self {
            enable_rotate,
            viewport_height: viewport_height.max(1.0),
            ..Default::default()
        }
    }

    /// Apply `input` to `camera`; returns whether the camera moved
    pub fn apply(&self, camera: &mut Camera, input: ControlInput) -> bool {
        match input {
            ControlInput::Rotate { dx, dy } => self.rotate(camera, dx, dy),
            ControlInput::Zoom { delta } => self.zoom(camera, delta),
            ControlInput::Pan { dx, dy } => self.pan(camera, dx, dy),
        }
    }

    fn rotate(&self, camera: &mut Camera, dx: f32, dy: f32) -> bool {
        if !self.enable_rotate || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        let per_pixel = std::f32::consts::TAU / self.viewport_height * self.rotate_speed;
        camera.orbit(dx * per_pixel, dy * per_pixel);
        true
    }

    fn zoom(&self, camera: &mut Camera, delta: f32) -> bool {
        if !self.enable_zoom || delta == 0.0 {
            return false;
        }
        let distance = camera.distance();
        if distance <= f32::EPSILON {
            return false;
        }

        let scale = 0.95f32.powf(self.zoom_speed);
        let factor = if delta > 0.0 { 1.0 / scale } else { scale };
        let target_distance = (distance * factor).clamp(self.min_distance, self.max_distance);
        if (target_distance - distance).abs() <= distance * 1e-6 {
            return false;
        }
        camera.dolly(target_distance / distance);
        true
    }

    fn pan(&self, camera: &mut Camera, dx: f32, dy: f32) -> bool {
        if !self.enable_pan || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        // Pixels to world units at the target's depth
        let world_per_pixel =
            2.0 * camera.distance() * (camera.fov * 0.5).tan() / self.viewport_height;
        let scale = world_per_pixel * self.pan_speed;
        camera.pan(-dx * scale, dy * scale);
        true
    }
}
