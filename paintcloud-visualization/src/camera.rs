//! Camera utilities for viewing the reconstructed painting

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Height of the film frame the focal length refers to, in millimetres
pub const FILM_GAUGE: f32 = 35.0;

/// Smallest angle kept between the view direction and the vertical axis
const POLE_EPSILON: f32 = 1e-4;

/// Cross products shorter than this count as parallel axes
const AXIS_EPSILON: f32 = 1e-6;

/// A perspective camera looking at a target point
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Height of the film frame for the current aspect ratio
    pub fn film_height(&self) -> f32 {
        FILM_GAUGE / self.aspect_ratio.max(1.0)
    }

    /// Set the field of view from a lens focal length in millimetres
    pub fn set_focal_length(&mut self, focal_length: f32) {
        let slope = 0.5 * self.film_height() / focal_length;
        self.fov = 2.0 * slope.atan();
    }

    /// Lens focal length in millimetres matching the current field of view
    pub fn focal_length(&self) -> f32 {
        0.5 * self.film_height() / (self.fov * 0.5).tan()
    }

    /// Update the aspect ratio, keeping the focal length
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let focal_length = self.focal_length();
        self.aspect_ratio = aspect_ratio;
        self.set_focal_length(focal_length);
    }

    /// Distance between camera and target
    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }

    /// Rotate the camera around the target.
    ///
    /// `horizontal` turns about the vertical axis, `vertical` tilts towards
    /// the poles; both in radians. The tilt stops just short of the poles.
    pub fn orbit(&mut self, horizontal: f32, vertical: f32) {
        let offset = self.position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let theta = offset.x.atan2(offset.z) - horizontal;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() - vertical)
            .clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON);

        let offset = Vector3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        self.position = self.target + offset;
    }

    /// Scale the camera's distance to the target by `factor`
    pub fn dolly(&mut self, factor: f32) {
        let offset = self.position - self.target;
        self.position = self.target + offset * factor;
    }

    /// Move camera and target together across the view plane
    ///
    /// Looking straight along `up`, the world x axis serves as "right".
    pub fn pan(&mut self, right: f32, up: f32) {
        let Some(forward) = (self.target - self.position).try_normalize(f32::EPSILON) else {
            return;
        };
        let right_axis = forward
            .cross(&self.up)
            .try_normalize(AXIS_EPSILON)
            .unwrap_or_else(Vector3::x);
        let up_axis = right_axis.cross(&forward);

        let shift = right_axis * right + up_axis * up;
        self.position += shift;
        self.target += shift;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_4,
            16.0 / 9.0,
            0.1,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_focal_length_round_trip() {
        let mut camera = Camera {
            aspect_ratio: 1.0,
            ..Default::default()
        };
        camera.set_focal_length(20.0);

        // 2 * atan(17.5 / 20)
        assert_relative_eq!(camera.fov, 2.0 * (0.875f32).atan(), epsilon = 1e-6);
        assert_relative_eq!(camera.focal_length(), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_wide_aspect_shrinks_film_height() {
        let mut camera = Camera {
            aspect_ratio: 2.0,
            ..Default::default()
        };
        camera.set_focal_length(20.0);
        assert_relative_eq!(camera.film_height(), 17.5);
        assert_relative_eq!(camera.fov, 2.0 * (0.4375f32).atan(), epsilon = 1e-6);
    }

    #[test]
    fn test_aspect_change_keeps_focal_length() {
        let mut camera = Camera::default();
        camera.set_focal_length(35.0);
        camera.set_aspect_ratio(0.5);
        assert_relative_eq!(camera.focal_length(), 35.0, epsilon = 1e-3);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::default();
        camera.position = Point3::new(100.0, 100.0, 400.0);
        let before = camera.distance();

        camera.orbit(0.7, -0.3);
        assert_relative_eq!(camera.distance(), before, epsilon = 1e-2);
        assert_eq!(camera.target, Point3::origin());
    }

    #[test]
    fn test_orbit_quarter_turn() {
        let mut camera = Camera::default();
        camera.orbit(-std::f32::consts::FRAC_PI_2, 0.0);
        assert_relative_eq!(camera.position, Point3::new(5.0, 0.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_orbit_stops_at_pole() {
        let mut camera = Camera::default();
        camera.orbit(0.0, 10.0);
        assert!(camera.position.y > 0.0);
        assert!(camera.position.z > 0.0);
        assert_relative_eq!(camera.position.x, 0.0);
    }

    #[test]
    fn test_view_projection_centers_target() {
        let camera = Camera {
            position: Point3::new(100.0, 100.0, 400.0),
            far: 2000.0,
            ..Default::default()
        };
        let origin = camera.view_projection_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(origin.y, 0.0, epsilon = 1e-5);
        assert!(origin.z > -1.0 && origin.z < 1.0);

        // The target sits straight ahead in view space
        let view = camera.view_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(view.z, -camera.distance(), epsilon = 1e-3);
    }

    #[test]
    fn test_pan_looking_down_the_up_axis() {
        let mut camera = Camera {
            position: Point3::new(0.0, 400.0, 0.0),
            ..Default::default()
        };
        camera.pan(1.0, 0.0);

        assert!(camera.position.iter().all(|c| c.is_finite()));
        assert!(camera.target.iter().all(|c| c.is_finite()));
        assert_relative_eq!(camera.target, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(camera.distance(), 400.0, epsilon = 1e-3);
    }

    #[test]
    fn test_dolly_and_pan() {
        let mut camera = Camera::default();
        camera.dolly(0.5);
        assert_relative_eq!(camera.distance(), 2.5);

        camera.pan(1.0, 2.0);
        assert_relative_eq!(camera.target, Point3::new(1.0, 2.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(camera.distance(), 2.5, epsilon = 1e-6);
    }
}
