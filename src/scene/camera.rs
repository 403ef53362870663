//! Camera and projection

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::perspective(39.6, 1.0, 0.1, 100.0)
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }
}

/// First-person camera looking along `front`
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            projection: Projection::default(),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, front: Vec3, up: Vec3) -> Self {
        Self {
            position,
            front,
            up,
            projection: Projection::default(),
        }
    }

    /// Build from a config entry; zero vectors are taken as given
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.camera_pos, config.camera_front, config.camera_up)
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector to the camera's right, or zero when `front` and `up` are degenerate
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize_or_zero()
    }

    /// Move along `front` (negative moves back)
    pub fn move_forward(&mut self, amount: f32) {
        self.position += self.front * amount;
    }

    /// Strafe along [`Camera::right`] (negative moves left)
    pub fn move_right(&mut self, amount: f32) {
        self.position += self.right() * amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_looks_down_negative_z() {
        let camera = Camera::default();
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
    }

    #[test]
    fn test_movement() {
        let mut camera = Camera::default();
        camera.move_forward(0.5);
        assert!((camera.position - Vec3::new(0.0, 0.0, 9.5)).length() < 1e-6);
        camera.move_right(-1.0);
        assert!((camera.position - Vec3::new(-1.0, 0.0, 9.5)).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_right() {
        let camera = Camera::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(camera.right(), Vec3::ZERO);
    }

    #[test]
    fn test_projection_aspect() {
        let mut projection = Projection::default();
        assert!((projection.fov_y - 39.6f32.to_radians()).abs() < 1e-6);
        projection.set_aspect(1920.0, 1080.0);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert!(projection.matrix().is_finite());
    }
}
