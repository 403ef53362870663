//! Object placement

use glam::{Mat4, Vec3};

/// Translation, per-axis rotation and scale of one scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Driven by the scene curve instead of keyboard input
    pub movable: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            movable: false,
        }
    }
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    /// Model matrix: translate, scale, then rotate about X, Y and Z
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_scale(self.scale)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }

    /// Get the normal matrix (inverse transpose of model matrix)
    pub fn normal_matrix(&self) -> Mat4 {
        self.matrix().inverse().transpose()
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.translation += offset;
    }

    pub fn rotate(&mut self, euler: Vec3) {
        self.rotation += euler;
    }

    /// Add `amount` to every scale axis
    pub fn grow(&mut self, amount: f32) {
        self.scale += Vec3::splat(amount);
    }
}
