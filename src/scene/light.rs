//! Scene light

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::config::CameraConfig;

/// Single point light used by the Phong shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-2.0, 10.0, 3.0),
            color: Vec3::ONE,
        }
    }
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.light_pos, config.light_color)
    }

    /// Convert to GPU data format
    pub fn to_gpu_data(&self) -> GpuLightData {
        GpuLightData {
            position: self.position.extend(1.0),
            color: self.color.extend(1.0),
        }
    }
}

/// GPU-friendly light data structure
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuLightData {
    /// xyz = position, w = 1
    pub position: Vec4,
    /// xyz = color, w = 1
    pub color: Vec4,
}
