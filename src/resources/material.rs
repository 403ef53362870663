//! Phong surface coefficients

use bytemuck::{Pod, Zeroable};

/// Phong material: ambient, diffuse and specular weights plus shininess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ka: 0.2,
            kd: 0.5,
            ks: 0.5,
            shininess: 10.0,
        }
    }
}

impl PhongMaterial {
    pub fn new(ka: f32, kd: f32, ks: f32, shininess: f32) -> Self {
        Self { ka, kd, ks, shininess }
    }

    pub fn with_ambient(mut self, ka: f32) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_diffuse(mut self, kd: f32) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_specular(mut self, ks: f32, shininess: f32) -> Self {
        self.ks = ks;
        self.shininess = shininess;
        self
    }

    /// Create a uniform data struct for GPU
    pub fn uniform_data(&self) -> MaterialUniformData {
        MaterialUniformData {
            coefficients: [self.ka, self.kd, self.ks, self.shininess],
        }
    }
}

/// Material uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MaterialUniformData {
    pub coefficients: [f32; 4], // x=ka, y=kd, z=ks, w=shininess
}
