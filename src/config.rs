//! Scene configuration
//!
//! A JSON document with a `camera` array, an `objects` array and an optional
//! `curve` section. Every field is optional and falls back to a documented
//! default, so a partially written scene still loads.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::curve::{ControlPointKind, CurveStrategy, DEFAULT_SAMPLE_RATE};
use crate::error::{LoadError, LoadResult};

/// Top-level scene document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub camera: Vec<CameraConfig>,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub curve: CurveConfig,
}

/// One camera entry; missing vectors are zero
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    pub camera_pos: Vec3,
    pub camera_front: Vec3,
    pub camera_up: Vec3,
    pub light_pos: Vec3,
    pub light_color: Vec3,
}

/// One object entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectConfig {
    pub model_path: String,
    pub texture_path: String,
    pub translation: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub scale: f32,
    /// Object follows the scene curve instead of its static placement
    #[serde(rename = "eMovel")]
    pub movable: bool,
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub q: f32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            model_path: String::new(),
            texture_path: String::new(),
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            movable: false,
            ka: 0.2,
            kd: 0.5,
            ks: 0.5,
            q: 10.0,
        }
    }
}

/// Path followed by movable objects
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurveConfig {
    pub kind: ControlPointKind,
    pub control_points: usize,
    pub scale: f32,
    pub strategy: CurveStrategy,
    pub samples_per_segment: usize,
    /// Path steps per second
    pub fps: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            kind: ControlPointKind::Lemniscate,
            control_points: 20,
            scale: 1.0,
            strategy: CurveStrategy::CatmullRom,
            samples_per_segment: 10,
            fps: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl SceneConfig {
    /// Parse a scene document from JSON text
    pub fn from_json(json: &str, path: &Path) -> LoadResult<Self> {
        serde_json::from_str(json).map_err(|source| LoadError::MalformedConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a scene document from raw file bytes
    ///
    /// Invalid UTF-8 is reported as [`LoadError::MalformedConfig`].
    pub fn from_slice(bytes: &[u8], path: &Path) -> LoadResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| LoadError::MalformedConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a scene configuration from a JSON file
pub fn load_scene_config(path: &Path) -> LoadResult<SceneConfig> {
    let content = std::fs::read(path).map_err(|source| {
        log::error!("Failed to open scene config {}: {source}", path.display());
        LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let config = SceneConfig::from_slice(&content, path)?;
    log::info!(
        "Loaded scene config {} ({} cameras, {} objects)",
        path.display(),
        config.camera.len(),
        config.objects.len()
    );
    Ok(config)
}
