//! Texture loading
//!
//! Decodes image files into RGBA8 pixel data. Uploading the pixels is left to
//! the renderer.

use image::{DynamicImage, GenericImageView};
use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// Decoded RGBA8 texture data
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub name: String,
}

impl TextureData {
    /// Load texture from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let bytes = std::fs::read(path).map_err(|source| {
            log::error!("Failed to open texture {}: {source}", path.display());
            LoadError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let img = image::load_from_memory(&bytes).map_err(|e| LoadError::Texture {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let texture = Self::from_image(img, &name);
        log::info!(
            "Loaded texture {}: {}x{}",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    fn from_image(img: DynamicImage, name: &str) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.to_rgba8().into_raw(),
            name: name.to_string(),
        }
    }

    /// Create a solid color texture
    pub fn solid_color(color: [u8; 4], name: &str) -> Self {
        Self {
            width: 1,
            height: 1,
            data: color.to_vec(),
            name: name.to_string(),
        }
    }

    /// Placeholder used when an object has no texture
    pub fn white() -> Self {
        Self::solid_color([255, 255, 255, 255], "white")
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}
