//! Load error types
//!
//! Every failure is terminal for the single load that produced it. The caller
//! decides whether to continue with a partial scene.

use std::path::PathBuf;
use thiserror::Error;

/// Error produced while loading meshes, textures, or scene configuration
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed reference in {} at line {line}: {text:?}", path.display())]
    MalformedReference {
        path: PathBuf,
        line: usize,
        text: String,
    },
    #[error("Malformed line in {} at line {line}: {text:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
    },
    #[error("Failed to parse scene config {}: {source}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode texture {}: {message}", path.display())]
    Texture { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::FileNotFound { path, .. }
            | LoadError::MalformedReference { path, .. }
            | LoadError::MalformedLine { path, .. }
            | LoadError::MalformedConfig { path, .. }
            | LoadError::Texture { path, .. } => path,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
