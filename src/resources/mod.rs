//! Resource loading
//!
//! Handles loading of meshes and textures, and the surface parameters that
//! travel with them.

mod material;
mod mesh;
mod obj;
mod texture;

pub use material::*;
pub use mesh::*;
pub use obj::*;
pub use texture::*;
