//! Scene Paths - mesh loading, parametric curves and scene state for a small 3D viewer
//!
//! The crate stops at the CPU side of rendering:
//! - **resources**: reduced OBJ loader producing interleaved vertex buffers, textures, Phong materials
//! - **curve**: Bézier, segmented Bézier and Catmull-Rom path generation plus frame-paced sampling
//! - **config**: JSON scene description
//! - **scene**: object placements, cameras, light and keyboard input as pure transitions
//!
//! ```no_run
//! use scene_paths::{apply_input_event, InputEvent, KeyCode, MeshLoadOptions, Scene};
//!
//! let scene = Scene::load("scene.json".as_ref(), &MeshLoadOptions::default())?;
//! let mut scene = apply_input_event(scene, InputEvent::press(KeyCode::Space));
//! scene.update(1.0 / 60.0);
//! # Ok::<(), scene_paths::LoadError>(())
//! ```

pub mod config;
pub mod curve;
pub mod error;
pub mod resources;
pub mod scene;

pub use config::{load_scene_config, SceneConfig};
pub use curve::{
    build_control_points, generate_curve, sample_animation_position, AnimationClock,
    ControlPointKind, Curve, CurveStrategy,
};
pub use error::{LoadError, LoadResult};
pub use resources::{load_mesh, MeshBuffer, MeshLoadOptions, TextureData, VertexLayout};
pub use scene::{
    apply_input_event, InputEvent, KeyAction, KeyCode, ObjectId, Placement, Scene, SceneObject,
};
