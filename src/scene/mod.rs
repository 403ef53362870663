//! Scene management
//!
//! A [`Scene`] owns every object placement, the cameras, the light and the
//! curve that movable objects follow. Nothing here is global: the render loop
//! holds the scene and passes it to whoever needs it.

mod camera;
mod input;
mod light;
mod transform;

pub use camera::*;
pub use input::*;
pub use light::*;
pub use transform::*;

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::config::{load_scene_config, CurveConfig, ObjectConfig, SceneConfig};
use crate::curve::{build_scaled_control_points, valid_rate, AnimationClock, Curve};
use crate::error::{LoadError, LoadResult};
use crate::resources::{load_mesh, MeshBuffer, MeshLoadOptions, PhongMaterial, TextureData};

/// Stable key of an object, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub usize);

/// An object in the scene and everything loaded for it
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub placement: Placement,
    /// `None` when no mesh was given or it failed to load; such objects are not drawn
    pub mesh: Option<MeshBuffer>,
    pub texture: Option<TextureData>,
    pub material: PhongMaterial,
    /// Path position of a movable object
    pub clock: Option<AnimationClock>,
}

impl SceneObject {
    pub fn new(name: &str, placement: Placement) -> Self {
        Self {
            name: name.to_string(),
            placement,
            mesh: None,
            texture: None,
            material: PhongMaterial::default(),
            clock: None,
        }
    }

    pub fn with_mesh(mut self, mesh: MeshBuffer) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_material(mut self, material: PhongMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn is_renderable(&self) -> bool {
        self.mesh.as_ref().is_some_and(|mesh| !mesh.is_empty())
    }
}

/// The scene containing all objects, cameras and the animation path
///
/// There is always at least one camera and the active index stays in range.
#[derive(Debug)]
pub struct Scene {
    cameras: Vec<Camera>,
    active_camera: usize,
    pub light: PointLight,
    pub objects: BTreeMap<ObjectId, SceneObject>,
    pub selected: Option<ObjectId>,
    pub curve: Curve,
    /// Samples per second for newly added movable objects
    pub curve_rate: f32,
    pub quit_requested: bool,
    /// Failures collected while assembling the scene
    pub load_errors: Vec<LoadError>,
    next_id: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_curve(&CurveConfig::default())
    }

    fn with_curve(config: &CurveConfig) -> Self {
        let control_points =
            build_scaled_control_points(config.kind, config.control_points, config.scale);
        Self {
            cameras: vec![Camera::default()],
            active_camera: 0,
            light: PointLight::default(),
            objects: BTreeMap::new(),
            selected: None,
            curve: Curve::new(config.strategy, control_points, config.samples_per_segment),
            curve_rate: valid_rate(config.fps),
            quit_requested: false,
            load_errors: Vec::new(),
            next_id: 0,
        }
    }

    /// Read a config file and assemble the scene relative to its directory
    pub fn load(path: &Path, options: &MeshLoadOptions) -> LoadResult<Self> {
        let config = load_scene_config(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_config(&config, base_dir, options))
    }

    /// Assemble a scene from configuration
    ///
    /// Relative asset paths are resolved against `base_dir`. Mesh and texture
    /// failures are logged and kept in [`Scene::load_errors`]; the object stays
    /// in the scene without the failed resource.
    pub fn from_config(config: &SceneConfig, base_dir: &Path, options: &MeshLoadOptions) -> Self {
        let mut scene = Self::with_curve(&config.curve);

        if let Some(first) = config.camera.first() {
            scene.set_cameras(config.camera.iter().map(Camera::from_config).collect());
            scene.light = PointLight::from_config(first);
        }

        for object_config in &config.objects {
            let object = scene.build_object(object_config, base_dir, options);
            scene.add_object(object);
        }

        log::info!(
            "Scene ready: {} objects ({} renderable), {} curve points",
            scene.objects.len(),
            scene.renderable_objects().count(),
            scene.curve.points().len()
        );
        scene
    }

    fn build_object(
        &mut self,
        config: &ObjectConfig,
        base_dir: &Path,
        options: &MeshLoadOptions,
    ) -> SceneObject {
        let name = Path::new(&config.model_path)
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("object");

        let placement = Placement::from_translation(config.translation)
            .with_rotation(config.rotation)
            .with_uniform_scale(config.scale)
            .with_movable(config.movable);
        let material = PhongMaterial::new(config.ka, config.kd, config.ks, config.q);
        let mut object = SceneObject::new(name, placement).with_material(material);

        if config.model_path.is_empty() {
            log::warn!("Object {name:?} has no modelPath; it will not be drawn");
        } else {
            match load_mesh(resolve_path(base_dir, &config.model_path), options) {
                Ok(mesh) => object.mesh = Some(mesh),
                Err(e) => {
                    log::warn!("Skipping mesh for {name:?}: {e}");
                    self.load_errors.push(e);
                }
            }
        }

        if !config.texture_path.is_empty() {
            match TextureData::from_file(resolve_path(base_dir, &config.texture_path)) {
                Ok(texture) => object.texture = Some(texture),
                Err(e) => {
                    log::warn!("Skipping texture for {name:?}: {e}");
                    self.load_errors.push(e);
                }
            }
        }

        object
    }

    /// Add an object; the first object added becomes the selection
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        if object.placement.movable && object.clock.is_none() {
            object.clock = Some(AnimationClock::new(self.curve_rate));
        }
        self.objects.insert(id, object);
        if self.selected.is_none() {
            self.selected = Some(id);
        }
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if self.selected == Some(id) {
            self.selected = None;
            self.select_next();
        }
        removed
    }

    /// Move the selection to the next object, wrapping around
    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(current) => self
                .objects
                .range((Excluded(current), Unbounded))
                .next()
                .map(|(id, _)| *id),
            None => None,
        };
        self.selected = next.or_else(|| self.objects.keys().next().copied());
    }

    pub fn selected_object_mut(&mut self) -> Option<(ObjectId, &mut SceneObject)> {
        let id = self.selected?;
        self.objects.get_mut(&id).map(|object| (id, object))
    }

    pub fn camera(&self) -> &Camera {
        &self.cameras[self.active_camera]
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active_camera]
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn active_camera_index(&self) -> usize {
        self.active_camera
    }

    /// Replace every camera and activate the first; an empty list is ignored
    pub fn set_cameras(&mut self, cameras: Vec<Camera>) {
        if cameras.is_empty() {
            log::warn!("Ignoring empty camera list; keeping {} camera(s)", self.cameras.len());
            return;
        }
        self.cameras = cameras;
        self.active_camera = 0;
    }

    /// Switch the active camera; returns `false` and changes nothing when out of range
    pub fn set_active_camera(&mut self, index: usize) -> bool {
        if index >= self.cameras.len() {
            return false;
        }
        self.active_camera = index;
        true
    }

    /// Objects that have a mesh to draw
    pub fn renderable_objects(&self) -> impl Iterator<Item = (&ObjectId, &SceneObject)> {
        self.objects.iter().filter(|(_, object)| object.is_renderable())
    }

    /// Replace the path followed by movable objects; their clocks restart
    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
        for clock in self.objects.values_mut().filter_map(|o| o.clock.as_mut()) {
            clock.reset();
        }
    }

    /// Advance every movable object along the curve by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let path = self.curve.points();
        for object in self.objects.values_mut() {
            let Some(clock) = object.clock.as_mut() else {
                continue;
            };
            if let Some(sample) = clock.tick(path, dt) {
                object.placement.translation = sample.position;
                object.placement.rotation = Vec3::new(0.0, 0.0, sample.heading);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
