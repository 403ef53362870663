use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use scene_paths::{
    apply_input_event, InputEvent, KeyCode, LoadError, MeshLoadOptions, ObjectId, Scene,
};

const TRIANGLE_OBJ: &str = "\
o triangle
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
s off
f 1/1/1 2/2/1 3/3/1
";

const SCENE_JSON: &str = r#"{
    "camera": [
        {
            "cameraPos": [0.0, 2.0, 8.0],
            "cameraFront": [0.0, 0.0, -1.0],
            "cameraUp": [0.0, 1.0, 0.0],
            "lightPos": [1.0, 5.0, 1.0],
            "lightColor": [1.0, 0.9, 0.8]
        }
    ],
    "objects": [
        {
            "modelPath": "triangle.obj",
            "texturePath": "checker.png",
            "translation": [1.0, 0.0, 0.0],
            "rotation": [0.0, 0.5, 0.0],
            "scale": 2.0,
            "eMovel": false,
            "ka": 0.1
        },
        {
            "modelPath": "triangle.obj",
            "eMovel": true
        }
    ],
    "curve": {
        "kind": "heart",
        "controlPoints": 8,
        "strategy": "bezier",
        "samplesPerSegment": 4,
        "fps": 4.0
    }
}"#;

/// Fresh fixture directory under the system temp dir
fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scene_paths_pipeline_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixtures(dir: &Path, obj: &str, scene: &str) -> PathBuf {
    fs::write(dir.join("triangle.obj"), obj).unwrap();
    image::RgbaImage::from_fn(2, 2, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([0, 0, 0, 255])
        }
    })
    .save(dir.join("checker.png"))
    .unwrap();

    let scene_path = dir.join("scene.json");
    fs::write(&scene_path, scene).unwrap();
    scene_path
}

// ---------------------------------------------------------------------------
// Load → input → update
// ---------------------------------------------------------------------------

#[test]
fn full_scene_pipeline() {
    let dir = fixture_dir("full");
    let scene_path = write_fixtures(&dir, TRIANGLE_OBJ, SCENE_JSON);

    let scene = Scene::load(&scene_path, &MeshLoadOptions::default()).unwrap();
    assert!(scene.load_errors.is_empty(), "{:?}", scene.load_errors);

    assert_eq!(scene.cameras().len(), 1);
    assert_eq!(scene.camera().position, Vec3::new(0.0, 2.0, 8.0));
    assert_eq!(scene.light.position, Vec3::new(1.0, 5.0, 1.0));
    assert_eq!(scene.light.color, Vec3::new(1.0, 0.9, 0.8));

    // Heart with 8 points, global Bézier in 4 steps
    assert_eq!(scene.curve.control_points().len(), 9);
    assert_eq!(scene.curve.points().len(), 5);

    assert_eq!(scene.objects.len(), 2);
    assert_eq!(scene.renderable_objects().count(), 2);

    let statue = &scene.objects[&ObjectId(0)];
    let mesh = statue.mesh.as_ref().unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.stride(), 11);
    assert_eq!(mesh.interleaved().len(), 33);
    let texture = statue.texture.as_ref().unwrap();
    assert_eq!((texture.width, texture.height), (2, 2));
    assert_eq!(texture.data.len(), 16);
    assert_eq!(statue.material.ka, 0.1);
    assert_eq!(statue.material.kd, 0.5);
    assert_eq!(statue.placement.scale, Vec3::splat(2.0));
    assert!(statue.clock.is_none());

    let mover = &scene.objects[&ObjectId(1)];
    assert!(mover.placement.movable);
    assert!(mover.texture.is_none());
    assert!(mover.clock.is_some());

    // Select the mover; edits are ignored. Select the statue again and move it.
    let scene = [
        InputEvent::press(KeyCode::Space),
        InputEvent::press(KeyCode::W),
        InputEvent::press(KeyCode::Space),
        InputEvent::press(KeyCode::W),
        InputEvent::press(KeyCode::D),
    ]
    .into_iter()
    .fold(scene, apply_input_event);

    assert_eq!(scene.selected, Some(ObjectId(0)));
    assert_eq!(
        scene.objects[&ObjectId(0)].placement.translation,
        Vec3::new(2.0, 1.0, 0.0)
    );
    assert_eq!(scene.objects[&ObjectId(1)].placement.translation, Vec3::ZERO);

    // At 4 steps per second a quarter second advances exactly one point
    let mut scene = scene;
    let path = scene.curve.points().to_vec();
    scene.update(0.25);
    let placement = scene.objects[&ObjectId(1)].placement;
    assert_eq!(placement.translation, path[1]);
    let delta = path[2] - path[1];
    let expected_heading = delta.y.atan2(delta.x) - std::f32::consts::FRAC_PI_2;
    assert!((placement.rotation.z - expected_heading).abs() < 1e-6);
    assert_eq!(placement.matrix().w_axis.truncate(), path[1]);

    // Half a step does not advance
    scene.update(0.125);
    assert_eq!(scene.objects[&ObjectId(1)].placement.translation, path[1]);

    // The statue never moves on update
    assert_eq!(
        scene.objects[&ObjectId(0)].placement.translation,
        Vec3::new(2.0, 1.0, 0.0)
    );

    let scene = apply_input_event(scene, InputEvent::press(KeyCode::Escape));
    assert!(scene.quit_requested);
}

#[test]
fn position_color_meshes() {
    let dir = fixture_dir("position_color");
    let scene_path = write_fixtures(&dir, TRIANGLE_OBJ, SCENE_JSON);

    let options = MeshLoadOptions::position_color().with_color(Vec3::new(0.0, 1.0, 0.0));
    let scene = Scene::load(&scene_path, &options).unwrap();

    for object in scene.objects.values() {
        let mesh = object.mesh.as_ref().unwrap();
        assert_eq!(mesh.stride(), 6);
        let floats = mesh.interleaved();
        assert_eq!(floats.len(), 18);
        assert_eq!(&floats[3..6], &[0.0, 1.0, 0.0]);
    }
}

#[test]
fn malformed_mesh_is_reported_and_skipped() {
    let dir = fixture_dir("malformed");
    let broken = "v 0 0 0\nv 1 0 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/1/1 9/1/1\n";
    let scene_path = write_fixtures(&dir, broken, SCENE_JSON);

    let scene = Scene::load(&scene_path, &MeshLoadOptions::default()).unwrap();

    assert_eq!(scene.objects.len(), 2);
    assert_eq!(scene.renderable_objects().count(), 0);
    // One failure per object referencing the broken file; the texture still loads
    assert_eq!(scene.load_errors.len(), 2);
    match &scene.load_errors[0] {
        LoadError::MalformedReference { path, line, text } => {
            assert_eq!(path, &dir.join("triangle.obj"));
            assert_eq!(*line, 5);
            assert_eq!(text, "f 1/1/1 2/1/1 9/1/1");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(scene.objects[&ObjectId(0)].texture.is_some());
}

#[test]
fn unreadable_scene_files() {
    let dir = fixture_dir("unreadable");

    let missing = Scene::load(&dir.join("nope.json"), &MeshLoadOptions::default());
    assert!(matches!(missing, Err(LoadError::FileNotFound { .. })));

    let bad_path = dir.join("bad.json");
    fs::write(&bad_path, "{ \"objects\": [ { \"scale\": \"big\" } ] }").unwrap();
    let bad = Scene::load(&bad_path, &MeshLoadOptions::default());
    match bad {
        Err(err @ LoadError::MalformedConfig { .. }) => assert_eq!(err.path(), bad_path.as_path()),
        other => panic!("expected malformed config, got {other:?}"),
    }
}

#[test]
fn empty_scene_uses_defaults() {
    let dir = fixture_dir("empty");
    let scene_path = dir.join("scene.json");
    fs::write(&scene_path, "{}").unwrap();

    let scene = Scene::load(&scene_path, &MeshLoadOptions::default()).unwrap();
    assert_eq!(scene.camera().position, Vec3::new(0.0, 0.0, 10.0));
    assert!(scene.objects.is_empty());
    assert!(scene.selected.is_none());
    assert_eq!(scene.curve.points().len(), 200);

    let scene = apply_input_event(scene, InputEvent::press(KeyCode::Space));
    assert!(scene.selected.is_none());
}
