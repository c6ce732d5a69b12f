#[macro_use]
extern crate approx;

use hydrogen::prelude::*;
use hydrogen_world::prelude::*;

#[test]
fn find() {
    let mut scene = Scene::new(HeadlessRenderer::new());

    let e1 = scene.create("atom");
    let e2 = scene.create("sun");
    let e3 = scene.create("earth-ring");
    let e4 = scene.create("earth");

    scene.nodes.set_parent(e2, e1, false).unwrap();
    scene.nodes.set_parent(e3, e1, false).unwrap();
    scene.nodes.set_parent(e4, e3, false).unwrap();

    assert_eq!(scene.find("atom"), Some(e1));
    assert_eq!(scene.find("atom/"), Some(e1));
    assert_eq!(scene.find("atom//"), Some(e1));
    assert_eq!(scene.find("/atom"), Some(e1));
    assert_eq!(scene.find("//atom"), Some(e1));
    assert_eq!(scene.find("/atom//"), Some(e1));

    assert_eq!(scene.find("atom/sun"), Some(e2));
    assert_eq!(scene.find("atom/earth-ring"), Some(e3));
    assert_eq!(scene.find("atom/earth-ring/earth"), Some(e4));

    assert_eq!(scene.find("atom/blahblah"), None);
    assert_eq!(scene.find("sun"), None);
    assert_eq!(scene.find(""), None);

    assert_eq!(scene.find_from(e1, "earth-ring/earth"), Some(e4));
    assert_eq!(scene.find_from(e3, ""), Some(e3));
    assert_eq!(scene.find_from(e3, "sun"), None);
}

#[test]
fn delete_components() {
    let mut scene = Scene::new(HeadlessRenderer::new());
    let data = sphere(1.0, 8, 6);
    let mesh = scene.create_mesh(&data).unwrap();

    let e1 = scene.create("e1");
    let e2 = scene.create("e2");
    scene.nodes.set_parent(e2, e1, false).unwrap();
    scene.add_mesh(e2, mesh);
    scene.add_mtl(e2, Material::lambert(Color::red()));
    scene.add_lit(e1, Lit::dir(Color::white(), 1.0));

    scene.delete(e1).unwrap();
    assert!(scene.is_empty());
    assert!(scene.mesh(e2).is_none());
    assert!(scene.mtl(e2).is_none());
    assert!(scene.lit(e1).is_none());
    assert!(scene.name(e2).is_none());

    // Stale entities are ignored.
    scene.add_mesh(e2, mesh);
    assert!(scene.mesh(e2).is_none());
}

#[test]
fn draw() {
    let mut scene = Scene::new(HeadlessRenderer::new());
    let mesh = scene.create_mesh(&ring(1.0, 2.0, 8)).unwrap();

    let camera = scene.create("camera");
    scene.add_camera(camera, Camera::perspective(Deg(75.0), 1.0, 0.1, 1000.0));
    scene.nodes.set_position(camera, [0.0, 0.0, -10.0]);

    let parent = scene.create("parent");
    let child = scene.create("child");
    scene.nodes.set_parent(child, parent, false).unwrap();
    scene.nodes.set_local_position(child, [1.0, 0.0, 0.0]);
    scene.nodes.set_position(parent, [0.0, 2.0, 0.0]);

    scene.add_mesh(parent, mesh);
    scene.add_mesh(child, mesh);
    scene.add_mtl(
        child,
        Material::lambert(Color::white()).with_texture("earth", Color::from_hex(0x3060C0)),
    );

    let mut invisible = MeshRenderer::from(mesh);
    invisible.visible = false;
    let hidden = scene.create("hidden");
    scene.add_mesh(hidden, invisible);

    scene.add_lit(camera, Lit::ambient(Color::white(), 0.25));
    scene.draw().unwrap();

    let submission = scene.renderer.last_submission().unwrap();
    assert_eq!(submission.lits, 1);
    assert_eq!(submission.draws.len(), 2);
    assert_relative_eq!(
        submission.camera.transform().position,
        Vector3::new(0.0, 0.0, -10.0)
    );

    let draw = submission.draws.iter().find(|v| v.ent == child).unwrap();
    assert_relative_eq!(draw.transform.position, Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(draw.color, Color::from_hex(0x3060C0));

    let draw = submission.draws.iter().find(|v| v.ent == parent).unwrap();
    assert_eq!(draw.color, Color::white());

    scene.delete_mesh(mesh).unwrap();
    assert!(scene.draw().is_err());
}

#[test]
fn camera_aspect() {
    let mut scene = Scene::new(HeadlessRenderer::new());
    let camera = scene.create("camera");
    scene.add_camera(camera, Camera::perspective(Deg(75.0), 1.0, 0.1, 1000.0));

    scene.camera_mut(camera).unwrap().set_aspect(1920.0 / 1080.0);
    assert_relative_eq!(scene.camera(camera).unwrap().aspect(), 1920.0 / 1080.0);
}
