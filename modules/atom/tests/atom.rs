#[macro_use]
extern crate approx;

use hydrogen::prelude::*;
use hydrogen_atom::prelude::*;
use hydrogen_world::prelude::*;

fn build() -> (Scene<HeadlessRenderer>, Hydrogen) {
    let mut scene = Scene::new(HeadlessRenderer::new());
    let atom = Hydrogen::build(&mut scene, &AtomParams::default()).unwrap();
    (scene, atom)
}

#[test]
fn hierarchy() {
    let (scene, atom) = build();

    let earth = atom.body(FocusTarget::Earth);
    let moon = atom.body(FocusTarget::Moon);
    let mars = atom.body(FocusTarget::Mars);
    let saturn = atom.body(FocusTarget::Saturn);

    assert!(scene.nodes.is_root(atom.root));
    assert!(scene.nodes.is_leaf(moon));
    assert!(scene.nodes.is_ancestor(moon, earth));
    assert!(scene.nodes.is_ancestor(moon, atom.earth_ring()));
    assert!(!scene.nodes.is_ancestor(mars, atom.earth_ring()));
    assert!(!scene.nodes.is_ancestor(saturn, atom.earth_ring()));

    let children: Vec<_> = scene.nodes.children(atom.root).collect();
    let rings: Vec<_> = atom
        .orbits
        .iter()
        .filter(|v| v.target != FocusTarget::Moon)
        .map(|v| v.ring)
        .collect();
    assert_eq!(children, vec![atom.proton, rings[0], rings[1], rings[2]]);

    let ancestors: Vec<_> = scene.nodes.ancestors(moon).collect();
    assert_eq!(ancestors.len(), 4);
    assert_eq!(ancestors.last(), Some(&atom.root));

    assert_eq!(scene.nodes.descendants(atom.root).count(), 10);
    assert_eq!(scene.name(atom.saturn_band), Some("saturn-band"));
}

#[test]
fn translate_ring() {
    let (mut scene, atom) = build();

    let bodies: Vec<_> = [FocusTarget::Earth, FocusTarget::Moon]
        .iter()
        .map(|&v| atom.body(v))
        .collect();
    let before: Vec<_> = bodies.iter().map(|&v| scene.nodes.position(v).unwrap()).collect();

    let offset = Vector3::new(3.0, -7.0, 12.0);
    scene.nodes.translate(atom.earth_ring(), offset);

    for (i, &v) in bodies.iter().enumerate() {
        let after = scene.nodes.position(v).unwrap();
        assert_relative_eq!(after, before[i] + offset, epsilon = 1e-4);
    }

    // Nothing else moves.
    let mars = scene.nodes.position(atom.body(FocusTarget::Mars)).unwrap();
    assert_relative_eq!(mars, Vector3::new(0.0, 0.0, 100.0), epsilon = 1e-4);
}

#[test]
fn motion() {
    let (mut scene, atom) = build();
    let mut motion = Motion::new(true);

    motion.advance(&mut scene, &atom, 1.0, 2.0);

    // The earth ring turns 50 degrees around its own z-axis, and the atom moves
    // 5 units along x.
    let (s, c) = Deg(50.0f32).sin_cos();
    let earth = scene.nodes.position(atom.body(FocusTarget::Earth)).unwrap();
    assert_relative_eq!(earth, Vector3::new(5.0 - 75.0 * s, 0.0, 75.0 * c), epsilon = 1e-3);

    let root = scene.nodes.position(atom.root).unwrap();
    assert_relative_eq!((earth - root).magnitude(), 75.0, epsilon = 1e-3);
}

#[test]
fn motion_reverses() {
    let (mut scene, atom) = build();
    let mut motion = Motion::new(true);

    let mut xs = Vec::new();
    let mut directions = Vec::new();
    for _ in 0..12 {
        motion.advance(&mut scene, &atom, 1.0, 1.0);
        xs.push(scene.nodes.local_position(atom.root).unwrap().x);
        directions.push(motion.direction());
    }

    assert_eq!(
        xs,
        vec![5.0, 10.0, 15.0, 10.0, 5.0, 0.0, -5.0, -10.0, -15.0, -10.0, -5.0, 0.0]
    );
    assert_eq!(directions[2], 1.0);
    assert_eq!(directions[3], -1.0);
    assert_eq!(directions[9], 1.0);
}

#[test]
fn still() {
    let (mut scene, atom) = build();
    let earth = scene.nodes.position(atom.body(FocusTarget::Earth)).unwrap();

    let mut motion = Motion::default();
    assert!(!motion.enabled);
    motion.advance(&mut scene, &atom, 1.0, 10.0);
    assert_eq!(scene.nodes.position(atom.body(FocusTarget::Earth)), Some(earth));
    assert_eq!(scene.nodes.position(atom.root), Some(Vector3::zero()));
}

#[test]
fn draw() {
    let (mut scene, atom) = build();
    let env = Environment::build(&mut scene, 2.0).unwrap();
    scene.draw().unwrap();

    let submission = scene.renderer.last_submission().unwrap();
    assert_eq!(submission.lits, 2);
    assert_eq!(submission.draws.len(), 11);
    assert_eq!(submission.camera.aspect(), 2.0);

    let band = submission
        .draws
        .iter()
        .find(|v| v.ent == atom.saturn_band)
        .unwrap();
    assert_eq!(band.color, Color::from_hex(0xC9_B3_8A));

    let forward = scene.nodes.transform(env.camera).unwrap().forward();
    let expected = -Vector3::new(100.0, 2.0, 10.0).normalize();
    assert_relative_eq!(forward, expected, epsilon = 1e-4);
}
