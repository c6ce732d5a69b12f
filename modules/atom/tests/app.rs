#[macro_use]
extern crate approx;

use hydrogen::prelude::*;
use hydrogen_atom::prelude::*;
use hydrogen_world::prelude::*;

fn moving() -> Settings {
    let mut settings = Settings::default();
    settings.motion.enabled = true;
    settings
}

fn app(settings: &Settings) -> AtomApp<HeadlessRenderer> {
    AtomApp::new(HeadlessRenderer::new(), settings, Vector2::new(640, 320), 1.0).unwrap()
}

#[test]
fn focus_replaces() {
    let mut app = app(&Settings::default());
    app.focus.set(FocusTarget::Mars);
    app.focus.set(FocusTarget::Saturn);

    for &v in &FocusTarget::ALL {
        assert_eq!(app.focus.is_focused(v), v == FocusTarget::Saturn);
    }
}

#[test]
fn focus_saturn() {
    let mut app = app(&Settings::default());
    let saturn = app.atom.body(FocusTarget::Saturn);
    app.scene.nodes.set_position(saturn, [10.0, 0.0, 0.0]);

    app.focus.set(FocusTarget::Saturn);
    app.step(0.016);

    let camera = app.scene.nodes.position(app.env.camera).unwrap();
    assert_relative_eq!(camera, Vector3::new(10.0, 30.0, 60.0), epsilon = 1e-3);
    assert_relative_eq!(app.controls.target, Vector3::new(10.0, 0.0, 0.0), epsilon = 1e-3);

    let forward = app.scene.nodes.transform(app.env.camera).unwrap().forward();
    let expected = Vector3::new(0.0, -30.0, -60.0).normalize();
    assert_relative_eq!(forward, expected, epsilon = 1e-3);

    // Setting the same target twice changes nothing.
    app.focus.set(FocusTarget::Saturn);
    app.step(0.016);
    let again = app.scene.nodes.position(app.env.camera).unwrap();
    assert_relative_eq!(again, camera, epsilon = 1e-5);
}

#[test]
fn focus_every_target() {
    let mut app = app(&Settings::default());

    for &v in &FocusTarget::ALL {
        app.focus.set(v);
        app.step(0.016);

        let body = app.scene.nodes.position(app.atom.body(v)).unwrap();
        let camera = app.scene.nodes.position(app.env.camera).unwrap();
        assert_relative_eq!(camera, body + v.offset(), epsilon = 1e-3);
        assert_relative_eq!(app.controls.target, body, epsilon = 1e-3);
    }

    // The moon hangs on the earth, so it is found through two rings.
    let moon = app.scene.find("atom/earth-ring/earth/moon-ring/moon").unwrap();
    assert_eq!(app.atom.body(FocusTarget::Moon), moon);

    app.focus.set(FocusTarget::Moon);
    app.step(0.016);
    let camera = app.scene.nodes.position(app.env.camera).unwrap();
    let moon = app.scene.nodes.position(moon).unwrap();
    assert_relative_eq!(camera, moon + Vector3::new(0.0, 2.0, 5.0), epsilon = 1e-3);
}

#[test]
fn focus_follows_motion() {
    let mut app = app(&moving());
    app.focus.set(FocusTarget::Earth);

    for _ in 0..10 {
        app.step(0.1);
        let earth = app.scene.nodes.position(app.atom.body(FocusTarget::Earth)).unwrap();
        let camera = app.scene.nodes.position(app.env.camera).unwrap();
        assert_relative_eq!(camera, earth + FocusTarget::Earth.offset(), epsilon = 1e-3);
    }
}

#[test]
fn idle_camera() {
    let mut app = app(&moving());
    let camera = app.scene.nodes.position(app.env.camera).unwrap();

    for _ in 0..10 {
        app.step(0.1);
        assert_eq!(app.scene.nodes.position(app.env.camera), Some(camera));
    }

    // Releasing the focus leaves the camera where it was.
    app.focus.set(FocusTarget::Moon);
    app.step(0.1);
    app.focus.clear();
    let camera = app.scene.nodes.position(app.env.camera).unwrap();
    app.step(0.1);
    assert_eq!(app.scene.nodes.position(app.env.camera), Some(camera));
}

#[test]
fn resize() {
    let mut app = app(&Settings::default());
    assert_eq!(app.scene.camera(app.env.camera).unwrap().aspect(), 2.0);

    app.resize(Vector2::new(1024, 768), 2.0);
    assert_eq!(app.scene.camera(app.env.camera).unwrap().aspect(), 1024.0 / 768.0);
    assert_eq!(app.scene.renderer.viewport(), Vector2::new(2048, 1536));

    app.resize(Vector2::new(101, 51), 1.5);
    assert_eq!(app.scene.renderer.viewport(), Vector2::new(152, 77));
    assert_eq!(viewport(Vector2::new(101, 51), 1.5), Vector2::new(152, 77));
    assert_eq!(viewport(Vector2::new(64, 32), 0.0), Vector2::new(64, 32));

    // Minimized windows are ignored.
    app.resize(Vector2::new(0, 0), 2.0);
    assert_eq!(app.scene.camera(app.env.camera).unwrap().aspect(), 101.0 / 51.0);
}

#[test]
fn proton_color() {
    let mut app = app(&Settings::default());
    let proton = app.atom.proton;
    let sun = app.scene.mtl(proton).unwrap().diffuse();

    assert!(!app.set_proton_color(Color::white()));
    assert!(app.set_proton_color(Color::from_hex(0xFF_00_00)));
    assert_eq!(app.scene.mtl(proton).unwrap().color, Color::red());
    assert_eq!(app.scene.mtl(proton).unwrap().diffuse(), Color::red().modulate(sun));

    app.cycle_proton_color();
    let expected = Color::from_hex(PROTON_PALETTE[1]);
    assert_eq!(app.panel.proton_color.value(), expected);
    assert_eq!(app.scene.mtl(proton).unwrap().color, expected);

    app.render().unwrap();
    let submission = app.scene.renderer.last_submission().unwrap();
    let draw = submission.draws.iter().find(|v| v.ent == proton).unwrap();
    assert_eq!(draw.color, expected.modulate(sun));
}

#[test]
fn speed_factor() {
    let mut app = app(&Settings::default());
    assert_eq!(app.speed_factor(), 1.0);

    assert!(app.set_speed_factor(20.0));
    assert_eq!(app.speed_factor(), 10.0);
    assert!(app.set_speed_factor(4.56));
    assert_eq!(app.speed_factor(), 4.6);
}

#[test]
fn pick_nearest() {
    let mut app = app(&Settings::default());
    let dimensions = Vector2::new(640.0, 320.0);
    let center = Vector2::new(320.0, 160.0);

    assert_eq!(app.pick(center, dimensions), Some(FocusTarget::Sun));

    // Every body lies on the z-axis, the one closest to the camera wins.
    let camera = app.env.camera;
    app.scene.nodes.set_position(camera, [0.0, 0.0, 250.0]);
    app.scene.nodes.look_at(camera, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    assert_eq!(app.pick(center, dimensions), Some(FocusTarget::Saturn));
    assert_eq!(app.pick(Vector2::new(0.0, 0.0), dimensions), None);
}

fn engine(settings: &mut Settings) -> Engine {
    settings.headless = true;
    settings.engine.max_frames = Some(100);
    settings.engine.fixed_timestep_ms = Some(16);
    Engine::new(&settings.params()).unwrap()
}

fn push(engine: &mut Engine, e: InputEvent) {
    engine.context_mut().window.push_event(Event::InputDevice(e));
}

#[test]
fn keys() {
    let mut settings = Settings::default();
    let mut engine = engine(&mut settings);
    let dimensions = engine.context().window.dimensions();
    let mut app = AtomApp::new(HeadlessRenderer::new(), &settings, dimensions, 1.0).unwrap();

    push(&mut engine, InputEvent::KeyboardPressed { key: Key::Key5 });
    assert!(engine.advance(&mut app).unwrap());
    assert_eq!(app.focus.current(), Some(FocusTarget::Saturn));

    let saturn = app.scene.nodes.position(app.atom.body(FocusTarget::Saturn)).unwrap();
    let camera = app.scene.nodes.position(app.env.camera).unwrap();
    assert_relative_eq!(camera, saturn + FocusTarget::Saturn.offset(), epsilon = 1e-3);

    push(&mut engine, InputEvent::KeyboardReleased { key: Key::Key5 });
    push(&mut engine, InputEvent::KeyboardPressed { key: Key::Escape });
    push(&mut engine, InputEvent::KeyboardPressed { key: Key::Up });
    push(&mut engine, InputEvent::KeyboardPressed { key: Key::C });
    assert!(engine.advance(&mut app).unwrap());
    assert_eq!(app.focus.current(), None);
    assert_eq!(app.speed_factor(), 1.1);
    assert_eq!(
        app.panel.proton_color.value(),
        Color::from_hex(PROTON_PALETTE[1])
    );

    let submission = app.scene.renderer.last_submission().unwrap();
    assert_eq!(submission.draws.len(), 11);
}

#[test]
fn click_and_resize() {
    let mut settings = Settings::default();
    let mut engine = engine(&mut settings);
    let dimensions = engine.context().window.dimensions();
    let mut app = AtomApp::new(HeadlessRenderer::new(), &settings, dimensions, 1.0).unwrap();

    let center = (dimensions.x as f32 * 0.5, dimensions.y as f32 * 0.5);
    push(&mut engine, InputEvent::MouseMoved { position: center });
    push(&mut engine, InputEvent::MousePressed { button: MouseButton::Left });
    push(&mut engine, InputEvent::MouseReleased { button: MouseButton::Left });
    assert!(engine.advance(&mut app).unwrap());
    assert_eq!(app.focus.current(), Some(FocusTarget::Sun));

    let e = Event::Window(WindowEvent::Resized(300, 600));
    engine.context_mut().window.push_event(e);
    assert!(engine.advance(&mut app).unwrap());
    assert_eq!(app.scene.camera(app.env.camera).unwrap().aspect(), 0.5);
    assert_eq!(app.scene.renderer.viewport(), Vector2::new(300, 600));
}

#[test]
fn drag_and_zoom() {
    let mut settings = Settings::default();
    let mut engine = engine(&mut settings);
    let dimensions = engine.context().window.dimensions();
    let mut app = AtomApp::new(HeadlessRenderer::new(), &settings, dimensions, 1.0).unwrap();

    let start = app.scene.nodes.position(app.env.camera).unwrap();

    push(&mut engine, InputEvent::MouseMoved { position: (100.0, 100.0) });
    push(&mut engine, InputEvent::MousePressed { button: MouseButton::Left });
    assert!(engine.advance(&mut app).unwrap());

    push(&mut engine, InputEvent::MouseMoved { position: (400.0, 100.0) });
    assert!(engine.advance(&mut app).unwrap());

    // Orbiting keeps the distance to the target.
    let p = app.scene.nodes.position(app.env.camera).unwrap();
    assert!((p - start).magnitude() > 1.0);
    assert_relative_eq!(p.magnitude(), start.magnitude(), epsilon = 1e-2);

    push(&mut engine, InputEvent::MouseReleased { button: MouseButton::Left });
    push(&mut engine, InputEvent::MouseWheel { delta: (0.0, 3.0) });
    assert!(engine.advance(&mut app).unwrap());
    assert!(app.scene.nodes.position(app.env.camera).unwrap().magnitude() < start.magnitude());
}
