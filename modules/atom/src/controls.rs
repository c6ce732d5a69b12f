//! Damped orbit controls, which rotate and zoom a camera around a target.

use std::f32::consts::PI;

use hydrogen::math::prelude::*;
use hydrogen_world::prelude::{Entity, Renderer, Scene};

const EPS: f32 = 0.000_001;

/// Spherical coordinates around the y-axis. `theta` is the azimuth measured
/// from the z-axis, and `phi` is the polar angle measured from the y-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vector3<f32>) -> Self {
        let radius = v.magnitude();
        if radius <= EPS {
            return Spherical {
                radius: 0.0,
                theta: 0.0,
                phi: 0.0,
            };
        }

        Spherical {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).max(-1.0).min(1.0).acos(),
        }
    }

    fn to_offset(self) -> Vector3<f32> {
        let s = self.phi.sin() * self.radius;
        Vector3::new(
            s * self.theta.sin(),
            self.phi.cos() * self.radius,
            s * self.theta.cos(),
        )
    }
}

/// Orbits a camera around `target`. Inputs are accumulated by `rotate` and
/// `zoom`, and applied by `update` once per frame. With damping enabled, only a
/// fraction of the pending input is applied each frame and the rest decays.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vector3<f32>,

    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,

    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,

    pub min_distance: f32,
    pub max_distance: f32,

    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vector3<f32>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        OrbitControls {
            target: Vector3::zero(),
            enable_damping: true,
            damping_factor: 0.1,
            enable_pan: false,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: ::std::f32::INFINITY,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vector3::zero(),
        }
    }
}

impl OrbitControls {
    pub fn new<T: Into<Vector3<f32>>>(target: T) -> Self {
        OrbitControls {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Orbits by a drag of `movement` pixels, with y pointing up. A drag across
    /// the whole `height` of the viewport turns a full circle.
    pub fn rotate(&mut self, movement: Vector2<f32>, height: f32) {
        if height <= 0.0 {
            return;
        }

        let k = 2.0 * PI * self.rotate_speed / height;
        self.delta_theta -= movement.x * k;
        self.delta_phi += movement.y * k;
    }

    /// Zooms by wheel `steps`. Positive steps move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        self.scale *= 0.95f32.powf(steps * self.zoom_speed);
    }

    /// Moves the target along the camera plane. Ignored unless `enable_pan`.
    pub fn pan(&mut self, right: Vector3<f32>, up: Vector3<f32>, movement: Vector2<f32>) {
        if self.enable_pan {
            self.pan_offset -= (right * movement.x + up * movement.y) * self.pan_speed;
        }
    }

    /// Returns true if some input has not been applied yet.
    pub fn is_pending(&self) -> bool {
        self.delta_theta.abs() > EPS
            || self.delta_phi.abs() > EPS
            || (self.scale - 1.0).abs() > EPS
            || self.pan_offset.magnitude2() > EPS * EPS
    }

    /// Applies pending input to `camera`, and turns it towards the target.
    /// Returns true if the position of camera changed.
    pub fn update<R: Renderer>(&mut self, scene: &mut Scene<R>, camera: Entity) -> bool {
        let position = match scene.nodes.position(camera) {
            Some(v) => v,
            None => return false,
        };

        let moved = if self.is_pending() {
            let position = self.apply(position);
            scene.nodes.set_position(camera, position);
            true
        } else {
            self.reset();
            false
        };

        scene.nodes.look_at(camera, self.target, Vector3::unit_y());
        moved
    }

    fn apply(&mut self, position: Vector3<f32>) -> Vector3<f32> {
        let mut spherical = Spherical::from_offset(position - self.target);
        let k = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };

        spherical.theta += self.delta_theta * k;
        spherical.phi += self.delta_phi * k;
        spherical.phi = spherical.phi.max(EPS).min(PI - EPS);
        spherical.radius = (spherical.radius * self.scale)
            .max(self.min_distance)
            .min(self.max_distance);

        self.target += self.pan_offset * k;
        let position = self.target + spherical.to_offset();

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vector3::zero();
        }

        self.scale = 1.0;
        position
    }

    fn reset(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vector3::zero();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hydrogen_world::prelude::HeadlessRenderer;

    #[test]
    fn spherical() {
        let v = Vector3::new(3.0, 4.0, -5.0);
        assert_relative_eq!(Spherical::from_offset(v).to_offset(), v, epsilon = 1e-4);
    }

    #[test]
    fn idle() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let camera = scene.create("camera");
        scene.nodes.set_position(camera, [100.0, 2.0, 10.0]);

        let mut controls = OrbitControls::default();
        assert!(!controls.update(&mut scene, camera));
        assert_eq!(scene.nodes.position(camera), Some(Vector3::new(100.0, 2.0, 10.0)));

        let forward = scene.nodes.transform(camera).unwrap().forward();
        assert_relative_eq!(forward, -Vector3::new(100.0, 2.0, 10.0).normalize(), epsilon = 1e-4);
    }

    #[test]
    fn damping() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let camera = scene.create("camera");
        scene.nodes.set_position(camera, [0.0, 0.0, 10.0]);

        let mut controls = OrbitControls::default();
        controls.rotate(Vector2::new(-100.0, 0.0), 200.0);
        assert!(controls.update(&mut scene, camera));

        // A tenth of the half circle.
        let p = scene.nodes.position(camera).unwrap();
        assert_relative_eq!(p.magnitude(), 10.0, epsilon = 1e-3);
        assert_relative_eq!(p.x.atan2(p.z), PI * 0.1, epsilon = 1e-3);

        let mut frames = 1;
        while controls.update(&mut scene, camera) {
            frames += 1;
        }

        assert!(frames > 10);
        let p = scene.nodes.position(camera).unwrap();
        assert_relative_eq!(p.x.atan2(p.z).abs(), PI, epsilon = 1e-3);
    }

    #[test]
    fn zoom_clamps() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let camera = scene.create("camera");
        scene.nodes.set_position(camera, [0.0, 0.0, 10.0]);

        let mut controls = OrbitControls::default();
        controls.enable_damping = false;
        controls.min_distance = 8.0;
        controls.zoom(100.0);
        controls.update(&mut scene, camera);
        let distance = scene.nodes.position(camera).unwrap().magnitude();
        assert_relative_eq!(distance, 8.0, epsilon = 1e-4);
        assert!(!controls.is_pending());
    }

    #[test]
    fn polar_clamps() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let camera = scene.create("camera");
        scene.nodes.set_position(camera, [0.0, 0.0, 10.0]);

        let mut controls = OrbitControls::default();
        controls.enable_damping = false;
        controls.rotate(Vector2::new(0.0, 1000.0), 100.0);
        controls.update(&mut scene, camera);

        // Dragging up swings the camera under the target, but never past the pole.
        let p = scene.nodes.position(camera).unwrap();
        assert_relative_eq!(p.y, -10.0, epsilon = 1e-3);
        assert!(p.x.is_finite() && p.z.is_finite());
    }

    #[test]
    fn pan_disabled() {
        let mut controls = OrbitControls::default();
        controls.pan(Vector3::unit_x(), Vector3::unit_y(), Vector2::new(5.0, 5.0));
        assert!(!controls.is_pending());

        controls.enable_pan = true;
        controls.pan(Vector3::unit_x(), Vector3::unit_y(), Vector2::new(5.0, 5.0));
        assert!(controls.is_pending());
    }
}
