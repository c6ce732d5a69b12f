//! The per-frame motion of the atom, and the camera that follows a body.

use hydrogen::math::prelude::*;
use hydrogen_world::prelude::{Entity, Renderer, Scene};

use crate::atom::Hydrogen;
use crate::controls::OrbitControls;
use crate::focus::FocusTarget;

/// Spins every ring about its own z-axis, and drifts the atom along x between
/// `-bound` and `bound`. Disabled unless asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub enabled: bool,
    pub bound: f32,
    direction: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            enabled: false,
            bound: 10.0,
            direction: 1.0,
        }
    }
}

impl Motion {
    pub fn new(enabled: bool) -> Self {
        Motion {
            enabled,
            ..Default::default()
        }
    }

    /// Either `1.0` or `-1.0`.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Advances `dt` seconds. The ring speeds are multiplied by `speed_factor`.
    pub fn advance<R: Renderer>(
        &mut self,
        scene: &mut Scene<R>,
        atom: &Hydrogen,
        dt: f32,
        speed_factor: f32,
    ) {
        if !self.enabled {
            return;
        }

        for v in &atom.orbits {
            let angle = Deg(v.angular_speed * dt * speed_factor);
            scene.nodes.rotate_on_axis(v.ring, Vector3::unit_z(), angle);
        }

        if let Some(position) = scene.nodes.local_position(atom.root) {
            if position.x > self.bound {
                self.direction = -1.0;
            } else if position.x < -self.bound {
                self.direction = 1.0;
            }
        }

        scene.nodes.translate(atom.root, [atom.speed * dt * self.direction, 0.0, 0.0]);
    }
}

/// Moves `camera` to the watching spot of `target`, and points the controls at
/// it. Returns the world position of the body.
pub fn track_focus<R: Renderer>(
    scene: &mut Scene<R>,
    atom: &Hydrogen,
    target: FocusTarget,
    camera: Entity,
    controls: &mut OrbitControls,
) -> Option<Vector3<f32>> {
    let position = scene.nodes.position(atom.body(target))?;
    scene.nodes.set_position(camera, position + target.offset());
    controls.target = position;
    Some(position)
}
