//! Builds the hydrogen atom and its surroundings into a scene.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use hydrogen::errors::Result;
use hydrogen::math::prelude::*;
use hydrogen::video::prelude::MeshHandle;
use hydrogen_world::prelude::*;

use crate::focus::FocusTarget;

const SPHERE_SEGMENTS: (u32, u32) = (16, 16);
const RING_TUBE: f32 = 0.05;
const RING_SEGMENTS: (u32, u32) = (32, 64);
const RING_COLOR: u32 = 0xDB_DB_DB;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomParams {
    pub proton_radius: f32,
    /// The angular speed of the earth ring in degrees per second. Other rings
    /// are scaled from it.
    pub electron_speed: f32,
    /// How fast the whole atom drifts along the x-axis, in units per second.
    pub speed: f32,
}

impl Default for AtomParams {
    fn default() -> Self {
        AtomParams {
            proton_radius: 30.0,
            electron_speed: 25.0,
            speed: 5.0,
        }
    }
}

/// A ring and the body that rides on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub target: FocusTarget,
    pub ring: Entity,
    pub body: Entity,
    /// The radius of the body sphere.
    pub body_radius: f32,
    /// In degrees per second.
    pub angular_speed: f32,
}

struct Layout {
    target: FocusTarget,
    name: &'static str,
    radius: f32,
    tilt: f32,
    body_radius: f32,
    speed_scale: f32,
    tint: u32,
}

const EARTH: usize = 0;
const MOON: usize = 1;
const MARS: usize = 2;
const SATURN: usize = 3;

/// Where the orbit of `target` sits in `Hydrogen::orbits`. The sun has none.
fn slot(target: FocusTarget) -> Option<usize> {
    match target {
        FocusTarget::Sun => None,
        FocusTarget::Earth => Some(EARTH),
        FocusTarget::Moon => Some(MOON),
        FocusTarget::Mars => Some(MARS),
        FocusTarget::Saturn => Some(SATURN),
    }
}

// Moon goes right after earth since its ring hangs on the earth.
const LAYOUTS: [Layout; 4] = [
    Layout {
        target: FocusTarget::Earth,
        name: "earth",
        radius: 75.0,
        tilt: 90.0,
        body_radius: 5.0,
        speed_scale: 1.0,
        tint: 0x3A_6F_B0,
    },
    Layout {
        target: FocusTarget::Moon,
        name: "moon",
        radius: 10.0,
        tilt: 25.0,
        body_radius: 0.75,
        speed_scale: 3.0,
        tint: 0x9A_9A_9A,
    },
    Layout {
        target: FocusTarget::Mars,
        name: "mars",
        radius: 100.0,
        tilt: 90.0,
        body_radius: 3.0,
        speed_scale: 0.53,
        tint: 0xC1_44_0E,
    },
    Layout {
        target: FocusTarget::Saturn,
        name: "saturn",
        radius: 160.0,
        tilt: 90.0,
        body_radius: 8.0,
        speed_scale: 0.2,
        tint: 0xD8_C0_8E,
    },
];

/// Handles to the nodes of an atom.
#[derive(Debug, Clone)]
pub struct Hydrogen {
    pub root: Entity,
    pub proton: Entity,
    pub proton_radius: f32,
    /// Earth, moon, mars and saturn, in this order.
    pub orbits: SmallVec<[Orbit; 4]>,
    pub saturn_band: Entity,
    /// The drift speed of the root along x.
    pub speed: f32,
    meshes: Vec<MeshHandle>,
}

impl Hydrogen {
    /// Builds an atom as a new root named `atom`:
    ///
    /// ```text
    /// atom
    /// ├── sun
    /// ├── earth-ring
    /// │   └── earth
    /// │       └── moon-ring
    /// │           └── moon
    /// ├── mars-ring
    /// │   └── mars
    /// └── saturn-ring
    ///     └── saturn
    ///         └── saturn-band
    /// ```
    pub fn build<R>(scene: &mut Scene<R>, params: &AtomParams) -> Result<Self>
    where
        R: Renderer<Mtl = Material>,
    {
        let mut meshes = Vec::new();
        let root = scene.create("atom");

        let (w, h) = SPHERE_SEGMENTS;
        let proton_mesh = scene.create_mesh(&sphere(params.proton_radius, w, h))?;
        meshes.push(proton_mesh);

        let proton = scene.create("sun");
        scene.nodes.set_parent(proton, root, false)?;
        scene.add_mesh(proton, proton_mesh);
        scene.add_mtl(
            proton,
            Material::lambert(Color::white()).with_texture("sun", Color::from_hex(0xF9_B2_33)),
        );

        let mut orbits = SmallVec::<[Orbit; 4]>::new();
        for v in &LAYOUTS {
            let parent = match v.target {
                FocusTarget::Moon => orbits[EARTH].body,
                _ => root,
            };

            let (radial, tubular) = RING_SEGMENTS;
            let ring_mesh = scene.create_mesh(&torus(v.radius, RING_TUBE, radial, tubular))?;
            let body_mesh = scene.create_mesh(&sphere(v.body_radius, w, h))?;
            meshes.push(ring_mesh);
            meshes.push(body_mesh);

            let ring = scene.create(format!("{}-ring", v.name));
            scene.nodes.set_parent(ring, parent, false)?;
            scene.nodes.set_local_rotation(ring, Quaternion::from_angle_x(Deg(v.tilt)));
            scene.add_mesh(ring, ring_mesh);
            scene.add_mtl(ring, Material::lambert(Color::from_hex(RING_COLOR)));

            let body = scene.create(v.name);
            scene.nodes.set_parent(body, ring, false)?;
            scene.nodes.set_local_position(body, [0.0, v.radius, 0.0]);
            scene.add_mesh(body, body_mesh);
            scene.add_mtl(
                body,
                Material::lambert(Color::white()).with_texture(v.name, Color::from_hex(v.tint)),
            );

            orbits.push(Orbit {
                target: v.target,
                ring,
                body,
                body_radius: v.body_radius,
                angular_speed: params.electron_speed * v.speed_scale,
            });
        }

        let band_mesh = scene.create_mesh(&ring(8.0, 14.0, 32))?;
        meshes.push(band_mesh);

        let saturn_band = scene.create("saturn-band");
        scene.nodes.set_parent(saturn_band, orbits[SATURN].body, false)?;
        scene.add_mesh(saturn_band, band_mesh);
        scene.add_mtl(
            saturn_band,
            Material::unlit(Color::white())
                .with_texture("saturn-ring", Color::from_hex(0xC9_B3_8A))
                .with_double_sided(true),
        );

        info!(
            "Build hydrogen atom with {} orbits and {} meshes.",
            orbits.len(),
            meshes.len()
        );

        Ok(Hydrogen {
            root,
            proton,
            proton_radius: params.proton_radius,
            orbits,
            saturn_band,
            speed: params.speed,
            meshes,
        })
    }

    /// The node that represents `target`.
    pub fn body(&self, target: FocusTarget) -> Entity {
        match slot(target) {
            Some(i) => self.orbits[i].body,
            None => self.proton,
        }
    }

    /// The radius of the sphere of `target`.
    pub fn radius(&self, target: FocusTarget) -> f32 {
        match slot(target) {
            Some(i) => self.orbits[i].body_radius,
            None => self.proton_radius,
        }
    }

    /// The ring that carries `target`, none for the sun.
    #[inline]
    pub fn orbit(&self, target: FocusTarget) -> Option<&Orbit> {
        slot(target).map(|i| &self.orbits[i])
    }

    #[inline]
    pub fn earth_ring(&self) -> Entity {
        self.orbits[EARTH].ring
    }

    /// Removes the atom from `scene`, and releases its meshes.
    pub fn delete<R: Renderer>(self, scene: &mut Scene<R>) -> Result<()> {
        scene.delete(self.root);
        for v in self.meshes {
            scene.delete_mesh(v)?;
        }

        Ok(())
    }
}

/// The things around the atom: a skybox, lights and the main camera.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub skybox: Entity,
    pub ambient: Entity,
    pub sunlight: Entity,
    pub camera: Entity,
}

impl Environment {
    pub fn build<R>(scene: &mut Scene<R>, aspect: f32) -> Result<Self>
    where
        R: Renderer<Mtl = Material>,
    {
        let skybox = scene.create("skybox");
        let mesh = scene.create_mesh(&sphere(400.0, 32, 16))?;
        scene.nodes.set_position(skybox, [3.0, 0.0, 0.0]);
        scene.add_mesh(skybox, mesh);
        scene.add_mtl(
            skybox,
            Material::lambert(Color::white())
                .with_texture("space-background", Color::from_hex(0x0B_0D_1A))
                .with_double_sided(true),
        );

        let ambient = scene.create("ambient");
        scene.add_lit(ambient, Lit::ambient(Color::white(), 0.25));

        let sunlight = scene.create("sunlight");
        scene.nodes.set_position(sunlight, [-10.0, 10.0, 0.0]);
        scene.nodes.look_at(sunlight, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        scene.add_lit(sunlight, Lit::dir(Color::white(), 1.0));

        let camera = scene.create("camera");
        scene.nodes.set_position(camera, [100.0, 2.0, 10.0]);
        scene.nodes.look_at(camera, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        scene.add_camera(camera, Camera::perspective(Deg(75.0), aspect, 0.1, 10000.0));

        Ok(Environment {
            skybox,
            ambient,
            sunlight,
            camera,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let atom = Hydrogen::build(&mut scene, &AtomParams::default()).unwrap();

        assert_eq!(scene.find("atom/sun"), Some(atom.proton));
        assert_eq!(
            scene.find("atom/earth-ring/earth/moon-ring/moon"),
            Some(atom.body(FocusTarget::Moon))
        );
        assert_eq!(
            scene.find("atom/mars-ring/mars"),
            Some(atom.body(FocusTarget::Mars))
        );
        assert_eq!(
            scene.find("atom/saturn-ring/saturn/saturn-band"),
            Some(atom.saturn_band)
        );
        assert_eq!(atom.earth_ring(), scene.find("atom/earth-ring").unwrap());

        let speeds: Vec<_> = atom.orbits.iter().map(|v| v.angular_speed).collect();
        assert_eq!(speeds, vec![25.0, 75.0, 13.25, 5.0]);
        assert_eq!(atom.radius(FocusTarget::Sun), 30.0);
        assert_eq!(atom.radius(FocusTarget::Saturn), 8.0);
    }

    #[test]
    fn bodies() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let atom = Hydrogen::build(&mut scene, &AtomParams::default()).unwrap();

        for &v in &FocusTarget::ALL {
            assert_eq!(scene.name(atom.body(v)), Some(v.name()));
            match atom.orbit(v) {
                Some(orbit) => {
                    assert_eq!(orbit.target, v);
                    assert_eq!(orbit.body, atom.body(v));
                    assert_eq!(scene.nodes.parent(orbit.body), Some(orbit.ring));
                }
                None => assert_eq!(v, FocusTarget::Sun),
            }
        }

        assert_eq!(atom.radius(FocusTarget::Moon), 0.75);
        assert_eq!(atom.radius(FocusTarget::Mars), 3.0);
    }

    #[test]
    fn world_positions() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let atom = Hydrogen::build(&mut scene, &AtomParams::default()).unwrap();

        let position = |v| scene.nodes.position(atom.body(v)).unwrap();
        assert_ulps_eq!(position(FocusTarget::Sun), Vector3::new(0.0, 0.0, 0.0));
        for &(v, z) in &[
            (FocusTarget::Earth, 75.0),
            (FocusTarget::Mars, 100.0),
            (FocusTarget::Saturn, 160.0),
        ] {
            assert_relative_eq!(position(v), Vector3::new(0.0, 0.0, z), epsilon = 1e-4);
        }

        let (s, c) = Deg(25.0f32).sin_cos();
        let moon = Vector3::new(0.0, -10.0 * s, 75.0 + 10.0 * c);
        assert_relative_eq!(position(FocusTarget::Moon), moon, epsilon = 1e-4);
    }

    #[test]
    fn delete() {
        let mut scene = Scene::new(HeadlessRenderer::new());
        let atom = Hydrogen::build(&mut scene, &AtomParams::default()).unwrap();
        assert_eq!(scene.len(), 11);

        let meshes = atom.meshes.clone();
        atom.delete(&mut scene).unwrap();
        assert!(scene.is_empty());
        assert!(meshes.iter().all(|&v| !scene.renderer.is_mesh_alive(v)));
    }
}
