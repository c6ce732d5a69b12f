//! Renderable components and the renderers that draw them.

mod camera;
mod lit;
mod material;
mod mesh_renderer;
mod simple;

pub mod headless;

pub mod prelude {
    pub use super::camera::Camera;
    pub use super::headless::{DrawRecord, HeadlessRenderer, Submission};
    pub use super::lit::{Lit, LitSource};
    pub use super::material::{Material, Shading, TextureRef};
    pub use super::mesh_renderer::MeshRenderer;
    pub use super::simple::SimpleRenderer;
    pub use super::{Renderable, Renderer};
}

use hydrogen::errors::Result;
use hydrogen::math::prelude::Vector2;
use hydrogen::video::prelude::{MeshData, MeshHandle};

use crate::spatial::prelude::SceneGraph;
use crate::utils::prelude::Component;
use crate::Entity;

use self::camera::Camera;
use self::lit::Lit;
use self::mesh_renderer::MeshRenderer;

/// A `Renderer` owns the meshes it can draw and the materials of entities.
pub trait Renderer {
    type Mtl;

    fn create_mesh(&mut self, data: &MeshData) -> Result<MeshHandle>;
    fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    fn add_mtl(&mut self, ent: Entity, mtl: Self::Mtl);
    fn mtl(&self, ent: Entity) -> Option<&Self::Mtl>;
    fn mtl_mut(&mut self, ent: Entity) -> Option<&mut Self::Mtl>;
    fn remove_mtl(&mut self, ent: Entity);

    /// Resizes the drawable area, in pixels.
    fn set_viewport(&mut self, dimensions: Vector2<u32>);

    /// Draws `meshes` from the view of `camera`. Every component has its world
    /// transform resolved already.
    fn submit(&mut self, camera: &Camera, lits: &[Lit], meshes: &[MeshRenderer]) -> Result<()>;
}

/// Cameras, lights and meshes of a scene.
#[derive(Default)]
pub struct Renderable {
    cameras: Component<Camera>,
    lits: Component<Lit>,
    meshes: Component<MeshRenderer>,
}

impl Renderable {
    pub fn new() -> Self {
        Renderable::default()
    }

    #[inline]
    pub fn add_camera(&mut self, ent: Entity, camera: Camera) {
        self.cameras.add(ent, camera);
    }

    #[inline]
    pub fn camera(&self, ent: Entity) -> Option<&Camera> {
        self.cameras.get(ent)
    }

    #[inline]
    pub fn camera_mut(&mut self, ent: Entity) -> Option<&mut Camera> {
        self.cameras.get_mut(ent)
    }

    #[inline]
    pub fn add_lit(&mut self, ent: Entity, lit: Lit) {
        self.lits.add(ent, lit);
    }

    #[inline]
    pub fn lit(&self, ent: Entity) -> Option<&Lit> {
        self.lits.get(ent)
    }

    pub fn add_mesh<T: Into<MeshRenderer>>(&mut self, ent: Entity, mesh: T) {
        let mut mesh = mesh.into();
        mesh.ent = ent;
        self.meshes.add(ent, mesh);
    }

    #[inline]
    pub fn mesh(&self, ent: Entity) -> Option<&MeshRenderer> {
        self.meshes.get(ent)
    }

    /// Removes every component of `ent`.
    pub fn remove(&mut self, ent: Entity) {
        self.cameras.remove(ent);
        self.lits.remove(ent);
        self.meshes.remove(ent);
    }

    /// Resolves the world transforms of all components, then submits the
    /// whole scene once for every camera.
    pub fn draw<R: Renderer>(&mut self, renderer: &mut R, sg: &SceneGraph) -> Result<()> {
        for (&ent, v) in self.cameras.entities.iter().zip(&mut self.cameras.data) {
            v.transform = sg.transform(ent).unwrap_or(v.transform);
        }

        for (&ent, v) in self.lits.entities.iter().zip(&mut self.lits.data) {
            v.transform = sg.transform(ent).unwrap_or(v.transform);
        }

        for (&ent, v) in self.meshes.entities.iter().zip(&mut self.meshes.data) {
            v.transform = sg.transform(ent).unwrap_or(v.transform);
            v.ent = ent;
        }

        for v in &self.cameras.data {
            renderer.submit(v, &self.lits.data, &self.meshes.data)?;
        }

        Ok(())
    }
}
