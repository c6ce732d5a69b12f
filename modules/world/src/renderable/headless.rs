//! A renderer that records what it was asked to draw instead of drawing it.

use hydrogen::errors::Result;
use hydrogen::math::prelude::{Color, Vector2};
use hydrogen::utils::prelude::HandlePool;
use hydrogen::video::prelude::{MeshData, MeshHandle};

use crate::spatial::prelude::Transform;
use crate::utils::prelude::Component;
use crate::Entity;

use super::material::Material;
use super::prelude::{Camera, Lit, MeshRenderer, Renderer};

/// One recorded draw of a visible mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub ent: Entity,
    pub mesh: MeshHandle,
    pub transform: Transform,
    pub color: Color<f32>,
}

/// Everything that a camera submitted in one pass.
#[derive(Debug, Clone)]
pub struct Submission {
    pub camera: Camera,
    pub lits: usize,
    pub draws: Vec<DrawRecord>,
}

/// The number of recent submissions kept around.
pub const MAX_SUBMISSIONS: usize = 64;

pub struct HeadlessRenderer {
    meshes: HandlePool<MeshHandle>,
    materials: Component<Material>,
    submissions: Vec<Submission>,
    viewport: Vector2<u32>,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        HeadlessRenderer::new()
    }
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        HeadlessRenderer {
            meshes: HandlePool::new(),
            materials: Component::new(),
            submissions: Vec::new(),
            viewport: Vector2::new(0, 0),
        }
    }

    /// The recent submissions since the last call of `clear`, oldest first.
    #[inline]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    #[inline]
    pub fn last_submission(&self) -> Option<&Submission> {
        self.submissions.last()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.submissions.clear();
    }

    #[inline]
    pub fn viewport(&self) -> Vector2<u32> {
        self.viewport
    }

    #[inline]
    pub fn is_mesh_alive(&self, handle: MeshHandle) -> bool {
        self.meshes.contains(handle)
    }
}

impl Renderer for HeadlessRenderer {
    type Mtl = Material;

    fn create_mesh(&mut self, data: &MeshData) -> Result<MeshHandle> {
        data.validate()?;
        Ok(self.meshes.create())
    }

    fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if !self.meshes.free(handle) {
            bail!("{:?} is invalid.", handle);
        }

        Ok(())
    }

    fn add_mtl(&mut self, ent: Entity, mtl: Self::Mtl) {
        self.materials.add(ent, mtl);
    }

    fn mtl(&self, ent: Entity) -> Option<&Self::Mtl> {
        self.materials.get(ent)
    }

    fn mtl_mut(&mut self, ent: Entity) -> Option<&mut Self::Mtl> {
        self.materials.get_mut(ent)
    }

    fn remove_mtl(&mut self, ent: Entity) {
        self.materials.remove(ent);
    }

    fn set_viewport(&mut self, dimensions: Vector2<u32>) {
        self.viewport = dimensions;
    }

    fn submit(&mut self, camera: &Camera, lits: &[Lit], meshes: &[MeshRenderer]) -> Result<()> {
        let mut draws = Vec::with_capacity(meshes.len());
        for v in meshes.iter().filter(|v| v.visible) {
            if !self.meshes.contains(v.mesh) {
                bail!("{:?} is invalid.", v.mesh);
            }

            let color = self
                .materials
                .get(v.ent)
                .map(|m| m.diffuse())
                .unwrap_or_else(Color::white);

            draws.push(DrawRecord {
                ent: v.ent,
                mesh: v.mesh,
                transform: v.transform,
                color,
            });
        }

        if self.submissions.len() >= MAX_SUBMISSIONS {
            self.submissions.remove(0);
        }

        self.submissions.push(Submission {
            camera: *camera,
            lits: lits.iter().filter(|v| v.enable).count(),
            draws,
        });

        Ok(())
    }
}
