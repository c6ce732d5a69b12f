//! Scenes own the entities of a world, together with their hierarchy, names and
//! renderable components.

use hydrogen::errors::Result;
use hydrogen::utils::prelude::HandlePool;
use hydrogen::video::prelude::{MeshData, MeshHandle};

use crate::renderable::prelude::{Camera, Lit, MeshRenderer, Renderable, Renderer};
use crate::spatial::prelude::SceneGraph;
use crate::tags::Tags;
use crate::Entity;

/// A `Scene` is the owner of a world.
///
/// Every entity has a node in `nodes` and a name. Cameras, lights and meshes
/// live in `renderables`, while materials are kept by the renderer that knows
/// how to draw them. Spatial queries and edits go through `nodes` directly.
pub struct Scene<R: Renderer> {
    entities: HandlePool<Entity>,
    tags: Tags,

    pub nodes: SceneGraph,
    pub renderables: Renderable,
    pub renderer: R,
}

impl<R: Renderer> Scene<R> {
    pub fn new(renderer: R) -> Self {
        Scene {
            entities: HandlePool::new(),
            tags: Tags::new(),
            nodes: SceneGraph::new(),
            renderables: Renderable::new(),
            renderer,
        }
    }

    /// Number of living entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn contains(&self, ent: Entity) -> bool {
        self.entities.contains(ent)
    }

    /// Creates a named entity as a new root of the hierarchy.
    pub fn create<T: AsRef<str>>(&mut self, name: T) -> Entity {
        let ent = self.entities.create();
        self.nodes.add(ent);
        self.tags.add(ent, name.as_ref());
        ent
    }

    #[inline]
    pub fn name(&self, ent: Entity) -> Option<&str> {
        self.tags.name(ent)
    }

    /// Removes an entity with all of its descendants, and returns what has been
    /// removed in tree order.
    pub fn delete(&mut self, ent: Entity) -> Option<Vec<Entity>> {
        let deletions = self.nodes.remove(ent)?;
        for &v in &deletions {
            self.entities.free(v);
            self.tags.remove(v);
            self.renderables.remove(v);
            self.renderer.remove_mtl(v);
        }

        Some(deletions)
    }

    /// Finds an entity by a '/' separated path of names, starting from the
    /// roots. "atom/earth-ring/earth" for example.
    pub fn find<N: AsRef<str>>(&self, path: N) -> Option<Entity> {
        let mut names = path.as_ref().split('/').filter(|v| !v.is_empty());
        let root = self.tags.find(self.nodes.roots(), names.next()?)?;
        names.try_fold(root, |ent, v| self.tags.find(self.nodes.children(ent), v))
    }

    /// Finds an entity by a path relative to `root`. An empty path returns the
    /// root itself.
    pub fn find_from<N: AsRef<str>>(&self, root: Entity, path: N) -> Option<Entity> {
        if !self.contains(root) {
            return None;
        }

        path.as_ref()
            .split('/')
            .filter(|v| !v.is_empty())
            .try_fold(root, |ent, v| self.tags.find(self.nodes.children(ent), v))
    }

    #[inline]
    pub fn create_mesh(&mut self, data: &MeshData) -> Result<MeshHandle> {
        self.renderer.create_mesh(data)
    }

    #[inline]
    pub fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        self.renderer.delete_mesh(handle)
    }

    /// Draws the scene once from every camera.
    #[inline]
    pub fn draw(&mut self) -> Result<()> {
        self.renderables.draw(&mut self.renderer, &self.nodes)
    }
}

// Components are only attached to living entities.
impl<R: Renderer> Scene<R> {
    pub fn add_camera(&mut self, ent: Entity, camera: Camera) {
        if self.contains(ent) {
            self.renderables.add_camera(ent, camera);
        }
    }

    #[inline]
    pub fn camera(&self, ent: Entity) -> Option<&Camera> {
        self.renderables.camera(ent)
    }

    #[inline]
    pub fn camera_mut(&mut self, ent: Entity) -> Option<&mut Camera> {
        self.renderables.camera_mut(ent)
    }

    pub fn add_lit(&mut self, ent: Entity, lit: Lit) {
        if self.contains(ent) {
            self.renderables.add_lit(ent, lit);
        }
    }

    #[inline]
    pub fn lit(&self, ent: Entity) -> Option<&Lit> {
        self.renderables.lit(ent)
    }

    pub fn add_mesh<T: Into<MeshRenderer>>(&mut self, ent: Entity, mesh: T) {
        if self.contains(ent) {
            self.renderables.add_mesh(ent, mesh);
        }
    }

    #[inline]
    pub fn mesh(&self, ent: Entity) -> Option<&MeshRenderer> {
        self.renderables.mesh(ent)
    }

    pub fn add_mtl(&mut self, ent: Entity, mtl: R::Mtl) {
        if self.contains(ent) {
            self.renderer.add_mtl(ent, mtl);
        }
    }

    #[inline]
    pub fn mtl(&self, ent: Entity) -> Option<&R::Mtl> {
        self.renderer.mtl(ent)
    }

    #[inline]
    pub fn mtl_mut(&mut self, ent: Entity) -> Option<&mut R::Mtl> {
        self.renderer.mtl_mut(ent)
    }
}
