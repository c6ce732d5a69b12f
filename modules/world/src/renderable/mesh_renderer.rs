use hydrogen::video::prelude::MeshHandle;

use crate::spatial::prelude::Transform;
use crate::Entity;

#[derive(Debug, Clone, Copy)]
pub struct MeshRenderer {
    /// The mesh handle used by the renderer.
    pub mesh: MeshHandle,
    /// Is this renderer visible.
    pub visible: bool,

    #[doc(hidden)]
    pub(crate) transform: Transform,
    #[doc(hidden)]
    pub(crate) ent: Entity,
}

impl From<MeshHandle> for MeshRenderer {
    fn from(mesh: MeshHandle) -> Self {
        MeshRenderer {
            mesh,
            ..Default::default()
        }
    }
}

impl Default for MeshRenderer {
    fn default() -> Self {
        MeshRenderer {
            mesh: MeshHandle::default(),
            visible: true,
            transform: Transform::default(),
            ent: Entity::default(),
        }
    }
}

impl MeshRenderer {
    /// The entity this renderer was last drawn for.
    #[inline]
    pub fn ent(&self) -> Entity {
        self.ent
    }

    /// The world transform this renderer was last drawn with.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }
}
