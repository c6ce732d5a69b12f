pub mod mesh;
pub mod shader;

pub mod prelude {
    pub use super::mesh::{MeshData, MeshHandle, Vertex};
    pub use super::shader::{
        Attribute, CullFace, RenderState, ShaderHandle, ShaderParams, UniformVariable,
    };
}
