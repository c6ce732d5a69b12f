//! Pipeline state object that containing immutable render state and uniforms.

use crate::math::prelude::{Color, Matrix4, Vector3, Vector4};

impl_handle!(ShaderHandle);

/// A `ShaderParams` encapusulate all the informations we need to configurate
/// OpenGL before real drawing, like the render states and uniform names.
#[derive(Debug, Clone, Default)]
pub struct ShaderParams {
    pub uniforms: Vec<&'static str>,
    pub state: RenderState,
}

impl ShaderParams {
    pub fn validate(&self, vs: &str, fs: &str) -> crate::errors::Result<()> {
        if vs.is_empty() {
            bail!("Vertex shader is required to describe a proper render pipeline.");
        }

        if fs.is_empty() {
            bail!("Fragment shader is required to describe a proper render pipeline.");
        }

        Ok(())
    }
}

/// The pre-defined attributes of every `Vertex`, bound to fixed locations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attribute {
    Position = 0,
    Normal = 1,
    Texcoord0 = 2,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Position => "Position",
            Attribute::Normal => "Normal",
            Attribute::Texcoord0 => "Texcoord0",
        }
    }

    pub fn all() -> [Attribute; 3] {
        [Attribute::Position, Attribute::Normal, Attribute::Texcoord0]
    }
}

/// Specify whether front- or back-facing polygons can be culled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CullFace {
    Nothing,
    Front,
    Back,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RenderState {
    pub cull_face: CullFace,
    pub depth_test: bool,
    pub depth_write: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            cull_face: CullFace::Back,
            depth_test: true,
            depth_write: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformVariable {
    F32(f32),
    Vector3([f32; 3]),
    Vector4([f32; 4]),
    Matrix4([[f32; 4]; 4]),
}

impl From<f32> for UniformVariable {
    fn from(v: f32) -> Self {
        UniformVariable::F32(v)
    }
}

impl From<Vector3<f32>> for UniformVariable {
    fn from(v: Vector3<f32>) -> Self {
        UniformVariable::Vector3(v.into())
    }
}

impl From<[f32; 3]> for UniformVariable {
    fn from(v: [f32; 3]) -> Self {
        UniformVariable::Vector3(v)
    }
}

impl From<Vector4<f32>> for UniformVariable {
    fn from(v: Vector4<f32>) -> Self {
        UniformVariable::Vector4(v.into())
    }
}

impl From<Color<f32>> for UniformVariable {
    fn from(v: Color<f32>) -> Self {
        UniformVariable::Vector4(v.rgba())
    }
}

impl From<Matrix4<f32>> for UniformVariable {
    fn from(v: Matrix4<f32>) -> Self {
        UniformVariable::Matrix4(v.into())
    }
}
