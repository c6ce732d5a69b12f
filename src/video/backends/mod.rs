//! The backend of renderer, which should be responsible for only one thing:
//! submitting draw-calls using low-level OpenGL video APIs.

pub mod headless;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};

use super::assets::prelude::*;

pub type UniformVar<'a> = (&'a str, UniformVariable);

pub trait Visitor {
    unsafe fn create_shader(
        &mut self,
        handle: ShaderHandle,
        params: &ShaderParams,
        vs: &str,
        fs: &str,
    ) -> Result<()>;

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()>;

    unsafe fn create_mesh(&mut self, handle: MeshHandle, data: &MeshData) -> Result<()>;

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    /// Binds the default framebuffer, sets the viewport and clears it.
    unsafe fn bind(&mut self, dimensions: Vector2<u32>, clear: Option<Color<f32>>) -> Result<()>;

    /// Draws a mesh, returns the number of triangles submitted.
    unsafe fn draw(
        &mut self,
        shader: ShaderHandle,
        mesh: MeshHandle,
        vars: &[UniformVar],
    ) -> Result<u32>;

    /// Blocks until all execution is complete.
    unsafe fn flush(&mut self) -> Result<()>;
}

#[cfg(not(target_arch = "wasm32"))]
pub mod gl;

#[cfg(not(target_arch = "wasm32"))]
pub fn new() -> Result<Box<dyn Visitor>> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::new()? };
    Ok(Box::new(visitor))
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
