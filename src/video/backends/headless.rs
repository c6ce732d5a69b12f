use super::super::assets::prelude::*;
use super::{UniformVar, Visitor};

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};
use crate::utils::hash::FastHashMap;

/// Keeps track of the mesh sizes so draw statistics match a real backend.
pub struct HeadlessVisitor {
    meshes: FastHashMap<MeshHandle, u32>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            meshes: FastHashMap::default(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn create_shader(
        &mut self,
        _: ShaderHandle,
        _: &ShaderParams,
        _: &str,
        _: &str,
    ) -> Result<()> {
        Ok(())
    }

    unsafe fn delete_shader(&mut self, _: ShaderHandle) -> Result<()> {
        Ok(())
    }

    unsafe fn create_mesh(&mut self, handle: MeshHandle, data: &MeshData) -> Result<()> {
        self.meshes.insert(handle, data.num_triangles() as u32);
        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        self.meshes.remove(&handle);
        Ok(())
    }

    unsafe fn bind(&mut self, _: Vector2<u32>, _: Option<Color<f32>>) -> Result<()> {
        Ok(())
    }

    unsafe fn draw(&mut self, _: ShaderHandle, mesh: MeshHandle, _: &[UniformVar]) -> Result<u32> {
        Ok(self.meshes.get(&mesh).cloned().unwrap_or(0))
    }

    unsafe fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
