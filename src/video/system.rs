use crate::errors::*;
use crate::math::prelude::{Color, Vector2};
use crate::utils::handle_pool::HandlePool;

use super::assets::prelude::*;
use super::backends::{self, UniformVar, Visitor};

/// Statistics of a finished frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub drawcalls: u32,
    pub triangles: u32,
}

/// The centralized management of video sub-system.
pub struct VideoSystem {
    visitor: Box<dyn Visitor>,
    shaders: HandlePool<ShaderHandle>,
    meshes: HandlePool<MeshHandle>,
    frame: FrameInfo,
    headless: bool,
}

impl VideoSystem {
    /// Creates the video system on the GL context that is current on this thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self> {
        Ok(VideoSystem::with(backends::new()?, false))
    }

    pub fn headless() -> Self {
        VideoSystem::with(backends::new_headless(), true)
    }

    fn with(visitor: Box<dyn Visitor>, headless: bool) -> Self {
        VideoSystem {
            visitor,
            shaders: HandlePool::new(),
            meshes: HandlePool::new(),
            frame: FrameInfo::default(),
            headless,
        }
    }

    #[inline]
    pub fn is_headless(&self) -> bool {
        self.headless
    }

    /// Creates a shader program with the render states in `params`.
    pub fn create_shader(
        &mut self,
        params: &ShaderParams,
        vs: &str,
        fs: &str,
    ) -> Result<ShaderHandle> {
        params.validate(vs, fs)?;

        let handle = self.shaders.create();
        if let Err(err) = unsafe { self.visitor.create_shader(handle, params, vs, fs) } {
            self.shaders.free(handle);
            return Err(err);
        }

        Ok(handle)
    }

    pub fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        if !self.shaders.free(handle) {
            bail!("{:?} is invalid.", handle);
        }

        unsafe { self.visitor.delete_shader(handle) }
    }

    /// Uploads a triangle mesh.
    pub fn create_mesh(&mut self, data: &MeshData) -> Result<MeshHandle> {
        data.validate()?;

        let handle = self.meshes.create();
        if let Err(err) = unsafe { self.visitor.create_mesh(handle, data) } {
            self.meshes.free(handle);
            return Err(err);
        }

        Ok(handle)
    }

    pub fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if !self.meshes.free(handle) {
            bail!("{:?} is invalid.", handle);
        }

        unsafe { self.visitor.delete_mesh(handle) }
    }

    #[inline]
    pub fn is_shader_alive(&self, handle: ShaderHandle) -> bool {
        self.shaders.contains(handle)
    }

    #[inline]
    pub fn is_mesh_alive(&self, handle: MeshHandle) -> bool {
        self.meshes.contains(handle)
    }

    /// Starts drawing into the window, optionally clearing it first.
    pub fn bind(&mut self, dimensions: Vector2<u32>, clear: Option<Color<f32>>) -> Result<()> {
        unsafe { self.visitor.bind(dimensions, clear) }
    }

    pub fn draw(
        &mut self,
        shader: ShaderHandle,
        mesh: MeshHandle,
        vars: &[UniformVar],
    ) -> Result<()> {
        if !self.shaders.contains(shader) {
            bail!("{:?} is invalid.", shader);
        }

        if !self.meshes.contains(mesh) {
            bail!("{:?} is invalid.", mesh);
        }

        let triangles = unsafe { self.visitor.draw(shader, mesh, vars)? };
        self.frame.drawcalls += 1;
        self.frame.triangles += triangles;
        Ok(())
    }

    /// Finishes current frame, and returns its statistics.
    pub fn advance(&mut self) -> Result<FrameInfo> {
        unsafe { self.visitor.flush()? };

        let info = self.frame;
        self.frame = FrameInfo::default();
        Ok(info)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::prelude::Vector3;

    fn triangle() -> MeshData {
        let v = Vertex::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector2::new(0.0, 0.0),
        );

        MeshData {
            vertices: vec![v; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn headless_frame() {
        let mut video = VideoSystem::headless();
        let shader = video
            .create_shader(&ShaderParams::default(), "vs", "fs")
            .unwrap();
        let mesh = video.create_mesh(&triangle()).unwrap();

        video.bind(Vector2::new(4, 4), Some(Color::black())).unwrap();
        video.draw(shader, mesh, &[("u_Color", Color::white().into())]).unwrap();
        video.draw(shader, mesh, &[]).unwrap();

        let info = video.advance().unwrap();
        assert_eq!(info, FrameInfo { drawcalls: 2, triangles: 2 });
        assert_eq!(video.advance().unwrap(), FrameInfo::default());
    }

    #[test]
    fn stale_handles() {
        let mut video = VideoSystem::headless();
        let shader = video
            .create_shader(&ShaderParams::default(), "vs", "fs")
            .unwrap();
        let mesh = video.create_mesh(&triangle()).unwrap();

        video.delete_mesh(mesh).unwrap();
        assert!(!video.is_mesh_alive(mesh));
        assert!(video.draw(shader, mesh, &[]).is_err());
        assert!(video.delete_mesh(mesh).is_err());

        assert!(video.create_shader(&ShaderParams::default(), "", "fs").is_err());
    }
}
