use std::cell::RefCell;
use std::ffi::CString;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};
use crate::utils::hash::FastHashMap;

use super::super::super::assets::prelude::*;
use super::super::{UniformVar, Visitor};

struct GLShaderData {
    id: GLuint,
    state: RenderState,
    uniforms: RefCell<FastHashMap<String, GLint>>,
}

impl GLShaderData {
    unsafe fn uniform_location(&self, name: &str) -> Result<GLint> {
        let mut uniforms = self.uniforms.borrow_mut();
        match uniforms.get(name).cloned() {
            Some(location) => Ok(location),
            None => {
                let c_name = CString::new(name.as_bytes())?;
                let location = gl::GetUniformLocation(self.id, c_name.as_ptr());
                check()?;

                uniforms.insert(name.to_owned(), location);
                Ok(location)
            }
        }
    }
}

struct GLMeshData {
    vao: GLuint,
    vbo: GLuint,
    ibo: GLuint,
    num_idxes: usize,
}

struct GLMutableState {
    render_state: RenderState,
    binded_shader: Option<ShaderHandle>,
    binded_mesh: Option<MeshHandle>,
}

pub struct GLVisitor {
    state: GLMutableState,
    shaders: FastHashMap<ShaderHandle, GLShaderData>,
    meshes: FastHashMap<MeshHandle, GLMeshData>,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        let version = parse_str(gl::VERSION)?;
        let renderer = parse_str(gl::RENDERER)?;
        info!("GLVisitor: {} ({}).", version, renderer);

        let mut state = GLMutableState {
            render_state: RenderState::default(),
            binded_shader: None,
            binded_mesh: None,
        };

        Self::reset_render_state(&mut state)?;

        Ok(GLVisitor {
            state,
            shaders: FastHashMap::default(),
            meshes: FastHashMap::default(),
        })
    }
}

impl Visitor for GLVisitor {
    unsafe fn create_shader(
        &mut self,
        handle: ShaderHandle,
        params: &ShaderParams,
        vs: &str,
        fs: &str,
    ) -> Result<()> {
        let vs = Self::compile(gl::VERTEX_SHADER, vs)?;
        let fs = Self::compile(gl::FRAGMENT_SHADER, fs)?;
        let id = Self::link(&[vs, fs])?;

        gl::DetachShader(id, vs);
        gl::DeleteShader(vs);
        gl::DetachShader(id, fs);
        gl::DeleteShader(fs);
        check()?;

        let shader = GLShaderData {
            id,
            state: params.state,
            uniforms: RefCell::new(FastHashMap::default()),
        };

        for name in &params.uniforms {
            let location = shader.uniform_location(name)?;
            if location == -1 {
                bail!("Uniform({:?}) is undefined in shader sources.", name);
            }
        }

        self.shaders.insert(handle, shader);
        Ok(())
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        let shader = self
            .shaders
            .remove(&handle)
            .ok_or_else(|| format_err!("{:?} is invalid.", handle))?;

        if self.state.binded_shader == Some(handle) {
            self.state.binded_shader = None;
        }

        gl::DeleteProgram(shader.id);
        check()
    }

    unsafe fn create_mesh(&mut self, handle: MeshHandle, data: &MeshData) -> Result<()> {
        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        let vbo = Self::create_buffer(gl::ARRAY_BUFFER, as_bytes(&data.vertices))?;
        let ibo = Self::create_buffer(gl::ELEMENT_ARRAY_BUFFER, as_bytes(&data.indices))?;

        let stride = Vertex::stride() as GLsizei;
        let layout: [(Attribute, GLint, usize); 3] = [
            (Attribute::Position, 3, 0),
            (Attribute::Normal, 3, 12),
            (Attribute::Texcoord0, 2, 24),
        ];

        for &(attribute, size, offset) in &layout {
            let location = attribute as GLuint;
            gl::EnableVertexAttribArray(location);
            gl::VertexAttribPointer(
                location,
                size,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset as *const u8 as *const ::std::os::raw::c_void,
            );
        }

        gl::BindVertexArray(0);
        check()?;

        self.state.binded_mesh = None;
        self.meshes.insert(
            handle,
            GLMeshData {
                vao,
                vbo,
                ibo,
                num_idxes: data.indices.len(),
            },
        );

        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        let mesh = self
            .meshes
            .remove(&handle)
            .ok_or_else(|| format_err!("{:?} is invalid.", handle))?;

        if self.state.binded_mesh == Some(handle) {
            gl::BindVertexArray(0);
            self.state.binded_mesh = None;
        }

        gl::DeleteVertexArrays(1, &mesh.vao);
        gl::DeleteBuffers(1, &mesh.vbo);
        gl::DeleteBuffers(1, &mesh.ibo);
        check()
    }

    unsafe fn bind(&mut self, dimensions: Vector2<u32>, clear: Option<Color<f32>>) -> Result<()> {
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
        gl::Viewport(0, 0, dimensions.x as i32, dimensions.y as i32);

        if let Some(v) = clear {
            // The depth mask has to be enabled to clear the depth buffer.
            gl::DepthMask(gl::TRUE);
            self.state.render_state.depth_write = true;

            gl::ClearColor(v.r, v.g, v.b, v.a);
            gl::ClearDepth(1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        check()
    }

    unsafe fn draw(
        &mut self,
        shader: ShaderHandle,
        mesh: MeshHandle,
        uniforms: &[UniformVar],
    ) -> Result<u32> {
        // Bind program and associated uniforms.
        let shader_data = self
            .shaders
            .get(&shader)
            .ok_or_else(|| format_err!("{:?} is invalid.", shader))?;

        if self.state.binded_shader != Some(shader) {
            gl::UseProgram(shader_data.id);
            check()?;

            Self::set_cull_face(&mut self.state, shader_data.state.cull_face)?;
            Self::set_depth_test(
                &mut self.state,
                shader_data.state.depth_write,
                shader_data.state.depth_test,
            )?;

            self.state.binded_shader = Some(shader);
        }

        for &(field, variable) in uniforms {
            let location = shader_data.uniform_location(field)?;
            if location == -1 {
                bail!("Undefined uniform field {:?}.", field);
            }

            Self::bind_uniform_variable(location, &variable)?;
        }

        let mesh_data = self
            .meshes
            .get(&mesh)
            .ok_or_else(|| format_err!("{:?} is invalid.", mesh))?;

        if self.state.binded_mesh != Some(mesh) {
            gl::BindVertexArray(mesh_data.vao);
            self.state.binded_mesh = Some(mesh);
        }

        gl::DrawElements(
            gl::TRIANGLES,
            mesh_data.num_idxes as GLsizei,
            gl::UNSIGNED_INT,
            ::std::ptr::null(),
        );

        check()?;
        Ok((mesh_data.num_idxes / 3) as u32)
    }

    unsafe fn flush(&mut self) -> Result<()> {
        gl::Finish();
        check()
    }
}

impl GLVisitor {
    unsafe fn bind_uniform_variable(location: GLint, variable: &UniformVariable) -> Result<()> {
        match *variable {
            UniformVariable::F32(v) => gl::Uniform1f(location, v),
            UniformVariable::Vector3(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
            UniformVariable::Vector4(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Matrix4(v) => {
                gl::UniformMatrix4fv(location, 1, gl::FALSE, v[0].as_ptr())
            }
        }

        check()
    }

    unsafe fn reset_render_state(state: &mut GLMutableState) -> Result<()> {
        gl::Disable(gl::CULL_FACE);
        state.render_state.cull_face = CullFace::Nothing;

        gl::FrontFace(gl::CW);

        gl::Disable(gl::DEPTH_TEST);
        gl::DepthMask(gl::FALSE);
        gl::DepthFunc(gl::LEQUAL);
        state.render_state.depth_test = false;
        state.render_state.depth_write = false;

        gl::Disable(gl::BLEND);
        gl::BindFramebuffer(gl::FRAMEBUFFER, 0);

        check()
    }

    /// Specify whether front- or back-facing polygons can be culled.
    unsafe fn set_cull_face(state: &mut GLMutableState, face: CullFace) -> Result<()> {
        let rs = &mut state.render_state;

        if rs.cull_face != face {
            if face != CullFace::Nothing {
                gl::Enable(gl::CULL_FACE);
                gl::CullFace(match face {
                    CullFace::Front => gl::FRONT,
                    _ => gl::BACK,
                });
            } else {
                gl::Disable(gl::CULL_FACE);
            }

            rs.cull_face = face;
            check()?;
        }

        Ok(())
    }

    /// Enable or disable writing into the depth buffer and the depth test.
    unsafe fn set_depth_test(state: &mut GLMutableState, write: bool, test: bool) -> Result<()> {
        let rs = &mut state.render_state;

        // Note that even if the depth buffer exists and the depth mask is non-zero,
        // the depth buffer is not updated if the depth test is disabled.
        let enable = test || write;
        if enable != (rs.depth_test || rs.depth_write) {
            if enable {
                gl::Enable(gl::DEPTH_TEST);
            } else {
                gl::Disable(gl::DEPTH_TEST);
            }
        }

        gl::DepthFunc(if test { gl::LEQUAL } else { gl::ALWAYS });

        if rs.depth_write != write {
            gl::DepthMask(if write { gl::TRUE } else { gl::FALSE });
        }

        rs.depth_test = test;
        rs.depth_write = write;
        check()
    }

    unsafe fn compile(kind: GLenum, src: &str) -> Result<GLuint> {
        let shader = gl::CreateShader(kind);
        let c_str = CString::new(src.as_bytes())?;
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ::std::ptr::null());
        gl::CompileShader(shader);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == GLint::from(gl::TRUE) {
            return Ok(shader);
        }

        let log = info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog);
        gl::DeleteShader(shader);
        bail!("[GL] Failed to compile shader: {}\n{}", log, src);
    }

    unsafe fn link(shaders: &[GLuint]) -> Result<GLuint> {
        let program = gl::CreateProgram();
        for &v in shaders {
            gl::AttachShader(program, v);
        }

        // Vertex attributes live at fixed locations, shared by every program.
        for &v in &Attribute::all() {
            let name = CString::new(v.name())?;
            gl::BindAttribLocation(program, v as GLuint, name.as_ptr());
        }

        gl::LinkProgram(program);

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status == GLint::from(gl::TRUE) {
            return Ok(program);
        }

        let log = info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
        gl::DeleteProgram(program);
        bail!("[GL] Failed to link program: {}", log);
    }

    unsafe fn create_buffer(tp: GLenum, data: &[u8]) -> Result<GLuint> {
        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        if id == 0 {
            bail!("[GL] Failed to generate buffer object.");
        }

        gl::BindBuffer(tp, id);

        let value = if data.is_empty() {
            ::std::ptr::null()
        } else {
            data.as_ptr() as *const ::std::os::raw::c_void
        };

        gl::BufferData(tp, data.len() as isize, value, gl::STATIC_DRAW);
        check()?;
        Ok(id)
    }
}

fn as_bytes<T: Copy>(values: &[T]) -> &[u8] {
    let len = values.len() * ::std::mem::size_of::<T>();
    unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
}

unsafe fn parse_str(id: GLenum) -> Result<String> {
    let ptr = gl::GetString(id);
    if ptr.is_null() {
        bail!("[GL] Failed to query string {}.", id);
    }

    let v = ::std::ffi::CStr::from_ptr(ptr as *const _);
    Ok(v.to_string_lossy().into_owned())
}

type GetIv = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

/// Reads the info log of a shader or program object.
unsafe fn info_log(id: GLuint, get_iv: GetIv, get_log: GetInfoLog) -> String {
    let mut len = 0;
    get_iv(id, gl::INFO_LOG_LENGTH, &mut len);

    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written = 0;
    get_log(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
    buf.truncate(written.max(0) as usize);

    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn check() -> Result<()> {
    let reason = match gl::GetError() {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => "an enum argument is out of range",
        gl::INVALID_VALUE => "a numeric argument is out of range",
        gl::INVALID_OPERATION => "the operation is not allowed in the current state",
        gl::INVALID_FRAMEBUFFER_OPERATION => "the framebuffer object is not complete",
        gl::OUT_OF_MEMORY => "there is not enough memory left to execute the command",
        _ => "unknown error",
    };

    bail!("[GL] {}.", reason)
}
