use hydrogen::errors::Result;
use hydrogen::math::prelude::*;
use hydrogen::video::prelude::*;

use crate::utils::prelude::Component;
use crate::Entity;

use super::material::{Material, Shading};
use super::lit::LitSource;
use super::{Camera, Lit, MeshRenderer};

const UNIFORMS: [&str; 7] = [
    "u_MVPMatrix",
    "u_NormalMatrix",
    "u_Diffuse",
    "u_GlobalAmbient",
    "u_DirLitDir",
    "u_DirLitColor",
    "u_Lighting",
];

/// A simple renderer that draws lambert or unlit colors into mesh objects with
/// one directional light and any number of ambient lights.
pub struct SimpleRenderer {
    video: VideoSystem,
    materials: Component<Material>,

    shader: ShaderHandle,
    double_sided_shader: ShaderHandle,

    dimensions: Vector2<u32>,
    clear_color: Color<f32>,
    frame: FrameInfo,
}

impl Drop for SimpleRenderer {
    fn drop(&mut self) {
        for &v in &[self.shader, self.double_sided_shader] {
            if let Err(err) = self.video.delete_shader(v) {
                warn!("Failed to delete shader {:?}: {}", v, err);
            }
        }
    }
}

impl SimpleRenderer {
    /// Creates a new `SimpleRenderer` that draws into a viewport of `dimensions`.
    pub fn new(mut video: VideoSystem, dimensions: Vector2<u32>) -> Result<Self> {
        let vs = format!("#version 330 core\n{}", include_str!("shaders/simple.vs"));
        let fs = format!("#version 330 core\n{}", include_str!("shaders/simple.fs"));

        let mut params = ShaderParams::default();
        params.uniforms = UNIFORMS.to_vec();
        params.state.cull_face = CullFace::Back;
        let shader = video.create_shader(&params, &vs, &fs)?;

        params.state.cull_face = CullFace::Nothing;
        let double_sided_shader = video.create_shader(&params, &vs, &fs)?;

        info!(
            "Create simple renderer with {}x{} viewport (headless: {}).",
            dimensions.x,
            dimensions.y,
            video.is_headless()
        );

        Ok(SimpleRenderer {
            video,
            materials: Component::new(),
            shader,
            double_sided_shader,
            dimensions,
            clear_color: Color::black(),
            frame: FrameInfo::default(),
        })
    }

    #[inline]
    pub fn viewport(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    pub fn set_clear_color<T: Into<Color<f32>>>(&mut self, color: T) {
        self.clear_color = color.into();
    }

    /// Statistics of the last submission.
    #[inline]
    pub fn frame_info(&self) -> FrameInfo {
        self.frame
    }

    #[inline]
    pub fn video(&self) -> &VideoSystem {
        &self.video
    }
}

impl super::Renderer for SimpleRenderer {
    type Mtl = Material;

    fn create_mesh(&mut self, data: &MeshData) -> Result<MeshHandle> {
        self.video.create_mesh(data)
    }

    fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        self.video.delete_mesh(handle)
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
        self.dimensions = dimensions;
    }

    fn submit(&mut self, camera: &Camera, lits: &[Lit], meshes: &[MeshRenderer]) -> Result<()> {
        let view_projection = camera.projection_matrix() * camera.view_matrix();

        let mut ambient = [0.0f32; 3];
        let mut dir_lit = None;
        for lit in lits.iter().filter(|v| v.enable) {
            match lit.source {
                LitSource::Ambient => {
                    let radiance = lit.radiance();
                    for (lhs, rhs) in ambient.iter_mut().zip(radiance.iter()) {
                        *lhs += *rhs;
                    }
                }
                LitSource::Dir => {
                    if dir_lit.is_none() {
                        dir_lit = Some((lit.direction().normalize(), lit.radiance()));
                    }
                }
            }
        }

        let (dir, dir_color) = dir_lit.unwrap_or((Vector3::new(0.0, 0.0, 1.0), [0.0; 3]));

        self.video.bind(self.dimensions, Some(self.clear_color))?;
        for mesh in meshes.iter().filter(|v| v.visible) {
            let model = mesh.transform.matrix();
            let normal = model.invert().map(|v| v.transpose()).unwrap_or(model);

            let mtl = self.materials.get(mesh.ent).cloned().unwrap_or_default();
            let lighting: f32 = match mtl.shading {
                Shading::Lambert => 1.0,
                Shading::Unlit => 0.0,
            };

            let shader = if mtl.double_sided {
                self.double_sided_shader
            } else {
                self.shader
            };

            let vars: [UniformVar; 7] = [
                ("u_MVPMatrix", (view_projection * model).into()),
                ("u_NormalMatrix", normal.into()),
                ("u_Diffuse", mtl.diffuse().into()),
                ("u_GlobalAmbient", ambient.into()),
                ("u_DirLitDir", dir.into()),
                ("u_DirLitColor", dir_color.into()),
                ("u_Lighting", lighting.into()),
            ];

            self.video.draw(shader, mesh.mesh, &vars)?;
        }

        self.frame = self.video.advance()?;
        trace!(
            "Submit {} drawcalls with {} triangles.",
            self.frame.drawcalls,
            self.frame.triangles
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::renderable::Renderer;
    use hydrogen::utils::handle::HandleLike;

    fn triangle() -> MeshData {
        let v = Vertex::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector2::new(0.0, 0.0),
        );

        MeshData {
            vertices: vec![v; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn submit_headless() {
        let video = VideoSystem::headless();
        let mut renderer = SimpleRenderer::new(video, Vector2::new(64, 64)).unwrap();
        let mesh = renderer.create_mesh(&triangle()).unwrap();

        let e1 = Entity::new(0, 1);
        let e2 = Entity::new(1, 1);
        renderer.add_mtl(e1, Material::unlit(Color::red()).with_double_sided(true));

        let mut meshes = vec![MeshRenderer::from(mesh); 2];
        meshes[0].ent = e1;
        meshes[1].ent = e2;

        let lits = [Lit::ambient(Color::white(), 0.25), Lit::dir(Color::white(), 1.0)];
        renderer.submit(&Camera::default(), &lits, &meshes).unwrap();
        assert_eq!(
            renderer.frame_info(),
            FrameInfo {
                drawcalls: 2,
                triangles: 2
            }
        );

        meshes[1].visible = false;
        renderer.submit(&Camera::default(), &lits, &meshes).unwrap();
        assert_eq!(renderer.frame_info().drawcalls, 1);

        renderer.delete_mesh(mesh).unwrap();
        assert!(renderer.submit(&Camera::default(), &lits, &meshes).is_err());
    }
}
