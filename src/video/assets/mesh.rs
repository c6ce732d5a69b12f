//! Immutable triangle meshes.

use crate::math::prelude::{Vector2, Vector3};

impl_handle!(MeshHandle);

/// The vertex layout shared by every mesh: position, normal and uv, tightly packed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>, texcoord: Vector2<f32>) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            texcoord: texcoord.into(),
        }
    }

    #[inline]
    pub fn stride() -> usize {
        ::std::mem::size_of::<Vertex>()
    }
}

/// Triangle list, three indices per face.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.indices.len() % 3 != 0 {
            bail!("the number of indices {} is not a multiple of 3.", self.indices.len());
        }

        let len = self.vertices.len() as u32;
        if let Some(v) = self.indices.iter().find(|&&v| v >= len) {
            bail!("index {} is out of bounds ({} vertices).", v, len);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate() {
        let v = Vertex::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector2::new(0.0, 0.0),
        );

        let mut data = MeshData {
            vertices: vec![v; 3],
            indices: vec![0, 1, 2],
        };

        assert!(data.validate().is_ok());
        assert_eq!(data.num_triangles(), 1);
        assert_eq!(Vertex::stride(), 32);

        data.indices = vec![0, 1, 3];
        assert!(data.validate().is_err());

        data.indices = vec![0, 1];
        assert!(data.validate().is_err());
    }
}
