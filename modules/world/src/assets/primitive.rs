//! Builders of the primitive meshes: uv spheres, tori and flat rings.
//!
//! Triangles are wound clockwise when looking at their front face, which suits
//! the left handed coordinates of the world.

use std::f32::consts::PI;

use hydrogen::math::prelude::*;
use hydrogen::video::prelude::{MeshData, Vertex};

/// Builds a uv sphere around the origin. The poles lie on the y-axis.
///
/// There are `(width_segments + 1) * (height_segments + 1)` vertices, the seam and the
/// poles are duplicated so every vertex could have its own texcoord.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let theta = v * PI;

        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let phi = u * PI * 2.0;

            let normal = Vector3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );

            vertices.push(Vertex::new(
                normal * radius,
                normal,
                Vector2::new(u, 1.0 - v),
            ));
        }
    }

    let idx = |ix: u32, iy: u32| iy * (w + 1) + ix;

    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = idx(ix, iy);
            let b = idx(ix + 1, iy);
            let c = idx(ix, iy + 1);
            let d = idx(ix + 1, iy + 1);

            // Triangles touching the poles would be degenerated.
            if iy != 0 {
                indices.extend_from_slice(&[a, c, b]);
            }

            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Builds a torus lying in the xy plane. `radius` is the distance from the center to
/// the center of the tube.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);

    let mut vertices = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * PI * 2.0;

        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * PI * 2.0;

            let position = Vector3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );

            let center = Vector3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize();

            vertices.push(Vertex::new(
                position,
                normal,
                Vector2::new(i as f32 / tubular as f32, j as f32 / radial as f32),
            ));
        }
    }

    let idx = |i: u32, j: u32| j * (tubular + 1) + i;

    let mut indices = Vec::with_capacity((radial * tubular * 6) as usize);
    for j in 0..radial {
        for i in 0..tubular {
            let a = idx(i, j);
            let b = idx(i + 1, j);
            let c = idx(i, j + 1);
            let d = idx(i + 1, j + 1);

            indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }

    MeshData { vertices, indices }
}

/// Builds a flat annulus in the xy plane, facing the positive z-axis.
pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> MeshData {
    let segments = theta_segments.max(3);

    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);
    for &radius in &[inner_radius, outer_radius] {
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * PI * 2.0;
            let (x, y) = (radius * theta.cos(), radius * theta.sin());

            vertices.push(Vertex::new(
                Vector3::new(x, y, 0.0),
                Vector3::unit_z(),
                Vector2::new(
                    (x / outer_radius + 1.0) * 0.5,
                    (y / outer_radius + 1.0) * 0.5,
                ),
            ));
        }
    }

    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for i in 0..segments {
        let a = i;
        let b = i + 1;
        let c = i + segments + 1;
        let d = i + segments + 2;

        indices.extend_from_slice(&[a, c, b, b, c, d]);
    }

    MeshData { vertices, indices }
}

/// The distance from the origin to the farthest vertex.
pub fn bounding_radius(data: &MeshData) -> f32 {
    data.vertices
        .iter()
        .map(|v| Vector3::from(v.position).magnitude())
        .fold(0.0, f32::max)
}
