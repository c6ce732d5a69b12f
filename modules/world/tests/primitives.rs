#[macro_use]
extern crate approx;

use hydrogen::prelude::*;
use hydrogen_world::prelude::*;

/// Every triangle should be wound clockwise seen from the side its normals
/// point to, that is `(b - a) x (c - a)` agrees with the vertex normals.
fn assert_outward(data: &MeshData) {
    for tri in data.indices.chunks(3) {
        let v: Vec<_> = tri.iter().map(|&i| data.vertices[i as usize]).collect();
        let p: Vec<Vector3<f32>> = v.iter().map(|v| v.position.into()).collect();
        let n = v
            .iter()
            .fold(Vector3::new(0.0, 0.0, 0.0), |acc, v| acc + Vector3::from(v.normal));

        let face = (p[1] - p[0]).cross(p[2] - p[0]);
        assert!(face.dot(n) > 0.0, "{:?} is wound backwards.", tri);
    }
}

#[test]
fn sphere_counts() {
    let data = sphere(5.0, 16, 16);
    assert_eq!(data.vertices.len(), 17 * 17);
    assert_eq!(data.num_triangles(), 2 * 16 * 15);
    assert!(data.validate().is_ok());
    assert_relative_eq!(bounding_radius(&data), 5.0, epsilon = 1e-4);
    assert_outward(&data);

    for v in &data.vertices {
        let p = Vector3::from(v.position);
        assert_relative_eq!(p.magnitude(), 5.0, epsilon = 1e-4);
        assert_relative_eq!(p / 5.0, Vector3::from(v.normal), epsilon = 1e-5);
    }
}

#[test]
fn torus_counts() {
    let data = torus(75.0, 0.05, 32, 64);
    assert_eq!(data.vertices.len(), 33 * 65);
    assert_eq!(data.num_triangles(), 2 * 32 * 64);
    assert!(data.validate().is_ok());
    assert_relative_eq!(bounding_radius(&data), 75.05, epsilon = 1e-3);
    assert_outward(&data);

    for v in &data.vertices {
        assert!(v.position[2].abs() <= 0.05 + 1e-6);
    }
}

#[test]
fn ring_counts() {
    let data = ring(8.0, 14.0, 32);
    assert_eq!(data.vertices.len(), 33 * 2);
    assert_eq!(data.num_triangles(), 64);
    assert!(data.validate().is_ok());
    assert_relative_eq!(bounding_radius(&data), 14.0, epsilon = 1e-4);
    assert_outward(&data);

    for v in &data.vertices {
        let r = Vector3::from(v.position).magnitude();
        assert!(r > 8.0 - 1e-4 && r < 14.0 + 1e-4);
        assert!(v.texcoord[0] >= 0.0 && v.texcoord[0] <= 1.0);
    }
}

#[test]
fn degenerated_segments() {
    let data = sphere(1.0, 0, 0);
    assert_eq!(data.vertices.len(), 4 * 3);
    assert!(data.validate().is_ok());

    let data = ring(1.0, 2.0, 1);
    assert_eq!(data.num_triangles(), 6);
}
