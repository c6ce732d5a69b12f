//! Finds the body under the cursor.

use hydrogen::math::prelude::*;
use hydrogen_world::prelude::{Entity, Renderer, Scene};

use crate::atom::Hydrogen;
use crate::focus::FocusTarget;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f32>,
    /// Always normalized.
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new<T1, T2>(origin: T1, direction: T2) -> Self
    where
        T1: Into<Vector3<f32>>,
        T2: Into<Vector3<f32>>,
    {
        Ray {
            origin: origin.into(),
            direction: direction.into().normalize(),
        }
    }

    /// Casts a ray from the near plane through `cursor`. The cursor and the
    /// `dimensions` of viewport are both measured from the bottom-left corner.
    pub fn from_screen(
        projection: Matrix4<f32>,
        view: Matrix4<f32>,
        cursor: Vector2<f32>,
        dimensions: Vector2<f32>,
    ) -> Option<Ray> {
        if dimensions.x <= 0.0 || dimensions.y <= 0.0 {
            return None;
        }

        let inverse = (projection * view).invert()?;
        let x = cursor.x / dimensions.x * 2.0 - 1.0;
        let y = cursor.y / dimensions.y * 2.0 - 1.0;

        let unproject = |z: f32| {
            let v = inverse * Vector4::new(x, y, z, 1.0);
            if v.w.abs() <= ::std::f32::EPSILON {
                None
            } else {
                Some(v.truncate() / v.w)
            }
        };

        let near = unproject(-1.0)?;
        let far = unproject(1.0)?;
        let direction = far - near;
        if direction.magnitude2() <= ::std::f32::EPSILON {
            return None;
        }

        Some(Ray::new(near, direction))
    }

    /// Returns the distance to the first intersection with the sphere, or zero
    /// if the origin is inside.
    pub fn intersect_sphere(&self, center: Vector3<f32>, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.magnitude2() - radius * radius;

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sq = discriminant.sqrt();
        if -b + sq < 0.0 {
            return None;
        }

        Some((-b - sq).max(0.0))
    }
}

/// Picks the nearest body of `atom` under `cursor` as seen from `camera`.
pub fn pick<R: Renderer>(
    scene: &Scene<R>,
    camera: Entity,
    atom: &Hydrogen,
    cursor: Vector2<f32>,
    dimensions: Vector2<f32>,
) -> Option<FocusTarget> {
    let projection = scene.camera(camera)?.projection_matrix();
    let view = scene.nodes.transform(camera)?.view_matrix();
    let ray = Ray::from_screen(projection, view, cursor, dimensions)?;

    let mut nearest: Option<(FocusTarget, f32)> = None;
    for &v in &FocusTarget::ALL {
        let body = atom.body(v);
        let (center, scale) = match (scene.nodes.position(body), scene.nodes.scale(body)) {
            (Some(center), Some(scale)) => (center, scale),
            _ => continue,
        };

        if let Some(t) = ray.intersect_sphere(center, atom.radius(v) * scale) {
            if nearest.map(|(_, d)| t < d).unwrap_or(true) {
                nearest = Some((v, t));
            }
        }
    }

    if let Some((v, t)) = nearest {
        debug!("Pick {} at distance {}.", v, t);
    }

    nearest.map(|(v, _)| v)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sphere() {
        let ray = Ray::new([0.0, 0.0, -10.0], [0.0, 0.0, 2.0]);
        assert_ulps_eq!(ray.intersect_sphere(Vector3::zero(), 1.0).unwrap(), 9.0);
        assert_eq!(ray.intersect_sphere(Vector3::new(0.0, 2.0, 0.0), 1.0), None);
        assert_eq!(ray.intersect_sphere(Vector3::new(0.0, 0.0, -20.0), 1.0), None);
        assert_eq!(ray.intersect_sphere(Vector3::new(0.0, 0.0, -10.0), 1.0), Some(0.0));
    }

    #[test]
    fn screen() {
        // Looks from the origin along +z.
        let projection = Projection::perspective(Rad(1.0), 1.0, 0.1, 100.0).to_matrix();
        let view = Matrix4::one();
        let dimensions = Vector2::new(100.0, 100.0);

        let ray = Ray::from_screen(projection, view, Vector2::new(50.0, 50.0), dimensions).unwrap();
        assert_relative_eq!(ray.direction, Vector3::unit_z(), epsilon = 1e-4);
        assert_relative_eq!(ray.origin, Vector3::new(0.0, 0.0, 0.1), epsilon = 1e-4);

        let cursor = Vector2::new(50.0, 100.0);
        let ray = Ray::from_screen(projection, view, cursor, dimensions).unwrap();
        assert!(ray.direction.y > 0.0);
        assert_relative_eq!(ray.direction.y.atan2(ray.direction.z), 0.5, epsilon = 1e-4);

        assert!(Ray::from_screen(projection, view, Vector2::zero(), Vector2::zero()).is_none());
    }
}
