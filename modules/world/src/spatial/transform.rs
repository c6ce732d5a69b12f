use hydrogen::math::prelude::*;

/// `Transform` is used to store and manipulate the postiion, rotation and scale
/// of the object. We use a left handed, y-up world coordinate system.
///
/// Composition `a * b` applies `b` first, so a child's world transform is
/// `parent_world * child_local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            scale: 1.0,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
        }
    }
}

impl ::std::ops::Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Transform {
            position: self.rotation * (rhs.position * self.scale) + self.position,
            rotation: self.rotation * rhs.rotation,
            scale: self.scale * rhs.scale,
        }
    }
}

impl Transform {
    pub fn new<T, R>(position: T, rotation: R, scale: f32) -> Self
    where
        T: Into<Vector3<f32>>,
        R: Into<Quaternion<f32>>,
    {
        Transform {
            scale,
            position: position.into(),
            rotation: rotation.into(),
        }
    }

    /// A transform that only moves things.
    pub fn from_position<T: Into<Vector3<f32>>>(position: T) -> Self {
        Transform {
            position: position.into(),
            ..Default::default()
        }
    }

    /// Returns a transform that "un-does" this one, or `None` if the scale is zero.
    pub fn inverse(self) -> Option<Self> {
        if self.scale.abs() <= ::std::f32::EPSILON {
            return None;
        }

        let s = 1.0 / self.scale;
        let r = self.rotation.invert();
        let d = r.rotate_vector(self.position) * -s;

        Some(Transform {
            scale: s,
            rotation: r,
            position: d,
        })
    }

    /// Transforms direction from local space to transform's space. Not affected
    /// by scale or position.
    #[inline]
    pub fn transform_direction<T>(&self, v: T) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        self.rotation * v.into()
    }

    /// Transforms vector from local space to transform's space. Not affected by
    /// position.
    #[inline]
    pub fn transform_vector<T>(&self, v: T) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        self.rotation * (v.into() * self.scale)
    }

    /// Transforms points from local space to transform's space.
    #[inline]
    pub fn transform_point<T>(&self, v: T) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        self.rotation * (v.into() * self.scale) + self.position
    }

    /// The positive y-axis in transform's space.
    #[inline]
    pub fn up(&self) -> Vector3<f32> {
        self.transform_direction(Vector3::unit_y())
    }

    /// The positive z-axis in transform's space, which is where cameras look at.
    #[inline]
    pub fn forward(&self) -> Vector3<f32> {
        self.transform_direction(Vector3::unit_z())
    }

    /// The positive x-axis in transform's space.
    #[inline]
    pub fn right(&self) -> Vector3<f32> {
        self.transform_direction(Vector3::unit_x())
    }

    /// Returns the view matrix from world space to view space, ignoring scale.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        // M = ( T * R ) ^ -1
        let it = Matrix4::from_translation(-self.position);
        let ir = Matrix4::from(self.rotation).transpose();
        ir * it
    }

    /// Returns the matrix representation, M = T * R * S.
    pub fn matrix(&self) -> Matrix4<f32> {
        let m: Matrix3<_> = self.rotation.into();
        let mut m: Matrix4<_> = (m * self.scale).into();
        m.w = self.position.extend(1.0);
        m
    }
}
