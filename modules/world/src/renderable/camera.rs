//! A device through which the player views the world.

use hydrogen::math::prelude::*;

use crate::spatial::prelude::Transform;

/// A `Camera` is a device through which the player views the world. It looks
/// along the positive z-axis of its entity.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    projection: Projection<f32>,

    #[doc(hidden)]
    pub(crate) transform: Transform,
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Deg(60.0), 1.0, 0.1, 100.0)
    }
}

impl Camera {
    /// Creates a new camera with projection.
    pub fn new(projection: Projection<f32>) -> Self {
        Camera {
            projection,
            transform: Transform::default(),
        }
    }

    /// Creates a new camera with orthographics projection.
    pub fn ortho(w: f32, h: f32, n: f32, f: f32) -> Self {
        Self::new(Projection::ortho(w, h, n, f))
    }

    /// Creates a new camera with perspective projection.
    pub fn perspective<T>(fovy: T, aspect: f32, n: f32, f: f32) -> Self
    where
        T: Into<Rad<f32>>,
    {
        Self::new(Projection::perspective(fovy.into(), aspect, n, f))
    }

    /// Sets the near/far clipping plane distances.
    pub fn set_clip_plane(&mut self, near: f32, far: f32) {
        self.projection = match self.projection {
            Projection::Ortho { width, height, .. } => Projection::ortho(width, height, near, far),
            Projection::Perspective { fovy, aspect, .. } => {
                Projection::perspective(fovy, aspect, near, far)
            }
        };
    }

    /// Gets the near clip plane.
    #[inline]
    pub fn near_clip_plane(&self) -> f32 {
        match self.projection {
            Projection::Ortho { near, .. } => near,
            Projection::Perspective { near, .. } => near,
        }
    }

    /// Gets the far clip plane.
    #[inline]
    pub fn far_clip_plane(&self) -> f32 {
        match self.projection {
            Projection::Ortho { far, .. } => far,
            Projection::Perspective { far, .. } => far,
        }
    }

    /// Sets the aspect ratio of width / height. Non-positive or non-finite ratios,
    /// which come from minimized windows, are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.projection = self.projection.with_aspect(aspect);
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.projection.aspect()
    }

    /// Gets the projection type and its payload.
    #[inline]
    pub fn projection(&self) -> Projection<f32> {
        self.projection
    }

    /// Sets the projection type.
    #[inline]
    pub fn set_projection(&mut self, projection: Projection<f32>) {
        self.projection = projection;
    }

    #[inline]
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection.to_matrix()
    }

    /// Gets the view matrix of the transform this camera was last drawn with.
    #[inline]
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.transform.view_matrix()
    }

    /// Gets the world transform this camera was last drawn with.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aspect() {
        let mut camera = Camera::perspective(Deg(75.0), 1.0, 0.1, 10000.0);
        camera.set_aspect(800.0 / 600.0);
        assert_ulps_eq!(camera.aspect(), 800.0 / 600.0);

        camera.set_aspect(0.0);
        camera.set_aspect(::std::f32::NAN);
        assert_ulps_eq!(camera.aspect(), 800.0 / 600.0);

        camera.set_clip_plane(1.0, 50.0);
        assert_eq!(camera.near_clip_plane(), 1.0);
        assert_eq!(camera.far_clip_plane(), 50.0);
        assert_ulps_eq!(camera.aspect(), 800.0 / 600.0);
    }
}
