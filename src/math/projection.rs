use cgmath::{Angle, BaseFloat, Matrix4, Rad};

/// Projection type of camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection<S: BaseFloat> {
    /// Orthographic projection.
    Ortho {
        /// The width of orthographic window.
        width: S,
        /// The height of orthographic window.
        height: S,
        /// The near clip plane.
        near: S,
        /// The far clip plane.
        far: S,
    },

    /// Perspective projection.
    Perspective {
        /// Field of view in vertical.
        fovy: Rad<S>,
        /// The aspect of width / height.
        aspect: S,
        /// The near clip plane.
        near: S,
        /// The far clip plane.
        far: S,
    },
}

impl<S: BaseFloat> Projection<S> {
    pub fn ortho(width: S, height: S, near: S, far: S) -> Self {
        Projection::Ortho {
            width,
            height,
            near,
            far,
        }
    }

    pub fn perspective(fovy: Rad<S>, aspect: S, near: S, far: S) -> Self {
        Projection::Perspective {
            fovy,
            aspect,
            near,
            far,
        }
    }

    /// Returns a copy of this projection with the aspect ratio replaced. Orthographic
    /// projections keep their height and adapt the width.
    pub fn with_aspect(self, aspect: S) -> Self {
        match self {
            Projection::Ortho {
                height, near, far, ..
            } => Projection::Ortho {
                width: height * aspect,
                height,
                near,
                far,
            },
            Projection::Perspective {
                fovy, near, far, ..
            } => Projection::Perspective {
                fovy,
                aspect,
                near,
                far,
            },
        }
    }

    /// Gets the aspect ratio of width / height.
    pub fn aspect(&self) -> S {
        match *self {
            Projection::Ortho { width, height, .. } => width / height,
            Projection::Perspective { aspect, .. } => aspect,
        }
    }

    /// Gets the projection matrix in left hand coordinates.
    pub fn to_matrix(&self) -> Matrix4<S> {
        match *self {
            Projection::Ortho {
                width,
                height,
                near,
                far,
            } => ortho_matrix(width, height, near, far),
            Projection::Perspective {
                fovy,
                aspect,
                near,
                far,
            } => perspective_matrix(fovy, aspect, near, far),
        }
    }
}

/// Gets the orthographic projection matrix in left hand coordinates.
fn ortho_matrix<S: BaseFloat>(w: S, h: S, n: S, f: S) -> Matrix4<S> {
    let half = S::from(0.5).unwrap();
    let two = S::from(2.0).unwrap();
    let zero = S::zero();
    let one = S::one();

    let (hw, hh) = (w * half, h * half);

    let (l0, r0) = (-hw, hw);
    let (b0, t0) = (-hh, hh);

    let c0 = [two / (r0 - l0), zero, zero, zero];
    let c1 = [zero, two / (t0 - b0), zero, zero];
    let c2 = [zero, zero, two / (f - n), zero];
    let c3 = [
        (r0 + l0) / (l0 - r0),
        (t0 + b0) / (b0 - t0),
        (f + n) / (n - f),
        one,
    ];
    Matrix4::from_cols(c0.into(), c1.into(), c2.into(), c3.into())
}

/// Gets the perspective projection matrix in left hand coordinates.
fn perspective_matrix<S: BaseFloat>(fovy: Rad<S>, aspect: S, n: S, f: S) -> Matrix4<S> {
    let half = S::from(0.5).unwrap();
    let two = S::from(2.0).unwrap();
    let zero = S::zero();
    let one = S::one();

    let fc = Rad::cot(fovy * half);
    let c0 = [fc / aspect, zero, zero, zero];
    let c1 = [zero, fc, zero, zero];
    let c2 = [zero, zero, (f + n) / (f - n), one];
    let c3 = [zero, zero, (two * f * n) / (n - f), zero];
    Matrix4::from_cols(c0.into(), c1.into(), c2.into(), c3.into())
}
