//! This module contains the math utils that mainly comes from `cgmath`.

pub mod color;
pub mod projection;

pub mod prelude {
    pub use cgmath::prelude::{
        Angle, Array, ElementWise, EuclideanSpace, InnerSpace, Matrix, MetricSpace, One,
        Rotation, Rotation2, Rotation3, SquareMatrix, VectorSpace, Zero,
    };
    pub use cgmath::{
        Basis3, Deg, Euler, Matrix3, Matrix4, Point2, Point3, Quaternion, Rad, Vector2, Vector3,
        Vector4,
    };

    pub use super::color::Color;
    pub use super::projection::Projection;
}
