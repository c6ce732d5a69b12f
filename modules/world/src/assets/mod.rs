//! Procedural meshes.

pub mod primitive;

pub mod prelude {
    pub use super::primitive::{bounding_radius, ring, sphere, torus};
}
