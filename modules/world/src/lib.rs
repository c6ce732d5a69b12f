//! The 3d world of hydrogen: a scene graph of named entities with hierarchical
//! transforms, renderable components and a couple of procedural primitives.

#[macro_use]
extern crate hydrogen;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod assets;
pub mod renderable;
pub mod scene;
pub mod spatial;
pub mod tags;
pub mod utils;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::renderable::prelude::*;
    pub use super::scene::Scene;
    pub use super::spatial::prelude::*;
    pub use super::Entity;
}

impl_handle!(Entity);
