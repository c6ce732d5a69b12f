//! # What is This?
//!
//! Hydrogen is a small framework for animated, hierarchical 3d scenes. It bundles
//! a unified window and input layer, frame timing, a light OpenGL backend and the
//! handle utilities that the scene graph in `hydrogen-world` is built upon.
//!
//! Everything is owned explicitly: an `Engine` drives one `LifecycleListener`
//! which owns its scene, camera and any application state. There are no process
//! wide singletons.

#[cfg(not(target_arch = "wasm32"))]
extern crate gl;
#[cfg(not(target_arch = "wasm32"))]
extern crate glutin;

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate cgmath;

#[macro_use]
pub mod utils;
pub mod errors;

pub mod application;
pub mod input;
pub mod math;
pub mod video;
pub mod window;

pub mod prelude {
    pub use crate::application::prelude::*;
    pub use crate::input::prelude::*;
    pub use crate::math::prelude::*;
    pub use crate::utils::prelude::*;
    pub use crate::video::prelude::*;
    pub use crate::window::prelude::*;
}
