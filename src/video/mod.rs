//! A thin layer over OpenGL that owns shaders and meshes, and submits draw calls.
//!
//! Resources are referred to by handles. A `VideoSystem` created with `headless`
//! accepts the same calls without touching any GL context, and still reports
//! the draw statistics of every frame.

pub mod assets;
pub mod backends;
pub mod system;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::backends::UniformVar;
    pub use super::system::{FrameInfo, VideoSystem};
}
