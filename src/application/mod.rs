//! A unified application model.
//!
//! ## LifecycleListener
//!
//! To hide trivial platform-specific details, it offers a trait `LifecycleListener`
//! which defines a simple application-state-model. While the application is running,
//! the associated per-frame methods are called in a pre-determined order.
//!
//! ## Engine
//!
//! `Engine` runs the main loop. It owns the window, input and
//! time systems, and lends them to the listener through a `Context` every frame.

pub mod context;
pub mod engine;
pub mod lifecycle;
pub mod settings;
pub mod time;

pub mod prelude {
    pub use super::context::Context;
    pub use super::engine::Engine;
    pub use super::lifecycle::LifecycleListener;
    pub use super::settings::{EngineParams, Params};
    pub use super::time::TimeSystem;
}
