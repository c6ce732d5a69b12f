//! An animated hydrogen atom. A textured proton sits in the middle, and four
//! planets ride on tilted rings around it like electrons on their orbits.
//!
//! The scene is built into a `hydrogen_world::scene::Scene` by `Hydrogen::build`,
//! and `AtomApp` drives it frame by frame: rings spin, the whole atom drifts back
//! and forth, and the camera either follows a focused body or is steered with
//! the damped `OrbitControls`.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod animation;
pub mod app;
pub mod atom;
pub mod config;
pub mod controls;
pub mod focus;
pub mod gui;
pub mod picking;

pub mod prelude {
    pub use super::animation::{track_focus, Motion};
    pub use super::app::{viewport, AtomApp, PROTON_PALETTE};
    pub use super::atom::{AtomParams, Environment, Hydrogen, Orbit};
    pub use super::config::{MotionParams, Settings};
    pub use super::controls::OrbitControls;
    pub use super::focus::{FocusSelector, FocusTarget};
    pub use super::gui::{ColorPicker, SettingsPanel, Slider};
    pub use super::picking::{pick, Ray};
}
