//! Functions for loading application settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::input::InputParams;
use crate::window::WindowParams;

/// A structure containing configuration data for the engine, which are used to
/// specify hardware setup stuff to create the window and other context information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub engine: EngineParams,
    pub window: WindowParams,
    #[serde(skip)]
    pub input: InputParams,
    /// Runs without any window or GL context.
    pub headless: bool,
}

impl Params {
    /// Loads the settings from a json file. Missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|err| format_err!("failed to read settings {:?}: {}", path, err))?;
        Params::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let params = serde_json::from_slice(bytes)?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    pub min_fps: u32,
    pub max_fps: u32,
    pub time_smooth_step: u32,
    /// Stops the main loop after this many frames.
    pub max_frames: Option<u64>,
    /// Advances the clock with a constant step in milliseconds instead of the wall
    /// clock. Frames are not throttled in this mode.
    pub fixed_timestep_ms: Option<u64>,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            min_fps: 0,
            max_fps: 60,
            time_smooth_step: 0,
            max_frames: None,
            fixed_timestep_ms: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json() {
        let params = Params::from_json(br#"{ "headless": true, "engine": { "max_frames": 3 } }"#)
            .unwrap();
        assert!(params.headless);
        assert_eq!(params.engine.max_frames, Some(3));
        assert_eq!(params.engine.max_fps, 60);
        assert_eq!(params.window.title, "Window");
    }

    #[test]
    fn malformed_json() {
        assert!(Params::from_json(b"{ headless: }").is_err());
    }
}
