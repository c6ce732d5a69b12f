//! Settings of the atom application, read from an optional json file and the
//! command line.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use clap::{App, Arg};
use serde::{Deserialize, Serialize};

use hydrogen::application::prelude::{EngineParams, Params};
use hydrogen::errors::Result;
use hydrogen::math::prelude::Vector2;
use hydrogen::window::prelude::WindowParams;

use crate::atom::AtomParams;
use crate::focus::FocusTarget;

/// Headless runs without an explicit frame limit stop after this many frames.
pub const HEADLESS_FRAMES: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
    /// Runs without any window or GL context.
    pub headless: bool,
    pub atom: AtomParams,
    pub motion: MotionParams,
    /// The body focused at startup.
    pub focus: Option<FocusTarget>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut window = WindowParams::default();
        window.title = "Hydrogen".to_owned();
        window.size = Vector2::new(1280, 720);

        Settings {
            engine: EngineParams::default(),
            window,
            headless: false,
            atom: AtomParams::default(),
            motion: MotionParams::default(),
            focus: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Spins the rings and drifts the atom. Off by default, which leaves a
    /// still atom.
    pub enabled: bool,
}

impl Settings {
    /// Loads the settings from a json file. Missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|err| format_err!("failed to read settings {:?}: {}", path, err))?;
        Settings::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let settings = serde_json::from_slice(bytes)?;
        Ok(settings)
    }

    /// Parses the command line, the first item is the program name. Flags take
    /// precedence over the settings file.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::cli().get_matches_from_safe(args)?;

        let mut settings = match matches.value_of("settings") {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if matches.is_present("headless") {
            settings.headless = true;
        }

        if matches.is_present("motion") {
            settings.motion.enabled = true;
        }

        if let Some(v) = matches.value_of("frames") {
            let frames = v
                .parse::<u64>()
                .map_err(|_| format_err!("`--frames` expects a number, but got `{}`.", v))?;
            settings.engine.max_frames = Some(frames);
        }

        if let Some(v) = matches.value_of("focus") {
            settings.focus = Some(v.parse()?);
        }

        if settings.headless && settings.engine.max_frames.is_none() {
            settings.engine.max_frames = Some(HEADLESS_FRAMES);
        }

        Ok(settings)
    }

    /// The engine part of the settings.
    pub fn params(&self) -> Params {
        let mut params = Params::default();
        params.engine = self.engine;
        params.window = self.window.clone();
        params.headless = self.headless;
        params
    }

    fn cli<'a, 'b>() -> App<'a, 'b> {
        App::new("hydrogen-atom")
            .version(env!("CARGO_PKG_VERSION"))
            .about("An animated hydrogen atom, with planets as electrons")
            .arg(
                Arg::with_name("settings")
                    .index(1)
                    .value_name("FILE")
                    .help("Loads settings from a json file"),
            )
            .arg(
                Arg::with_name("headless")
                    .long("headless")
                    .help("Runs without a window"),
            )
            .arg(
                Arg::with_name("frames")
                    .long("frames")
                    .takes_value(true)
                    .value_name("N")
                    .help("Stops after N frames"),
            )
            .arg(
                Arg::with_name("focus")
                    .long("focus")
                    .takes_value(true)
                    .value_name("BODY")
                    .help("Focuses on sun, earth, moon, mars or saturn at startup"),
            )
            .arg(
                Arg::with_name("motion")
                    .long("motion")
                    .help("Spins the rings and drifts the atom back and forth"),
            )
    }
}
