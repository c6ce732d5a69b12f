//! Which body the camera follows, if any.

use std::fmt;
use std::str::FromStr;

use failure::Error;
use serde::{Deserialize, Serialize};

use hydrogen::input::prelude::Key;
use hydrogen::math::prelude::Vector3;

/// The bodies that the camera can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusTarget {
    Sun,
    Earth,
    Moon,
    Mars,
    Saturn,
}

impl FocusTarget {
    pub const ALL: [FocusTarget; 5] = [
        FocusTarget::Sun,
        FocusTarget::Earth,
        FocusTarget::Moon,
        FocusTarget::Mars,
        FocusTarget::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FocusTarget::Sun => "sun",
            FocusTarget::Earth => "earth",
            FocusTarget::Moon => "moon",
            FocusTarget::Mars => "mars",
            FocusTarget::Saturn => "saturn",
        }
    }

    /// The camera offset from the body, in world space. Larger bodies are watched
    /// from further away.
    pub fn offset(self) -> Vector3<f32> {
        match self {
            FocusTarget::Sun => Vector3::new(0.0, 60.0, 150.0),
            FocusTarget::Earth => Vector3::new(0.0, 10.0, 25.0),
            FocusTarget::Moon => Vector3::new(0.0, 2.0, 5.0),
            FocusTarget::Mars => Vector3::new(0.0, 6.0, 15.0),
            FocusTarget::Saturn => Vector3::new(0.0, 30.0, 60.0),
        }
    }

    /// Keys `1` to `5` pick the bodies from the inside out.
    pub fn key(self) -> Key {
        match self {
            FocusTarget::Sun => Key::Key1,
            FocusTarget::Earth => Key::Key2,
            FocusTarget::Moon => Key::Key3,
            FocusTarget::Mars => Key::Key4,
            FocusTarget::Saturn => Key::Key5,
        }
    }

    pub fn from_key(key: Key) -> Option<FocusTarget> {
        FocusTarget::ALL.iter().cloned().find(|v| v.key() == key)
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FocusTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FocusTarget::ALL
            .iter()
            .cloned()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format_err!("Unknown focus target `{}`.", s))
    }
}

/// Holds at most one focused body. Setting the same target again is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FocusSelector {
    current: Option<FocusTarget>,
}

impl FocusSelector {
    pub fn new() -> Self {
        FocusSelector { current: None }
    }

    /// Focus on `target`. Returns true if the focus changed.
    pub fn set(&mut self, target: FocusTarget) -> bool {
        if self.current == Some(target) {
            return false;
        }

        debug!("Focus on {}.", target);
        self.current = Some(target);
        true
    }

    /// Releases the camera. Returns true if something was focused.
    pub fn clear(&mut self) -> bool {
        if let Some(v) = self.current.take() {
            debug!("Release focus on {}.", v);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    #[inline]
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current == Some(target)
    }
}
