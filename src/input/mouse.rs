use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::math::prelude::{MetricSpace, Vector2};
use crate::utils::hash::{FastHashMap, FastHashSet};
use crate::utils::time::Timestamp;

/// Thresholds that tell a click from a drag. Distances are in points.
#[derive(Debug, Clone, Copy)]
pub struct MouseParams {
    pub click_timeout: Duration,
    pub click_distance: f32,
}

impl Default for MouseParams {
    fn default() -> Self {
        MouseParams {
            click_timeout: Duration::from_millis(500),
            click_distance: 4.0,
        }
    }
}

/// Describes a button of a mouse controller.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    at: Timestamp,
    position: Vector2<f32>,
}

pub struct Mouse {
    downs: FastHashMap<MouseButton, Press>,
    presses: FastHashSet<MouseButton>,
    releases: FastHashSet<MouseButton>,
    clicks: FastHashSet<MouseButton>,
    last_position: Vector2<f32>,
    position: Vector2<f32>,
    scroll: Vector2<f32>,
    params: MouseParams,
}

impl Mouse {
    pub fn new(params: MouseParams) -> Self {
        Mouse {
            params,
            downs: FastHashMap::default(),
            presses: FastHashSet::default(),
            releases: FastHashSet::default(),
            clicks: FastHashSet::default(),
            last_position: Vector2::new(0.0, 0.0),
            position: Vector2::new(0.0, 0.0),
            scroll: Vector2::new(0.0, 0.0),
        }
    }

    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
        self.clicks.clear();
        self.last_position = Vector2::new(0.0, 0.0);
        self.position = Vector2::new(0.0, 0.0);
        self.scroll = Vector2::new(0.0, 0.0);
    }

    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
        self.clicks.clear();
        self.scroll = Vector2::new(0.0, 0.0);
        self.last_position = self.position;
    }

    #[inline]
    pub fn on_move(&mut self, position: (f32, f32)) {
        self.position = position.into();
    }

    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if self.downs.contains_key(&button) {
            return;
        }

        self.presses.insert(button);
        self.downs.insert(
            button,
            Press {
                at: Timestamp::now(),
                position: self.position,
            },
        );
    }

    pub fn on_button_released(&mut self, button: MouseButton) {
        if let Some(press) = self.downs.remove(&button) {
            self.releases.insert(button);

            if press.at.elapsed() <= self.params.click_timeout
                && press.position.distance(self.position) <= self.params.click_distance
            {
                self.clicks.insert(button);
            }
        }
    }

    #[inline]
    pub fn on_wheel_scroll(&mut self, delta: (f32, f32)) {
        self.scroll += Vector2::from(delta);
    }

    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.downs.contains_key(&button)
    }

    #[inline]
    pub fn is_button_press(&self, button: MouseButton) -> bool {
        self.presses.contains(&button)
    }

    #[inline]
    pub fn is_button_release(&self, button: MouseButton) -> bool {
        self.releases.contains(&button)
    }

    /// Checks if a button was clicked in this frame, that is released shortly
    /// after being pressed and without moving away.
    #[inline]
    pub fn is_button_click(&self, button: MouseButton) -> bool {
        self.clicks.contains(&button)
    }

    #[inline]
    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    #[inline]
    pub fn movement(&self) -> Vector2<f32> {
        self.position - self.last_position
    }

    #[inline]
    pub fn scroll(&self) -> Vector2<f32> {
        self.scroll
    }
}
