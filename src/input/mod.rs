//! Provides unified access to mouse and keyboard devices.
//!
//! The `InputSystem` is fed with `InputEvent`s by the owner of the window, and is
//! advanced once per frame. To check the current state of specific keys:
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! input.is_key_down(Key::A);
//!
//! // Checks if a key has been pressed down during the last frame.
//! input.is_key_press(Key::A);
//! ```
//!
//! The mouse position is reported in points, relative to the bottom-left corner of
//! the window. Simple patterns like clicks are recognized too:
//!
//! ```rust,ignore
//! // Checks if a mouse button has been clicked during last frame.
//! input.is_mouse_click(MouseButton::Left);
//!
//! // Gets mouse movement in points since last frame.
//! input.mouse_movement();
//! ```

pub mod events;
pub mod keyboard;
pub mod mouse;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
    pub use super::mouse::MouseButton;
    pub use super::{InputParams, InputSystem};
}

use crate::math::prelude::Vector2;

use self::events::InputEvent;
use self::keyboard::{Key, Keyboard, KeyboardParams};
use self::mouse::{Mouse, MouseButton, MouseParams};

/// The setup parameters of all supported input devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParams {
    pub mouse: MouseParams,
    pub keyboard: KeyboardParams,
}

/// The `InputSystem` struct are used to manage all the events and corresponding
/// internal states.
pub struct InputSystem {
    mouse: Mouse,
    keyboard: Keyboard,
}

impl InputSystem {
    pub fn new(params: InputParams) -> Self {
        InputSystem {
            mouse: Mouse::new(params.mouse),
            keyboard: Keyboard::new(params.keyboard),
        }
    }

    /// Updates the internal device states with a new event.
    pub fn on_event(&mut self, v: InputEvent) {
        match v {
            InputEvent::MouseMoved { position } => self.mouse.on_move(position),
            InputEvent::MousePressed { button } => self.mouse.on_button_pressed(button),
            InputEvent::MouseReleased { button } => self.mouse.on_button_released(button),
            InputEvent::MouseWheel { delta } => self.mouse.on_wheel_scroll(delta),
            InputEvent::KeyboardPressed { key } => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.keyboard.on_key_released(key),
        }
    }

    /// Clears the per-frame states, should be called at the end of every frame.
    pub fn advance(&mut self) {
        self.mouse.advance();
        self.keyboard.advance();
    }

    /// Reset input to initial states.
    pub fn reset(&mut self) {
        self.mouse.reset();
        self.keyboard.reset();
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }

    /// Checks if a key has been repeated during the last frame.
    #[inline]
    pub fn is_key_repeat(&self, key: Key) -> bool {
        self.keyboard.is_key_repeat(key)
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }

    #[inline]
    pub fn is_mouse_press(&self, button: MouseButton) -> bool {
        self.mouse.is_button_press(button)
    }

    #[inline]
    pub fn is_mouse_release(&self, button: MouseButton) -> bool {
        self.mouse.is_button_release(button)
    }

    /// Checks if a mouse button has been clicked during last frame.
    #[inline]
    pub fn is_mouse_click(&self, button: MouseButton) -> bool {
        self.mouse.is_button_click(button)
    }

    /// Gets the mouse position relative to the bottom-left hand corner of the window.
    #[inline]
    pub fn mouse_position(&self) -> Vector2<f32> {
        self.mouse.position()
    }

    /// Gets mouse movement in points since last frame.
    #[inline]
    pub fn mouse_movement(&self) -> Vector2<f32> {
        self.mouse.movement()
    }

    /// Gets the scroll movement of mouse, usually provided by mouse wheel.
    #[inline]
    pub fn mouse_scroll(&self) -> Vector2<f32> {
        self.mouse.scroll()
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        InputSystem::new(InputParams::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys() {
        let mut input = InputSystem::default();
        input.on_event(InputEvent::KeyboardPressed { key: Key::Key1 });
        assert!(input.is_key_down(Key::Key1));
        assert!(input.is_key_press(Key::Key1));

        input.advance();
        assert!(input.is_key_down(Key::Key1));
        assert!(!input.is_key_press(Key::Key1));

        input.on_event(InputEvent::KeyboardReleased { key: Key::Key1 });
        assert!(!input.is_key_down(Key::Key1));
        assert!(input.is_key_release(Key::Key1));
    }

    #[test]
    fn wheel() {
        let mut input = InputSystem::default();
        input.on_event(InputEvent::MouseWheel { delta: (0.0, 2.0) });
        input.on_event(InputEvent::MouseWheel { delta: (0.0, 1.0) });
        assert_eq!(input.mouse_scroll(), Vector2::new(0.0, 3.0));

        input.advance();
        assert_eq!(input.mouse_scroll(), Vector2::new(0.0, 0.0));
    }
}
