use crate::input::events::InputEvent;

/// The status of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The window has been resumed.
    Resumed,
    /// The window has been suspended.
    Suspended,
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The size of window has changed, in points.
    Resized(u32, u32),
}

/// The enumerations of all events that come from various kinds of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Window(WindowEvent),
    InputDevice(InputEvent),
}
