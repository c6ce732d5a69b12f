use crate::input::InputSystem;
use crate::window::Window;

use super::time::TimeSystem;

/// The sub-systems a `LifecycleListener` can reach during a frame.
pub struct Context {
    pub window: Window,
    pub input: InputSystem,
    pub time: TimeSystem,
    shutdown: bool,
}

impl Context {
    pub(crate) fn new(window: Window, input: InputSystem, time: TimeSystem) -> Self {
        Context {
            window,
            input,
            time,
            shutdown: false,
        }
    }

    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}
