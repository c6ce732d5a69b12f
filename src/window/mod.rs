//! Represents an OpenGL context and the window or environment around it.
pub mod events;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::{Window, WindowParams};
}

mod backends;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::Event;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Window".to_owned(),
            size: Vector2::new(640, 320),
            multisample: 2,
            vsync: false,
        }
    }
}

/// The window, or the environment pretending to be one. Events are pulled from the
/// platform with `poll_events`; extra events can be queued with `push_event`, which
/// is how headless runs get scripted.
pub struct Window {
    visitor: Box<dyn Visitor>,
    queued: Vec<Event>,
    headless: bool,
}

impl Window {
    /// Creates a new window and initializes its OpenGL context.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(params: &WindowParams) -> Result<Self> {
        let visitor = backends::new(params)?;
        Ok(Window {
            visitor,
            queued: Vec::new(),
            headless: false,
        })
    }

    /// Creates a window without any surface or GL context.
    pub fn headless(dimensions: Vector2<u32>) -> Self {
        Window {
            visitor: backends::new_headless(dimensions),
            queued: Vec::new(),
            headless: true,
        }
    }

    #[inline]
    pub fn is_headless(&self) -> bool {
        self.headless
    }

    /// Shows the window if it was hidden.
    #[inline]
    pub fn show(&self) {
        self.visitor.show();
    }

    /// Hides the window if it was visible.
    #[inline]
    pub fn hide(&self) {
        self.visitor.hide();
    }

    /// Returns the size in *points* of the client area of the window.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Resize the GL context.
    #[inline]
    pub fn resize(&mut self, dimensions: Vector2<u32>) {
        self.visitor.resize(dimensions);
    }

    /// Queues an event, it will be delivered with the next `poll_events`.
    #[inline]
    pub fn push_event(&mut self, v: Event) {
        self.queued.push(v);
    }

    /// Polls the pending events into `events`. Platform events come first.
    pub fn poll_events(&mut self, events: &mut Vec<Event>) {
        self.visitor.poll_events(events);
        events.extend(self.queued.drain(..));
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }
}
