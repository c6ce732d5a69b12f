use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// A window without any surface. Resizing it emits the `Resized` event on next poll,
/// which keeps the event flow identical to a real window.
pub struct HeadlessVisitor {
    dimensions: Vector2<u32>,
    resized: bool,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>) -> Self {
        HeadlessVisitor {
            dimensions,
            resized: false,
        }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn show(&self) {}

    #[inline]
    fn hide(&self) {}

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    #[inline]
    fn resize(&mut self, dimensions: Vector2<u32>) {
        if self.dimensions != dimensions {
            self.dimensions = dimensions;
            self.resized = true;
        }
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if self.resized {
            self.resized = false;
            let (w, h) = (self.dimensions.x, self.dimensions.y);
            events.push(Event::Window(WindowEvent::Resized(w, h)));
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }
}
