use crate::errors::*;
use crate::window::events::Event;

use super::context::Context;

/// Defines a number of event functions that get executed in a pre-determined order
/// by the `Engine`:
///
/// 1. `on_pre_update`;
/// 2. `on_event` once for every event polled during this frame;
/// 3. `on_update`, the main workhorse of frame updates;
/// 4. `on_render`;
/// 5. `on_post_update`.
///
/// `on_exit` is called once when the main loop stops.
pub trait LifecycleListener {
    fn on_pre_update(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    fn on_event(&mut self, _: &mut Context, _: &Event) -> Result<()> {
        Ok(())
    }

    fn on_update(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    fn on_render(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    fn on_post_update(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }
}
