use crate::errors::*;
use crate::input::InputSystem;
use crate::window::events::{Event, WindowEvent};
use crate::window::Window;

use super::context::Context;
use super::lifecycle::LifecycleListener;
use super::settings::Params;
use super::time::TimeSystem;

/// `Engine` is the root object of the application. It binds the window, input and
/// time sub-systems in a central place and drives a `LifecycleListener` through
/// the frames in a pre-determined order.
pub struct Engine {
    ctx: Context,
    events: Vec<Event>,
    max_frames: Option<u64>,
}

impl Engine {
    /// Setup engine with specified settings.
    pub fn new(params: &Params) -> Result<Self> {
        let window = if params.headless {
            Window::headless(params.window.size)
        } else {
            Self::create_window(params)?
        };

        let ctx = Context::new(
            window,
            InputSystem::new(params.input),
            TimeSystem::new(&params.engine),
        );

        info!(
            "engine started ({}, max frames {:?}).",
            if params.headless { "headless" } else { "windowed" },
            params.engine.max_frames
        );

        Ok(Engine {
            ctx,
            events: Vec::new(),
            max_frames: params.engine.max_frames,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create_window(params: &Params) -> Result<Window> {
        Window::new(&params.window)
    }

    #[cfg(target_arch = "wasm32")]
    fn create_window(_: &Params) -> Result<Window> {
        bail!("windowed mode is not supported on this platform.");
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Runs one frame. Returns false once the application should stop, in which
    /// case `on_exit` has already been called.
    pub fn advance<T: LifecycleListener>(&mut self, application: &mut T) -> Result<bool> {
        let ctx = &mut self.ctx;
        ctx.time.advance();

        application.on_pre_update(ctx)?;

        self.events.clear();
        ctx.window.poll_events(&mut self.events);

        for v in &self.events {
            match *v {
                Event::Window(WindowEvent::Closed) => ctx.shutdown(),
                Event::InputDevice(e) => ctx.input.on_event(e),
                _ => {}
            }

            application.on_event(ctx, v)?;
        }

        application.on_update(ctx)?;
        application.on_render(ctx)?;
        ctx.window.swap_buffers()?;
        application.on_post_update(ctx)?;

        ctx.input.advance();

        if let Some(max) = self.max_frames {
            if ctx.time.frames() >= max {
                ctx.shutdown();
            }
        }

        if ctx.is_shutdown() {
            info!("engine stopped after {} frames.", ctx.time.frames());
            application.on_exit(ctx)?;
            return Ok(false);
        }

        Ok(true)
    }

    /// Run the main loop of `Engine`, this will block the working thread until
    /// we finished. The application is handed back afterwards.
    pub fn run<T: LifecycleListener>(mut self, mut application: T) -> Result<T> {
        while self.advance(&mut application)? {}
        Ok(application)
    }
}
