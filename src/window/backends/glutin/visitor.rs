use gl;
use glutin;
use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::super::events::{Event, WindowEvent};
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn from(params: &WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Latest)
            .with_depth_buffer(24)
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(|err| format_err!("failed to create window: {}", err))?;

        let visitor = GlutinVisitor {
            window,
            events_loop,
        };

        unsafe {
            visitor.window.make_current()?;
            gl::load_with(|symbol| visitor.window.get_proc_address(symbol) as *const _);
        }

        info!(
            "created window '{}' with {:?} points.",
            params.title,
            visitor.dimensions()
        );

        Ok(visitor)
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn show(&self) {
        self.window.show();
    }

    #[inline]
    fn hide(&self) {
        self.window.hide();
    }

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.window
            .get_inner_size()
            .map(|size| Vector2::new(size.width as u32, size.height as u32))
            .unwrap_or_else(|| Vector2::new(0, 0))
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    #[inline]
    fn resize(&mut self, dimensions: Vector2<u32>) {
        let size = glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.window.resize(size)
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dims = self.dimensions();
        let dpr = self.device_pixel_ratio();
        let mut resized = None;

        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dims) {
                if let Event::Window(WindowEvent::Resized(w, h)) = e {
                    resized = Some((w, h));
                }

                events.push(e);
            }
        });

        // The GL surface has to follow the window on platforms that don't do it for us.
        if let Some((w, h)) = resized {
            let physical = Vector2::new((w as f32 * dpr) as u32, (h as f32 * dpr) as u32);
            self.resize(physical);
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current()?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }
}
