//! The application that owns the atom scene and drives it frame by frame.

use hydrogen::application::prelude::{Context, LifecycleListener};
use hydrogen::errors::Result;
use hydrogen::input::prelude::{InputSystem, Key, MouseButton};
use hydrogen::math::prelude::*;
use hydrogen::window::prelude::{Event, WindowEvent};
use hydrogen_world::prelude::{Material, Renderer, Scene};

use crate::animation::{self, Motion};
use crate::atom::{Environment, Hydrogen};
use crate::config::Settings;
use crate::controls::OrbitControls;
use crate::focus::{FocusSelector, FocusTarget};
use crate::gui::SettingsPanel;
use crate::picking;

/// The colors that `C` cycles the proton through.
pub const PROTON_PALETTE: [u32; 5] = [0xFF_FF_FF, 0xFF_D2_7F, 0xFF_8A_3D, 0xFF_4D_4D, 0x9A_D0_FF];

/// The size in physical pixels of a window that is `dimensions` points large.
/// A non-positive `device_pixel_ratio` counts as 1.
pub fn viewport(dimensions: Vector2<u32>, device_pixel_ratio: f32) -> Vector2<u32> {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };

    Vector2::new(
        (dimensions.x as f32 * dpr).round() as u32,
        (dimensions.y as f32 * dpr).round() as u32,
    )
}

pub struct AtomApp<R: Renderer<Mtl = Material>> {
    pub scene: Scene<R>,
    pub atom: Hydrogen,
    pub env: Environment,
    pub focus: FocusSelector,
    pub controls: OrbitControls,
    pub panel: SettingsPanel<Scene<R>>,
    pub motion: Motion,
    palette: usize,
}

impl<R: Renderer<Mtl = Material> + 'static> AtomApp<R> {
    /// Builds the scene into `renderer`. The `dimensions` of window are measured
    /// in points.
    pub fn new(
        renderer: R,
        settings: &Settings,
        dimensions: Vector2<u32>,
        device_pixel_ratio: f32,
    ) -> Result<Self> {
        let mut scene = Scene::new(renderer);
        let atom = Hydrogen::build(&mut scene, &settings.atom)?;
        let env = Environment::build(&mut scene, 1.0)?;

        let mut panel = SettingsPanel::new();
        let proton = atom.proton;
        panel
            .proton_color
            .on_change(move |scene: &mut Scene<R>, color| {
                if let Some(mtl) = scene.mtl_mut(proton) {
                    mtl.color = color;
                }
            });

        panel
            .electron_speed
            .on_change(|_: &mut Scene<R>, v| debug!("Set electron speed factor to {}.", v));

        let mut focus = FocusSelector::new();
        if let Some(v) = settings.focus {
            focus.set(v);
        }

        let mut app = AtomApp {
            scene,
            atom,
            env,
            focus,
            controls: OrbitControls::new(Vector3::zero()),
            panel,
            motion: Motion::new(settings.motion.enabled),
            palette: 0,
        };

        app.resize(dimensions, device_pixel_ratio);
        Ok(app)
    }

    /// Follows the window size in points. The aspect of camera is kept as the
    /// ratio of window, and the viewport covers every physical pixel.
    pub fn resize(&mut self, dimensions: Vector2<u32>, device_pixel_ratio: f32) {
        if dimensions.x == 0 || dimensions.y == 0 {
            return;
        }

        if let Some(camera) = self.scene.camera_mut(self.env.camera) {
            camera.set_aspect(dimensions.x as f32 / dimensions.y as f32);
        }

        let viewport = viewport(dimensions, device_pixel_ratio);
        self.scene.renderer.set_viewport(viewport);
        debug!("Resize to {:?} points, {:?} pixels.", dimensions, viewport);
    }

    #[inline]
    pub fn speed_factor(&self) -> f32 {
        self.panel.electron_speed.value()
    }

    pub fn set_speed_factor(&mut self, factor: f32) -> bool {
        self.panel.electron_speed.set(&mut self.scene, factor)
    }

    pub fn set_proton_color(&mut self, color: Color<f32>) -> bool {
        self.panel.proton_color.set(&mut self.scene, color)
    }

    /// Tints the proton with the next color of `PROTON_PALETTE`.
    pub fn cycle_proton_color(&mut self) {
        self.palette = (self.palette + 1) % PROTON_PALETTE.len();
        let hex = PROTON_PALETTE[self.palette];
        self.panel.proton_color.set_hex(&mut self.scene, hex);
    }

    /// Picks the body under `cursor`. Both the cursor and `dimensions` are in
    /// points, measured from the bottom-left corner of window.
    pub fn pick(&self, cursor: Vector2<f32>, dimensions: Vector2<f32>) -> Option<FocusTarget> {
        picking::pick(&self.scene, self.env.camera, &self.atom, cursor, dimensions)
    }

    /// Applies this frame's keyboard and mouse input.
    pub fn handle_input(&mut self, input: &InputSystem, dimensions: Vector2<f32>) {
        for &v in &FocusTarget::ALL {
            if input.is_key_press(v.key()) {
                self.focus.set(v);
            }
        }

        if input.is_key_press(Key::Escape) {
            self.focus.clear();
        }

        if input.is_key_press(Key::Up) || input.is_key_repeat(Key::Up) {
            self.panel.electron_speed.step_by(&mut self.scene, 1);
        }

        if input.is_key_press(Key::Down) || input.is_key_repeat(Key::Down) {
            self.panel.electron_speed.step_by(&mut self.scene, -1);
        }

        if input.is_key_press(Key::C) {
            self.cycle_proton_color();
        }

        if input.is_mouse_click(MouseButton::Left) {
            if let Some(target) = self.pick(input.mouse_position(), dimensions) {
                self.focus.set(target);
            }
        } else if input.is_mouse_down(MouseButton::Left) {
            let movement = input.mouse_movement();
            if movement != Vector2::zero() {
                self.controls.rotate(movement, dimensions.y);
            }
        }

        let scroll = input.mouse_scroll();
        if scroll.y != 0.0 {
            self.controls.zoom(scroll.y);
        }
    }

    /// Advances the atom by `dt` seconds, and moves the camera after it.
    pub fn step(&mut self, dt: f32) {
        let factor = self.speed_factor();
        self.motion.advance(&mut self.scene, &self.atom, dt, factor);

        if let Some(target) = self.focus.current() {
            animation::track_focus(
                &mut self.scene,
                &self.atom,
                target,
                self.env.camera,
                &mut self.controls,
            );
        }

        self.controls.update(&mut self.scene, self.env.camera);
    }

    #[inline]
    pub fn render(&mut self) -> Result<()> {
        self.scene.draw()
    }
}

impl<R: Renderer<Mtl = Material> + 'static> LifecycleListener for AtomApp<R> {
    fn on_event(&mut self, ctx: &mut Context, v: &Event) -> Result<()> {
        if let Event::Window(WindowEvent::Resized(w, h)) = *v {
            self.resize(Vector2::new(w, h), ctx.window.device_pixel_ratio());
        }

        Ok(())
    }

    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        let dimensions = ctx.window.dimensions();
        let dimensions = Vector2::new(dimensions.x as f32, dimensions.y as f32);
        self.handle_input(&ctx.input, dimensions);
        self.step(ctx.time.delta_seconds());
        Ok(())
    }

    fn on_render(&mut self, _: &mut Context) -> Result<()> {
        self.render()
    }

    fn on_exit(&mut self, ctx: &mut Context) -> Result<()> {
        info!(
            "Exit after {} frames, focus {:?}.",
            ctx.time.frames(),
            self.focus.current()
        );
        Ok(())
    }
}
