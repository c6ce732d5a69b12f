#[macro_use]
extern crate log;

use hydrogen::application::prelude::Engine;
use hydrogen::errors::Result;
use hydrogen::video::prelude::VideoSystem;
use hydrogen_world::prelude::SimpleRenderer;

use hydrogen_atom::prelude::*;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        if let Some(v) = err.downcast_ref::<clap::Error>() {
            v.exit();
        }

        error!("{}", err);
        for cause in err.iter_causes() {
            error!("  caused by: {}", cause);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_args(::std::env::args_os())?;
    let engine = Engine::new(&settings.params())?;

    let window = &engine.context().window;
    let dimensions = window.dimensions();
    let dpr = window.device_pixel_ratio();

    let video = if window.is_headless() {
        VideoSystem::headless()
    } else {
        window.make_current()?;
        VideoSystem::new()?
    };

    let renderer = SimpleRenderer::new(video, viewport(dimensions, dpr))?;
    let app = AtomApp::new(renderer, &settings, dimensions, dpr)?;
    let app = engine.run(app)?;

    let frame = app.scene.renderer.frame_info();
    info!(
        "Last frame had {} drawcalls and {} triangles.",
        frame.drawcalls, frame.triangles
    );

    Ok(())
}
