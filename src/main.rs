use log::{debug, info, trace};
use rastercube::prelude::*;

fn main() -> Result<(), String> {
    env_logger::init();

    let config = Config::default();
    let mut window = Window::new("Rastercube", config.width(), config.height())?;
    let mut engine = Engine::new(config);
    let mut frame_limiter = FrameLimiter::new(&window, config.frame_interval());
    let mut paused = false;

    info!(
        "{}x{} window, {:?} per frame, render mode {:?}",
        window.width(),
        window.height(),
        config.frame_interval(),
        engine.render_mode()
    );

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                info!("resized to {w}x{h}");
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::SetRenderMode(mode) => engine.set_render_mode(mode),
            WindowEvent::CycleRenderMode => engine.cycle_render_mode(),
            WindowEvent::TogglePause => {
                paused = !paused;
                debug!("paused: {paused}");
            }
            WindowEvent::ToggleMonochrome => engine.toggle_monochrome(),
            WindowEvent::None => {}
        }

        let delta_ms = frame_limiter.wait_and_get_delta(&window);
        trace!("frame took {delta_ms} ms");

        if !paused {
            engine.update();
        }
        engine.render();
        window.present(engine.frame_bytes())?;
    }

    info!("shutting down");
    Ok(())
}
