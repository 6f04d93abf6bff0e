use shapeshifter::prelude::*;
use shapeshifter::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    let mut window = Window::new("Shape Shifter", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT).map_err(|e| e.to_string())?;

    // An OBJ path on the command line replaces the built-in cube.
    match std::env::args().nth(1) {
        Some(path) => engine.load(&ObjSource::new(&path)).map_err(|e| e.to_string())?,
        None => engine.load(&Shape::Cube).map_err(|e| e.to_string())?,
    }

    let mut limiter = FrameLimiter::new(&window);
    let mut recorder: Option<FrameRecorder> = None;

    'main: loop {
        match window.poll_events() {
            WindowEvent::Quit => break 'main,
            WindowEvent::SelectShape(index) => {
                let shape = Shape::from_index(index);
                engine.load(&shape).map_err(|e| e.to_string())?;
                engine.set_camera_z(shape.camera_z());
            }
            WindowEvent::ToggleWireframe => {
                engine.wireframe_overlay = !engine.wireframe_overlay;
            }
            WindowEvent::ToggleRecording => {
                recorder = match recorder {
                    Some(r) => {
                        eprintln!("recording stopped after {} frames", r.frames_written());
                        None
                    }
                    None => Some(FrameRecorder::new("frames").map_err(|e| e.to_string())?),
                };
            }
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        engine.update(delta_ms as f32 / 1000.0);
        engine.render();

        if let Some(recorder) = recorder.as_mut() {
            recorder
                .capture(engine.pixels(), engine.width(), engine.height())
                .map_err(|e| e.to_string())?;
        }

        window.present(engine.frame_buffer())?;
    }

    Ok(())
}
