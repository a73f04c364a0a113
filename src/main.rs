//! Ping Pong entry point
//!
//! Headless demo: plays the part of a host shell. It feeds lifecycle signals
//! to the game loop, steers the paddle with a lagging autopilot and logs the
//! events it gets back, then tessellates the final frame the way a GPU host
//! would. Pass a settings JSON path as the first argument to
//! override the palette and stats interval.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::sync::Arc;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::{Duration, Instant};

    use ping_pong::renderer::{FrameBufferSurface, MeshCanvas, draw_scene};
    use ping_pong::sim::{GameEvent, GameEventSink, Viewport};
    use ping_pong::{GameLoop, HostSignal, Settings};

    const VIEWPORT: Viewport = Viewport::new(1000.0, 2000.0);
    const DEMO_DURATION: Duration = Duration::from_secs(10);
    // Ticks of lag in the autopilot, enough that a fast ball gets past it
    const AUTOPILOT_LAG: f32 = 4.0;

    env_logger::init();
    log::info!("Ping Pong (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(Settings::load)
        .unwrap_or_default();

    let surface = FrameBufferSurface::new(VIEWPORT.width as u32, VIEWPORT.height as u32);
    let (tx, rx) = channel();
    let sink: Arc<dyn GameEventSink> = Arc::new(tx);
    let mut game = GameLoop::new(&settings, VIEWPORT, Box::new(surface.clone()), Some(sink));

    game.handle(HostSignal::Resume);
    game.handle(HostSignal::SurfaceReady);

    let input = game.input();
    let started = Instant::now();
    let mut final_score = None;
    while final_score.is_none() && started.elapsed() < DEMO_DURATION {
        let ball = game.snapshot().ball;
        input.set_paddle_target_x(ball.pos.x - ball.vel.x * AUTOPILOT_LAG);

        for event in rx.try_iter() {
            match event {
                GameEvent::ScoreChanged(score) => log::info!("Score: {score}"),
                GameEvent::GameOver(score) => {
                    log::info!("Game over! Final score: {score}");
                    final_score = Some(score);
                }
            }
        }
        thread::sleep(Duration::from_millis(16));
    }

    game.handle(HostSignal::Pause);
    game.handle(HostSignal::SurfaceDestroyed);
    surface.set_available(false);

    log::info!(
        "Ran {} ticks, posted {} frames",
        game.ticks(),
        surface.frames_posted()
    );

    // Same frame as a GPU host would upload it
    let final_state = game.snapshot();
    let mut mesh = MeshCanvas::new();
    draw_scene(&mut mesh, &final_state, &settings.palette);
    log::info!(
        "Final frame tessellates to {} triangles ({} vertex bytes)",
        mesh.vertices().len() / 3,
        mesh.as_bytes().len()
    );

    match serde_json::to_string_pretty(&final_state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final state: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding shell
}
