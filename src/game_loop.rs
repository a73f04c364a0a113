//! Game loop scheduler
//!
//! Owns the dedicated simulation thread. The host drives it with lifecycle
//! signals from its UI thread:
//! - The loop runs only while the surface is ready, the app is in the
//!   foreground and the game is not over
//! - Pause and surface teardown clear the running flag and join the thread,
//!   so nothing draws once they return
//! - Restart and resize stop the loop before starting a new session, so no
//!   event from the old session reaches the sink after their `ScoreChanged(0)`

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::TICK_INTERVAL;
use crate::platform::HostSignal;
use crate::renderer::{Presenter, RenderSurface};
use crate::settings::Settings;
use crate::sim::events::dispatch;
use crate::sim::{
    GameEvent, GameEventSink, GameState, InputController, SharedGame, Viewport, advance,
};

/// Tick rate bookkeeping for debug logging
struct FrameStats {
    interval: u32,
    ticks: u32,
    skipped: u32,
    busy: Duration,
    window_start: Instant,
}

impl FrameStats {
    fn new(interval: u32) -> Self {
        Self {
            interval,
            ticks: 0,
            skipped: 0,
            busy: Duration::ZERO,
            window_start: Instant::now(),
        }
    }

    fn record(&mut self, presented: bool, busy: Duration) {
        if self.interval == 0 {
            return;
        }
        self.ticks += 1;
        self.busy += busy;
        if !presented {
            self.skipped += 1;
        }

        if self.ticks >= self.interval {
            let secs = self.window_start.elapsed().as_secs_f64();
            if secs > 0.0 {
                log::debug!(
                    "Game loop: {:.1} ticks/s, {:.2} ms avg work, {} frames skipped",
                    self.ticks as f64 / secs,
                    self.busy.as_secs_f64() * 1000.0 / self.ticks as f64,
                    self.skipped
                );
            }
            *self = Self::new(self.interval);
        }
    }
}

/// Everything the loop thread touches
struct Worker {
    game: SharedGame,
    presenter: Arc<Mutex<Presenter>>,
    sink: Option<Arc<dyn GameEventSink>>,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
    frame_stats_interval: u32,
}

impl Worker {
    fn run(self) {
        let mut stats = FrameStats::new(self.frame_stats_interval);

        while self.running.load(Ordering::Acquire) {
            let started = Instant::now();
            let presented = self.step();
            let busy = started.elapsed();
            stats.record(presented, busy);

            // Control frame rate
            if let Some(rest) = TICK_INTERVAL.checked_sub(busy) {
                thread::sleep(rest);
            }
        }
    }

    /// One tick: advance, notify, draw. Returns whether a frame was posted.
    fn step(&self) -> bool {
        let (snapshot, events) = {
            let mut state = self.game.lock();
            let events = advance(&mut state);
            (*state, events)
        };

        dispatch(self.sink.as_deref(), &events);

        let presented = self
            .presenter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .render(&snapshot);
        self.ticks.fetch_add(1, Ordering::AcqRel);
        presented
    }
}

/// The game loop and its start/stop state machine.
///
/// Methods are meant to be called from the host's UI thread. Event sink
/// callbacks arrive on the loop thread, except the `ScoreChanged(0)` sent by
/// restart and resize, which arrives on the caller's thread.
pub struct GameLoop {
    game: SharedGame,
    presenter: Arc<Mutex<Presenter>>,
    sink: Option<Arc<dyn GameEventSink>>,
    rng: Pcg32,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
    surface_ready: bool,
    paused: bool,
    frame_stats_interval: u32,
}

impl GameLoop {
    /// Create a stopped loop with a fresh session in `viewport`.
    ///
    /// The loop starts once the host reports the surface ready.
    pub fn new(
        settings: &Settings,
        viewport: Viewport,
        surface: Box<dyn RenderSurface>,
        sink: Option<Arc<dyn GameEventSink>>,
    ) -> Self {
        let mut rng = Pcg32::seed_from_u64(rand::random());
        let game = SharedGame::new(GameState::new(viewport, &mut rng));

        Self {
            game,
            presenter: Arc::new(Mutex::new(Presenter::new(surface, settings.palette))),
            sink,
            rng,
            running: Arc::new(AtomicBool::new(false)),
            ticks: Arc::new(AtomicU64::new(0)),
            worker: None,
            surface_ready: false,
            paused: false,
            frame_stats_interval: settings.frame_stats_interval,
        }
    }

    /// Reseed the serve direction RNG and deal a new session from it
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg32::seed_from_u64(seed);
        let mut state = self.game.lock();
        let viewport = state.viewport;
        *state = GameState::new(viewport, &mut self.rng);
        drop(state);
        self
    }

    /// Handle for delivering pointer events from any thread
    pub fn input(&self) -> InputController {
        InputController::new(self.game.clone())
    }

    /// Copy of the current game state
    pub fn snapshot(&self) -> GameState {
        self.game.snapshot()
    }

    /// Whether the loop thread is alive
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Ticks run since creation, across all runs of the loop
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Dispatch a host signal to the matching handler
    pub fn handle(&mut self, signal: HostSignal) {
        match signal {
            HostSignal::SurfaceReady => self.on_surface_ready(),
            HostSignal::SurfaceDestroyed => self.on_surface_destroyed(),
            HostSignal::Resize { width, height } => self.on_resize(width, height),
            HostSignal::Pause => self.on_pause(),
            HostSignal::Resume => self.on_resume(),
            HostSignal::Restart => self.on_restart(),
            HostSignal::PointerMove { x, y } => {
                self.on_pointer_move(x, y);
            }
        }
    }

    pub fn on_surface_ready(&mut self) {
        self.surface_ready = true;
        self.try_start();
    }

    pub fn on_surface_destroyed(&mut self) {
        self.stop();
        self.surface_ready = false;
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        self.stop();
        self.game.lock().resize(viewport, &mut self.rng);
        log::info!("Viewport resized to {width}x{height}, new session");
        self.notify(GameEvent::ScoreChanged(0));
        self.try_start();
    }

    pub fn on_pause(&mut self) {
        self.paused = true;
        self.stop();
    }

    pub fn on_resume(&mut self) {
        self.paused = false;
        self.try_start();
    }

    pub fn on_restart(&mut self) {
        self.stop();
        self.game.lock().restart(&mut self.rng);
        log::info!("Game restarted");
        self.notify(GameEvent::ScoreChanged(0));
        self.try_start();
    }

    /// Steer the paddle. Returns whether it moved.
    pub fn on_pointer_move(&self, x: f32, _y: f32) -> bool {
        self.input().set_paddle_target_x(x)
    }

    fn notify(&self, event: GameEvent) {
        dispatch(self.sink.as_deref(), &[event]);
    }

    /// Spawn the loop thread if every start condition holds.
    /// Returns whether the loop is running afterwards.
    fn try_start(&mut self) -> bool {
        if let Some(handle) = &self.worker {
            if !handle.is_finished() {
                return true;
            }
            // Thread died without being asked to stop
            self.stop();
        }

        if !self.surface_ready {
            log::debug!("Not starting game loop: surface not ready");
            return false;
        }
        if self.paused {
            log::debug!("Not starting game loop: paused");
            return false;
        }
        if self.game.lock().is_over() {
            log::debug!("Not starting game loop: game over");
            return false;
        }

        self.running.store(true, Ordering::Release);
        let worker = Worker {
            game: self.game.clone(),
            presenter: Arc::clone(&self.presenter),
            sink: self.sink.clone(),
            running: Arc::clone(&self.running),
            ticks: Arc::clone(&self.ticks),
            frame_stats_interval: self.frame_stats_interval,
        };

        match thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || worker.run())
        {
            Ok(handle) => {
                self.worker = Some(handle);
                log::info!("Game loop started");
                true
            }
            Err(e) => {
                self.running.store(false, Ordering::Release);
                log::error!("Failed to spawn game loop thread: {e}");
                false
            }
        }
    }

    /// Clear the running flag and wait for the loop thread to finish
    fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        let Some(handle) = self.worker.take() else {
            return;
        };

        if handle.join().is_err() {
            log::error!("Game loop thread panicked; treating the loop as stopped");
        } else {
            log::info!("Game loop stopped");
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
