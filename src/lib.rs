//! Ping Pong - A single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, collisions, paddle input, events)
//! - `renderer`: Canvas abstraction, software frame buffer and mesh tessellation
//! - `game_loop`: Dedicated simulation thread and its start/stop state machine
//! - `platform`: Host signal types
//! - `settings`: Externally supplied palette and loop options

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::GameLoop;
pub use platform::HostSignal;
pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Gap between the paddle's bottom edge and the viewport bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START_SPEED: f32 = 10.0;
    /// Added to each velocity component's magnitude on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 1.0;

    /// Simulation cadence (~60 ticks per second)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
}
