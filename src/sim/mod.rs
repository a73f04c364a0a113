//! Simulation module
//!
//! All gameplay logic lives here:
//! - One call to `advance` per tick
//! - Paddle moves only through `InputController`
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod input;
pub mod state;
pub mod tick;

pub use events::{GameEvent, GameEventSink};
pub use input::{InputController, paddle_left_for_pointer};
pub use state::{Ball, GamePhase, GameState, Paddle, Rect, SharedGame, Viewport};
pub use tick::advance;
