//! Game state and core simulation types
//!
//! Everything the loop thread advances and the renderer draws lives here.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Ball fell below the viewport; only a restart leaves this phase
    GameOver,
}

/// Drawable area supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned rectangle in viewport coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered horizontally, bottom edge `PADDLE_BOTTOM_OFFSET` above the viewport bottom
    pub fn centered(viewport: Viewport) -> Self {
        let left = Self::clamp_left(viewport.width / 2.0 - PADDLE_WIDTH / 2.0, viewport.width);
        let top = viewport.height - PADDLE_HEIGHT - PADDLE_BOTTOM_OFFSET;
        Self {
            rect: Rect::new(left, top, left + PADDLE_WIDTH, top + PADDLE_HEIGHT),
        }
    }

    /// Clamp a left edge into `[0, viewport_width - PADDLE_WIDTH]`.
    ///
    /// A viewport narrower than the paddle pins it to the left edge.
    pub fn clamp_left(left: f32, viewport_width: f32) -> f32 {
        let max_left = (viewport_width - PADDLE_WIDTH).max(0.0);
        left.clamp(0.0, max_left)
    }

    /// Slide horizontally to `left` (clamped); vertical extent is untouched.
    ///
    /// The right edge is always rebuilt from `PADDLE_WIDTH`, never from the
    /// previous rect, so repeated moves cannot drift the width.
    pub fn move_to(&mut self, left: f32, viewport_width: f32) {
        let left = Self::clamp_left(left, viewport_width);
        let top = self.rect.top;
        self.rect = Rect::new(left, top, left + PADDLE_WIDTH, top + PADDLE_HEIGHT);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball radius is fixed for the lifetime of the game
    pub const RADIUS: f32 = BALL_RADIUS;

    /// Ball at the viewport center heading downward, horizontally left or right
    pub fn serve(viewport: Viewport, rightward: bool) -> Self {
        let vx = if rightward {
            BALL_START_SPEED
        } else {
            -BALL_START_SPEED
        };
        Self {
            pos: viewport.center(),
            vel: Vec2::new(vx, BALL_START_SPEED),
        }
    }

    pub fn radius(&self) -> f32 {
        Self::RADIUS
    }
}

/// Complete game state
///
/// Small and `Copy` so the loop can hand the renderer a snapshot without holding the lock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Paddle hits this session
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh session: paddle and ball centered, serve direction drawn from `rng`
    pub fn new<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            viewport,
            paddle: Paddle::centered(viewport),
            ball: Ball::serve(viewport, rng.random_bool(0.5)),
            score: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Start a new session in the current viewport
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(self.viewport, rng);
    }

    /// Start a new session in a new viewport
    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        *self = Self::new(viewport, rng);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Game state shared between the host thread and the loop thread
#[derive(Debug, Clone)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    /// Lock the state. A panic mid-tick leaves plain data behind, so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> GameState {
        *self.lock()
    }
}
