//! Fixed cadence simulation tick
//!
//! Advances the ball one step and resolves its collisions.

use super::collision::{boost, fell_through, hits_ceiling, hits_paddle, hits_side_wall};
use super::events::GameEvent;
use super::state::{GamePhase, GameState};
use crate::consts::BALL_SPEED_INCREMENT;

/// Advance the game state by one tick, returning the events it produced.
///
/// Does nothing once the game is over. The paddle branch has no re-entry
/// guard: a ball that stays inside the paddle band bounces (and scores) again
/// on every tick it remains there.
pub fn advance(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if hits_side_wall(ball, state.viewport) {
        ball.vel.x = -ball.vel.x;
        log::trace!("wall bounce at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
    }

    if hits_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
        log::trace!("ceiling bounce at x={:.1}", ball.pos.x);
    }

    if hits_paddle(ball, &state.paddle) {
        ball.vel.y = -ball.vel.y;
        // Speed up slightly with each paddle hit
        ball.vel.x = boost(ball.vel.x, BALL_SPEED_INCREMENT);
        ball.vel.y = boost(ball.vel.y, BALL_SPEED_INCREMENT);

        state.score += 1;
        log::trace!("paddle hit, score {}", state.score);
        events.push(GameEvent::ScoreChanged(state.score));
    }

    if fell_through(ball, state.viewport) {
        state.phase = GamePhase::GameOver;
        log::info!("game over with score {}", state.score);
        events.push(GameEvent::GameOver(state.score));
    }

    events
}
