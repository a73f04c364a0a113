//! Collision predicates for the ball against the viewport and the paddle
//!
//! Simple arcade physics: every check looks at the ball's position after
//! integration and the caller only flips velocity components. There is no
//! penetration correction, so an overlapping ball is pushed back out by its
//! own reversed velocity on the following ticks.

use super::state::{Ball, Paddle, Viewport};

/// Ball overlaps the left or right edge of the viewport
pub fn hits_side_wall(ball: &Ball, viewport: Viewport) -> bool {
    let r = ball.radius();
    ball.pos.x - r < 0.0 || ball.pos.x + r > viewport.width
}

/// Ball overlaps the top edge of the viewport
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y - ball.radius() < 0.0
}

/// Ball's vertical extent overlaps the paddle band and its center lies within the paddle span.
///
/// Only the ball center is tested horizontally, so a ball clipping a paddle
/// corner with its edge passes by.
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.radius();
    let rect = &paddle.rect;
    ball.pos.y + r >= rect.top
        && ball.pos.y - r <= rect.bottom
        && ball.pos.x >= rect.left
        && ball.pos.x <= rect.right
}

/// Ball is completely below the viewport
pub fn fell_through(ball: &Ball, viewport: Viewport) -> bool {
    ball.pos.y - ball.radius() > viewport.height
}

/// Grow a velocity component's magnitude by `increment`, keeping its sign.
/// A zero component grows in the negative direction.
#[inline]
pub fn boost(component: f32, increment: f32) -> f32 {
    if component > 0.0 {
        component + increment
    } else {
        component - increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rect;
    use glam::Vec2;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 2000.0);

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    fn paddle() -> Paddle {
        Paddle {
            rect: Rect::new(400.0, 1920.0, 600.0, 1950.0),
        }
    }

    #[test]
    fn test_side_walls() {
        assert!(!hits_side_wall(&ball_at(500.0, 500.0), VIEWPORT));
        assert!(!hits_side_wall(&ball_at(20.0, 500.0), VIEWPORT));
        assert!(hits_side_wall(&ball_at(19.0, 500.0), VIEWPORT));
        assert!(!hits_side_wall(&ball_at(980.0, 500.0), VIEWPORT));
        assert!(hits_side_wall(&ball_at(981.0, 500.0), VIEWPORT));
    }

    #[test]
    fn test_ceiling() {
        assert!(!hits_ceiling(&ball_at(500.0, 20.0)));
        assert!(hits_ceiling(&ball_at(500.0, 19.5)));
    }

    #[test]
    fn test_paddle_band_edges_are_inclusive() {
        // Touching the top edge from above
        assert!(hits_paddle(&ball_at(500.0, 1900.0), &paddle()));
        // Touching the bottom edge from below
        assert!(hits_paddle(&ball_at(500.0, 1970.0), &paddle()));
        // Just above the band
        assert!(!hits_paddle(&ball_at(500.0, 1899.0), &paddle()));
        // Center exactly on a paddle end
        assert!(hits_paddle(&ball_at(400.0, 1930.0), &paddle()));
        assert!(hits_paddle(&ball_at(600.0, 1930.0), &paddle()));
    }

    #[test]
    fn test_paddle_uses_center_only() {
        // The circumference overlaps the paddle corner but the center is outside the span
        assert!(!hits_paddle(&ball_at(390.0, 1930.0), &paddle()));
        assert!(!hits_paddle(&ball_at(610.0, 1930.0), &paddle()));
    }

    #[test]
    fn test_fell_through() {
        assert!(!fell_through(&ball_at(500.0, 2020.0), VIEWPORT));
        assert!(fell_through(&ball_at(500.0, 2020.5), VIEWPORT));
    }

    #[test]
    fn test_boost_preserves_sign() {
        assert_eq!(boost(10.0, 1.0), 11.0);
        assert_eq!(boost(-10.0, 1.0), -11.0);
        assert_eq!(boost(0.0, 1.0), -1.0);
    }
}
