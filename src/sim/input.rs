//! Pointer input to paddle position

use super::state::{Paddle, SharedGame};
use crate::consts::PADDLE_WIDTH;

/// Left edge that centers the paddle under `pointer_x`, clamped to the viewport
pub fn paddle_left_for_pointer(pointer_x: f32, viewport_width: f32) -> f32 {
    Paddle::clamp_left(pointer_x - PADDLE_WIDTH / 2.0, viewport_width)
}

/// Moves the paddle from pointer events.
///
/// Cheap to clone; hand one to whichever thread delivers pointer events.
#[derive(Debug, Clone)]
pub struct InputController {
    game: SharedGame,
}

impl InputController {
    pub fn new(game: SharedGame) -> Self {
        Self { game }
    }

    /// Center the paddle under the pointer. Returns whether the paddle was moved.
    ///
    /// Ignored once the game is over, and for NaN coordinates.
    pub fn set_paddle_target_x(&self, pointer_x: f32) -> bool {
        if pointer_x.is_nan() {
            return false;
        }

        let mut state = self.game.lock();
        if state.is_over() {
            return false;
        }

        let width = state.viewport.width;
        state
            .paddle
            .move_to(paddle_left_for_pointer(pointer_x, width), width);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, GameState, Viewport};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 2000.0);

    fn controller() -> (SharedGame, InputController) {
        let mut rng = Pcg32::seed_from_u64(3);
        let game = SharedGame::new(GameState::new(VIEWPORT, &mut rng));
        let input = InputController::new(game.clone());
        (game, input)
    }

    #[test]
    fn test_centers_paddle_under_pointer() {
        let (game, input) = controller();
        assert!(input.set_paddle_target_x(300.0));

        let rect = game.snapshot().paddle.rect;
        assert_eq!(rect.left, 200.0);
        assert_eq!(rect.right, 400.0);
        assert_eq!(rect.top, 1920.0);
        assert_eq!(rect.bottom, 1950.0);
    }

    #[test]
    fn test_clamps_to_edges() {
        let (game, input) = controller();

        input.set_paddle_target_x(10.0);
        assert_eq!(game.snapshot().paddle.rect.left, 0.0);

        input.set_paddle_target_x(995.0);
        assert_eq!(game.snapshot().paddle.rect.right, 1000.0);

        input.set_paddle_target_x(f32::NEG_INFINITY);
        assert_eq!(game.snapshot().paddle.rect.left, 0.0);

        input.set_paddle_target_x(f32::INFINITY);
        assert_eq!(game.snapshot().paddle.rect.left, 800.0);
    }

    #[test]
    fn test_ignored_after_game_over() {
        let (game, input) = controller();
        game.lock().phase = GamePhase::GameOver;

        assert!(!input.set_paddle_target_x(100.0));
        assert_eq!(game.snapshot().paddle.rect.left, 400.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let (game, input) = controller();
        assert!(!input.set_paddle_target_x(f32::NAN));
        assert_eq!(game.snapshot().paddle.rect.left, 400.0);
    }

    #[test]
    fn test_concurrent_pointer_events_keep_width() {
        let (game, input) = controller();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let input = input.clone();
                std::thread::spawn(move || {
                    for step in 0..500 {
                        let x = (step * (i + 1)) as f32 * 0.7311 % 1200.0 - 100.0;
                        input.set_paddle_target_x(x);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let rect = game.snapshot().paddle.rect;
        assert_eq!(rect.right, rect.left + PADDLE_WIDTH);
        assert!((rect.width() - PADDLE_WIDTH).abs() < 1e-4);
        assert!(rect.left >= 0.0 && rect.right <= VIEWPORT.width);
    }

    proptest! {
        #[test]
        fn prop_paddle_left_always_clamped(
            pointer_x in proptest::num::f32::ANY,
            width in 200.0f32..4000.0,
        ) {
            prop_assume!(!pointer_x.is_nan());
            let left = paddle_left_for_pointer(pointer_x, width);
            prop_assert!(left >= 0.0);
            prop_assert!(left <= width - PADDLE_WIDTH);
        }
    }
}
