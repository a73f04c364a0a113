//! Draws game state snapshots onto a render surface

use super::canvas::{Canvas, RenderSurface};
use crate::settings::Palette;
use crate::sim::GameState;

/// Paint one frame: background, paddle, ball
pub fn draw_scene(canvas: &mut dyn Canvas, state: &GameState, palette: &Palette) {
    canvas.clear(palette.background);
    canvas.fill_rect(state.paddle.rect, palette.paddle);
    canvas.fill_circle(state.ball.pos, state.ball.radius(), palette.ball);
}

/// Owns the surface the loop draws to and the colors it draws with
pub struct Presenter {
    surface: Box<dyn RenderSurface>,
    palette: Palette,
}

impl Presenter {
    pub fn new(surface: Box<dyn RenderSurface>, palette: Palette) -> Self {
        Self { surface, palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw `state` and post the frame. Returns `false` if the surface had no
    /// canvas to give, in which case the frame is skipped.
    pub fn render(&mut self, state: &GameState) -> bool {
        let palette = self.palette;
        self.surface
            .present(&mut |canvas| draw_scene(canvas, state, &palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::CIRCLE_SEGMENTS;
    use crate::renderer::{FrameBufferSurface, MeshCanvas};
    use crate::sim::Viewport;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        let mut rng = Pcg32::seed_from_u64(9);
        GameState::new(Viewport::new(400.0, 600.0), &mut rng)
    }

    fn rgba8(color: [f32; 4]) -> [u8; 4] {
        color.map(|c| (c * 255.0).round() as u8)
    }

    #[test]
    fn test_render_draws_scene() {
        let host = FrameBufferSurface::new(400, 600);
        let palette = Palette::default();
        let mut presenter = Presenter::new(Box::new(host.clone()), palette);
        let state = state();

        assert!(presenter.render(&state));

        let frame = host.front();
        // Ball at the viewport center
        assert_eq!(frame.pixel(200, 300), Some(rgba8(palette.ball)));
        // Paddle spans x 100..300, y 520..550
        assert_eq!(frame.pixel(150, 530), Some(rgba8(palette.paddle)));
        assert_eq!(frame.pixel(5, 5), Some(rgba8(palette.background)));
    }

    #[test]
    fn test_render_skips_unavailable_surface() {
        let host = FrameBufferSurface::new(400, 600);
        host.set_available(false);
        let mut presenter = Presenter::new(Box::new(host.clone()), Palette::default());

        assert!(!presenter.render(&state()));
        assert_eq!(host.frames_posted(), 0);
    }

    #[test]
    fn test_scene_tessellation() {
        let mut mesh = MeshCanvas::new();
        let palette = Palette::default();
        draw_scene(&mut mesh, &state(), &palette);

        assert_eq!(mesh.clear_color(), Some(palette.background));
        assert_eq!(mesh.vertices().len(), 6 + CIRCLE_SEGMENTS as usize * 3);
        assert_eq!(mesh.vertices()[0].color, palette.paddle);
        assert_eq!(mesh.vertices()[6].color, palette.ball);
    }
}
