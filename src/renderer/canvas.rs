//! Drawing primitives and the surface that hands them out

use glam::Vec2;

use crate::sim::Rect;

/// Linear RGBA, each channel in 0..=1
pub type Rgba = [f32; 4];

/// Something the scene can be painted onto
pub trait Canvas {
    /// Fill the whole canvas
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// A host-owned surface that can lend out a canvas for one frame.
pub trait RenderSurface: Send {
    /// Lock a canvas, run `paint` on it, then post the frame.
    ///
    /// Returns `false` without calling `paint` when no canvas is available
    /// (surface not created yet, or already destroyed).
    fn present(&mut self, paint: &mut dyn FnMut(&mut dyn Canvas)) -> bool;
}
