//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used to tessellate the ball
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = Vertex::new(rect.left, rect.top, color);
    let tr = Vertex::new(rect.right, rect.top, color);
    let bl = Vertex::new(rect.left, rect.bottom, color);
    let br = Vertex::new(rect.right, rect.bottom, color);
    [tl, bl, tr, tr, bl, br]
}

/// Filled circle as a triangle fan around `center`, one triangle per segment
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim = |i: u32| center + Vec2::from_angle(i as f32 * step) * radius;
    let hub = Vertex::new(center.x, center.y, color);

    (0..segments)
        .flat_map(|i| {
            let (a, b) = (rim(i), rim(i + 1));
            [hub, Vertex::new(a.x, a.y, color), Vertex::new(b.x, b.y, color)]
        })
        .collect()
}
