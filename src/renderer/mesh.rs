//! Canvas that records triangles for GPU-backed hosts

use glam::Vec2;

use super::canvas::{Canvas, Rgba};
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Collects one frame as a triangle list in viewport coordinates.
///
/// `clear` becomes the frame's clear color (a render pass load op) and drops
/// anything recorded before it.
#[derive(Debug, Default, Clone)]
pub struct MeshCanvas {
    clear_color: Option<Rgba>,
    vertices: Vec<Vertex>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_color(&self) -> Option<Rgba> {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = Some(color);
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.vertices.extend_from_slice(&shapes::rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }
}
