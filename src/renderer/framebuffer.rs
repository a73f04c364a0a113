//! Software RGBA8 frame buffer and a headless surface built on it

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use glam::Vec2;

use super::canvas::{Canvas, RenderSurface, Rgba};
use crate::sim::Rect;

/// Quantize a linear color to RGBA8
fn to_rgba8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Pixel indices whose centers fall inside `[lo, hi)`, clipped to `0..limit`
fn span(lo: f32, hi: f32, limit: u32) -> Option<Range<usize>> {
    let start = lo.round().max(0.0);
    let end = hi.round().min(limit as f32);
    if start >= end {
        return None;
    }
    Some(start as usize..end as usize)
}

/// A CPU-side image. Fills are opaque; there is no blending.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Raw RGBA8 bytes, row-major, ready for upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy `other` into this buffer, reusing the allocation
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clone_from(&other.pixels);
    }

    fn fill_row(&mut self, y: usize, xs: Range<usize>, rgba: [u8; 4]) {
        let row = y * self.width as usize;
        self.pixels[row + xs.start..row + xs.end].fill(rgba);
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(to_rgba8(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let rgba = to_rgba8(color);
        let (Some(xs), Some(ys)) = (
            span(rect.left, rect.right, self.width),
            span(rect.top, rect.bottom, self.height),
        ) else {
            return;
        };
        for y in ys {
            self.fill_row(y, xs.clone(), rgba);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let rgba = to_rgba8(color);
        let Some(ys) = span(center.y - radius, center.y + radius, self.height) else {
            return;
        };
        let r2 = radius * radius;
        for y in ys {
            let dy = y as f32 + 0.5 - center.y;
            let d2 = r2 - dy * dy;
            if d2 < 0.0 {
                continue;
            }
            let half = d2.sqrt();
            if let Some(xs) = span(center.x - half, center.x + half, self.width) {
                self.fill_row(y, xs, rgba);
            }
        }
    }
}

struct SurfaceInner {
    front: Mutex<FrameBuffer>,
    available: AtomicBool,
    posted: AtomicU64,
}

/// Headless double-buffered surface.
///
/// Clones share the posted front buffer and the availability switch, so the
/// host keeps one clone to inspect frames while the loop draws through another.
#[derive(Clone)]
pub struct FrameBufferSurface {
    inner: Arc<SurfaceInner>,
    back: FrameBuffer,
}

impl FrameBufferSurface {
    /// New surface, available immediately
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(SurfaceInner {
                front: Mutex::new(FrameBuffer::new(width, height)),
                available: AtomicBool::new(true),
                posted: AtomicU64::new(0),
            }),
            back: FrameBuffer::new(width, height),
        }
    }

    /// Mark the surface created/destroyed
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::Release);
    }

    pub fn is_available(&self) -> bool {
        self.inner.available.load(Ordering::Acquire)
    }

    /// Replace the front buffer with a blank one of the new size
    pub fn resize(&self, width: u32, height: u32) {
        *self.lock_front() = FrameBuffer::new(width, height);
    }

    /// Number of frames posted since creation
    pub fn frames_posted(&self) -> u64 {
        self.inner.posted.load(Ordering::Acquire)
    }

    /// Copy of the last posted frame
    pub fn front(&self) -> FrameBuffer {
        self.lock_front().clone()
    }

    fn lock_front(&self) -> std::sync::MutexGuard<'_, FrameBuffer> {
        self.inner
            .front
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderSurface for FrameBufferSurface {
    fn present(&mut self, paint: &mut dyn FnMut(&mut dyn Canvas)) -> bool {
        if !self.is_available() {
            return false;
        }

        let (width, height) = {
            let front = self.lock_front();
            (front.width(), front.height())
        };
        if (self.back.width(), self.back.height()) != (width, height) {
            self.back = FrameBuffer::new(width, height);
        }

        paint(&mut self.back);

        self.lock_front().copy_from(&self.back);
        self.inner.posted.fetch_add(1, Ordering::AcqRel);
        true
    }
}
