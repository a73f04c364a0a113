//! Rendering module
//!
//! The presenter draws through the `Canvas` trait, so any host backend works:
//! the software `FrameBuffer` or a GPU host fed by `MeshCanvas` triangles.

pub mod canvas;
pub mod framebuffer;
pub mod mesh;
pub mod presenter;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, RenderSurface, Rgba};
pub use framebuffer::{FrameBuffer, FrameBufferSurface};
pub use mesh::MeshCanvas;
pub use presenter::{Presenter, draw_scene};
pub use vertex::{Vertex, colors};
