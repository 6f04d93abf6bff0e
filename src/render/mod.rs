//! Rasterization internals.
//!
//! Owns the screen-space [`Triangle`] primitive, the [`Rasterizer`] trait
//! and the buffer types everything draws into.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::EdgeFunctionRasterizer;
pub use renderer::{BufferError, Renderer};

/// A screen-space vertex: integer pixel coordinates plus view-space depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    pub x: i32,
    pub y: i32,
    pub z: f32,
}

impl ScreenVertex {
    pub const fn new(x: i32, y: i32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A triangle ready for rasterization in screen space.
///
/// Carries the flat face color as an RGB triplet and a single scalar
/// brightness computed by the frame pipeline from the face normal. The
/// rasterizer applies `shade` uniformly over the face (flat shading).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [ScreenVertex; 3],
    pub color: (u8, u8, u8),
    pub shade: f32,
}

impl Triangle {
    pub fn new(points: [ScreenVertex; 3], color: (u8, u8, u8), shade: f32) -> Self {
        Self {
            points,
            color,
            shade,
        }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer,
/// which keeps the fill strategy swappable for benchmarking.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with depth testing.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer);
}
