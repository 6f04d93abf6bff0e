//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers
//! and implements basic drawing operations like lines and wireframes.

use std::fmt;

use super::framebuffer::FrameBuffer;
use super::Triangle;
use crate::colors;

/// Errors produced when constructing a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height was zero; a renderer cannot exist in a
    /// partially-constructed state.
    InvalidDimension { width: u32, height: u32 },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidDimension { width, height } => {
                write!(f, "invalid buffer dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Owns a row-major ARGB8888 color buffer and a parallel depth buffer.
///
/// Both buffers are allocated once at construction for a fixed size and
/// freed when the renderer is dropped; there is no resizing. The depth
/// buffer stores view-space z per pixel and is cleared to `f32::INFINITY`
/// at the start of each frame, decreasing monotonically per pixel as
/// closer surfaces are drawn.
#[derive(Debug)]
pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer for a fixed (width, height).
    ///
    /// Fails with [`BufferError::InvalidDimension`] when either dimension
    /// is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimension { width, height });
        }
        let size = (width * height) as usize;
        Ok(Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every cell with the given flat color at full brightness.
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        self.color_buffer.fill(colors::pack_color(r, g, b));
    }

    /// Reset the depth buffer so any depth-tested write will pass.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
    }

    /// Unconditional pixel write; silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Depth-tested pixel write; see [`FrameBuffer::set_pixel_with_depth`].
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            if depth < self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Draws a 1-pixel-wide 8-connected line between two integer points
    /// using Bresenham's algorithm.
    ///
    /// The line is classified as steep (|dy| > |dx|) or shallow and the
    /// coordinates swapped so the major axis always advances in unit
    /// steps. Endpoints are then ordered so iteration runs from the lower
    /// to the higher major coordinate, which makes the lit pixel set
    /// independent of the endpoint order.
    ///
    /// Lines bypass the depth test entirely: they always draw on top of
    /// whatever is in the buffer. Out-of-bounds pixels are silently
    /// clipped by `set_pixel`. A zero-length line draws exactly one pixel.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();

        // Iterate the major axis as "x"; swap back when plotting.
        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx / 2;
        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                self.set_pixel(y, x, color);
            } else {
                self.set_pixel(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += y_step;
                err += dx;
            }
        }
    }

    /// Draws the three edges of a screen-space triangle.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: u32) {
        let [p0, p1, p2] = triangle.points;
        self.draw_line(p0.x, p0.y, p1.x, p1.y, color);
        self.draw_line(p1.x, p1.y, p2.x, p2.y, color);
        self.draw_line(p2.x, p2.y, p0.x, p0.y, color);
    }

    /// The buffer contents as raw bytes, row-major, 4 bytes per pixel.
    ///
    /// Each pixel is a native-endian ARGB8888 word, so on little-endian
    /// hosts the byte order within a pixel is B,G,R,A. The slice is a
    /// borrowed read-only snapshot over the same allocation for the
    /// lifetime of the renderer; it stays valid until the next mutation
    /// and must be copied before any concurrent presentation.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// The buffer contents as packed ARGB words, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}
