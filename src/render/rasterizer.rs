//! Edge function-based triangle rasterization.
//!
//! Fills a screen-space triangle by iterating its bounding box and testing
//! every pixel against three edge equations.
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! This is the 2D cross product (B - A) x (P - A): positive when P lies to
//! the left of AB, negative to the right, zero on the edge. A pixel is
//! inside the triangle when all three edge values share a sign, which
//! handles both clockwise and counter-clockwise winding without the caller
//! pre-normalizing vertex order.
//!
//! # Barycentric Coordinates
//!
//! Dividing the edge values by the total signed area gives barycentric
//! weights that sum to 1; depth is interpolated linearly through them.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::{FrameBuffer, Rasterizer, Triangle};
use crate::colors;

/// Below this twice-area magnitude a triangle is considered degenerate
/// (collinear or zero-size after rounding) and skipped entirely.
const DEGENERATE_AREA_EPSILON: f32 = 1e-6;

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates all pixels in the triangle's bounding box (clipped to the
/// buffer), interpolates depth through barycentric weights, and writes the
/// flat shaded color through the depth gate.
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer {}
    }

    /// Computes the edge function value for point (px, py) relative to the
    /// directed edge (a -> b).
    #[inline]
    fn edge_function(a: (i32, i32), b: (i32, i32), px: i32, py: i32) -> f32 {
        ((px - a.0) * (b.1 - a.1) - (py - a.1) * (b.0 - a.0)) as f32
    }
}

impl Default for EdgeFunctionRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [v0, v1, v2] = triangle.points;
        let a = (v0.x, v0.y);
        let b = (v1.x, v1.y);
        let c = (v2.x, v2.y);

        // Bounding box clipped to the buffer.
        let min_x = v0.x.min(v1.x).min(v2.x).max(0);
        let max_x = v0.x.max(v1.x).max(v2.x).min(buffer.width() as i32 - 1);
        let min_y = v0.y.min(v1.y).min(v2.y).max(0);
        let max_y = v0.y.max(v1.y).max(v2.y).min(buffer.height() as i32 - 1);

        // Twice the signed area; near-zero means collinear or zero-size.
        let area = Self::edge_function(a, b, c.0, c.1);
        if area.abs() < DEGENERATE_AREA_EPSILON {
            return;
        }
        let inv_area = 1.0 / area;

        let (r, g, bl) = triangle.color;
        let shaded = colors::pack_shaded(r, g, bl, triangle.shade);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let e0 = Self::edge_function(b, c, x, y);
                let e1 = Self::edge_function(c, a, x, y);
                let e2 = Self::edge_function(a, b, x, y);

                // Inside test, winding independent.
                let inside = if area > 0.0 {
                    e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0
                } else {
                    e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0
                };
                if !inside {
                    continue;
                }

                // Barycentric weights sum to 1; linear depth interpolation.
                let w0 = e0 * inv_area;
                let w1 = e1 * inv_area;
                let w2 = e2 * inv_area;
                let z = w0 * v0.z + w1 * v1.z + w2 * v2.z;

                buffer.set_pixel_with_depth(x, y, z, shaded);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::pack_color;
    use crate::render::{Renderer, ScreenVertex};
    use approx::assert_relative_eq;

    fn tri(points: [(i32, i32, f32); 3], color: (u8, u8, u8), shade: f32) -> Triangle {
        Triangle::new(
            [
                ScreenVertex::new(points[0].0, points[0].1, points[0].2),
                ScreenVertex::new(points[1].0, points[1].1, points[1].2),
                ScreenVertex::new(points[2].0, points[2].1, points[2].2),
            ],
            color,
            shade,
        )
    }

    fn filled_pixels(r: &Renderer, background: u32) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..r.height() as i32 {
            for x in 0..r.width() as i32 {
                if r.pixels()[(y * r.width() as i32 + x) as usize] != background {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn interior_pixel_gets_flat_color() {
        let mut r = Renderer::new(4, 4).unwrap();
        r.clear(0, 0, 0);
        let t = tri([(0, 0, 1.0), (3, 0, 1.0), (0, 3, 1.0)], (255, 0, 0), 1.0);
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());

        // (1, 1) is interior: all barycentric weights positive.
        assert_eq!(r.pixels()[1 * 4 + 1], colors::RED);
        // (3, 3) lies outside the hypotenuse and keeps the clear color.
        assert_eq!(r.pixels()[3 * 4 + 3], pack_color(0, 0, 0));
    }

    #[test]
    fn winding_order_does_not_change_coverage() {
        let ccw = tri([(1, 1, 0.5), (7, 2, 0.5), (3, 7, 0.5)], (0, 255, 0), 1.0);
        let cw = tri([(3, 7, 0.5), (7, 2, 0.5), (1, 1, 0.5)], (0, 255, 0), 1.0);

        let mut ra = Renderer::new(9, 9).unwrap();
        ra.clear(0, 0, 0);
        EdgeFunctionRasterizer::new().fill_triangle(&ccw, &mut ra.as_framebuffer());

        let mut rb = Renderer::new(9, 9).unwrap();
        rb.clear(0, 0, 0);
        EdgeFunctionRasterizer::new().fill_triangle(&cw, &mut rb.as_framebuffer());

        let bg = pack_color(0, 0, 0);
        assert_eq!(filled_pixels(&ra, bg), filled_pixels(&rb, bg));
        assert!(!filled_pixels(&ra, bg).is_empty());
    }

    #[test]
    fn collinear_triangle_draws_nothing() {
        let mut r = Renderer::new(8, 8).unwrap();
        r.clear(0, 0, 0);
        let t = tri([(0, 0, 1.0), (3, 3, 1.0), (6, 6, 1.0)], (255, 255, 255), 1.0);
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());
        assert!(filled_pixels(&r, pack_color(0, 0, 0)).is_empty());
    }

    #[test]
    fn coincident_vertices_draw_nothing() {
        let mut r = Renderer::new(8, 8).unwrap();
        r.clear(0, 0, 0);
        let t = tri([(2, 2, 1.0), (2, 2, 1.0), (5, 6, 1.0)], (255, 255, 255), 1.0);
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());
        assert!(filled_pixels(&r, pack_color(0, 0, 0)).is_empty());
    }

    #[test]
    fn closer_triangle_wins_either_submission_order() {
        let near = tri([(0, 0, 0.5), (7, 0, 0.5), (0, 7, 0.5)], (255, 0, 0), 1.0);
        let far = tri([(0, 0, 0.8), (7, 0, 0.8), (0, 7, 0.8)], (0, 0, 255), 1.0);

        for order in [[near, far], [far, near]] {
            let mut r = Renderer::new(8, 8).unwrap();
            r.clear(0, 0, 0);
            r.clear_depth();
            let raster = EdgeFunctionRasterizer::new();
            let mut fb = r.as_framebuffer();
            for t in &order {
                raster.fill_triangle(t, &mut fb);
            }
            assert_eq!(r.pixels()[2 * 8 + 2], colors::RED);
        }
    }

    #[test]
    fn shade_scales_the_flat_color() {
        let mut r = Renderer::new(4, 4).unwrap();
        r.clear(0, 0, 0);
        let t = tri([(0, 0, 1.0), (3, 0, 1.0), (0, 3, 1.0)], (200, 100, 50), 0.5);
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());
        assert_eq!(r.pixels()[1 * 4 + 1], pack_color(100, 50, 25));
    }

    #[test]
    fn depth_interpolates_across_the_face() {
        let mut r = Renderer::new(8, 8).unwrap();
        r.clear(0, 0, 0);
        // Depth ramps from 0 at x=0 to 7 at x=7 along the bottom edge.
        let t = tri([(0, 0, 0.0), (7, 0, 7.0), (0, 7, 0.0)], (255, 255, 255), 1.0);
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());
        let fb = r.as_framebuffer();
        assert_relative_eq!(fb.get_depth(0, 0).unwrap(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(fb.get_depth(4, 0).unwrap(), 4.0, epsilon = 1e-4);
        assert_relative_eq!(fb.get_depth(7, 0).unwrap(), 7.0, epsilon = 1e-4);
    }

    #[test]
    fn bounding_box_is_clipped_to_buffer() {
        let mut r = Renderer::new(4, 4).unwrap();
        r.clear(0, 0, 0);
        let t = tri(
            [(-10, -10, 1.0), (20, -10, 1.0), (-10, 20, 1.0)],
            (255, 255, 255),
            1.0,
        );
        EdgeFunctionRasterizer::new().fill_triangle(&t, &mut r.as_framebuffer());
        // Every in-bounds pixel is covered; nothing panicked out of bounds.
        assert_eq!(filled_pixels(&r, pack_color(0, 0, 0)).len(), 16);
    }
}
