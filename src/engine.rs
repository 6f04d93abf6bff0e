//! Core rendering pipeline.
//!
//! The [`Engine`] struct is the main entry point. Per frame it rotates the
//! current mesh, projects it to screen space through a pinhole camera,
//! computes flat shading from a directional light, and submits the
//! resulting screen-space triangles and lines to the rasterizer. Triangles
//! are submitted in mesh order; the depth test resolves visibility, so no
//! sorting is needed.
//!
//! # Known limitation
//!
//! There is no near-plane clipping: a vertex whose view-space depth reaches
//! or crosses zero produces a garbage screen coordinate. This matches the
//! accepted behavior of the pipeline and is deliberately not special-cased.

use crate::colors;
use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::mesh::{LoadError, Mesh, MeshSource};
use crate::render::{
    BufferError, EdgeFunctionRasterizer, Rasterizer, Renderer, ScreenVertex, Triangle,
};

const DEFAULT_CAMERA_Z: f32 = 3.5;
const DEFAULT_FOV_DEGREES: f32 = 90.0;
const CLEAR_COLOR: (u8, u8, u8) = (10, 10, 30);
const LIGHT_DIRECTION: Vec3 = Vec3::new(-1.0, 0.0, -0.5);

pub struct Engine {
    renderer: Renderer,
    rasterizer: EdgeFunctionRasterizer,
    mesh: Mesh,
    camera_z: f32,
    /// Pinhole projection factor, derived once from FOV and buffer width:
    /// `(1 / tan(fov / 2)) * width / 2`.
    fov_scale: f32,
    light: DirectionalLight,
    angle: f32,
    /// Draw triangle edges on top of filled faces.
    pub wireframe_overlay: bool,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let renderer = Renderer::new(width, height)?;
        let fov = DEFAULT_FOV_DEGREES.to_radians();
        let fov_scale = (1.0 / (fov * 0.5).tan()) * (width as f32 / 2.0);
        Ok(Self {
            renderer,
            rasterizer: EdgeFunctionRasterizer::new(),
            mesh: Mesh::default(),
            camera_z: DEFAULT_CAMERA_Z,
            fov_scale,
            light: DirectionalLight::new(LIGHT_DIRECTION),
            angle: 0.0,
            wireframe_overlay: false,
        })
    }

    /// Swap in a new mesh and restart the rotation from zero.
    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
        self.angle = 0.0;
    }

    /// Load a mesh from any source (shape generator, OBJ file).
    pub fn load(&mut self, source: &dyn MeshSource) -> Result<(), LoadError> {
        let mesh = source.build()?;
        self.set_mesh(mesh);
        Ok(())
    }

    pub fn set_camera_z(&mut self, camera_z: f32) {
        self.camera_z = camera_z;
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    /// Advance the animation by `dt` seconds. The rotation angle grows
    /// monotonically for the lifetime of the current mesh.
    pub fn update(&mut self, dt: f32) {
        self.angle += dt;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// The rendered frame as raw bytes (ARGB8888, row-major).
    ///
    /// A borrowed read-only snapshot, valid until the next `render` call.
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// The rendered frame as packed ARGB words, row-major.
    pub fn pixels(&self) -> &[u32] {
        self.renderer.pixels()
    }

    /// Composed per-frame rotation: about X by `angle * 0.6`, then about Y
    /// by `angle`.
    fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_y(self.angle) * Mat4::rotation_x(self.angle * 0.6)
    }

    /// Projects a rotated vertex to screen space via the pinhole divide.
    ///
    /// Returns integer pixel coordinates plus the view-space depth used
    /// for the z test. No near-plane clipping: `view_z` near zero yields
    /// garbage coordinates.
    fn project(&self, v: Vec3) -> ScreenVertex {
        let view_z = v.z + self.camera_z;
        let x = (v.x / view_z) * self.fov_scale + self.renderer.width() as f32 * 0.5;
        let y = (v.y / view_z) * self.fov_scale + self.renderer.height() as f32 * 0.5;
        ScreenVertex::new(x as i32, y as i32, view_z)
    }

    /// Render one frame: fully rotates, projects and rasterizes the mesh
    /// before returning.
    pub fn render(&mut self) {
        let (cr, cg, cb) = CLEAR_COLOR;
        self.renderer.clear(cr, cg, cb);
        self.renderer.clear_depth();

        let rotation = self.rotation_matrix();
        for tri in &self.mesh.tris {
            let a = rotation.transform(self.mesh.vertices[tri.a]);
            let b = rotation.transform(self.mesh.vertices[tri.b]);
            let c = rotation.transform(self.mesh.vertices[tri.c]);

            // Face normal from the post-rotation, pre-projection edges.
            // normalize() maps a degenerate face to the zero vector, which
            // the light treats as "no contribution".
            let normal = (b - a).cross(c - a).normalize();
            let shade = self.light.intensity(normal);

            let triangle = Triangle::new(
                [self.project(a), self.project(b), self.project(c)],
                tri.color,
                shade,
            );
            self.rasterizer
                .fill_triangle(&triangle, &mut self.renderer.as_framebuffer());
            if self.wireframe_overlay {
                self.renderer
                    .draw_triangle_wireframe(&triangle, colors::WIREFRAME);
            }
        }

        // Edges are unshaded and skip the depth test entirely.
        for edge in &self.mesh.edges {
            let a = self.project(rotation.transform(self.mesh.vertices[edge.a]));
            let b = self.project(rotation.transform(self.mesh.vertices[edge.b]));
            self.renderer.draw_line(a.x, a.y, b.x, b.y, colors::WIREFRAME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::pack_color;
    use crate::mesh::{Edge, Tri};
    use crate::shapes::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn angle_accumulates_and_resets_on_mesh_swap() {
        let mut engine = Engine::new(16, 16).unwrap();
        engine.update(0.5);
        engine.update(0.25);
        assert_relative_eq!(engine.angle(), 0.75);
        engine.set_mesh(Shape::Cube.mesh());
        assert_eq!(engine.angle(), 0.0);
    }

    #[test]
    fn rotation_matrix_applies_x_before_y() {
        let mut engine = Engine::new(8, 8).unwrap();
        engine.update(1.3);
        let v = Vec3::new(0.4, -0.9, 0.2);
        let by_matrix = engine.rotation_matrix().transform(v);
        let by_steps = v.rotate_x(1.3 * 0.6).rotate_y(1.3);
        assert_relative_eq!(by_matrix.x, by_steps.x, epsilon = 1e-5);
        assert_relative_eq!(by_matrix.y, by_steps.y, epsilon = 1e-5);
        assert_relative_eq!(by_matrix.z, by_steps.z, epsilon = 1e-5);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let engine = Engine::new(200, 100).unwrap();
        let p = engine.project(Vec3::ZERO);
        assert_eq!((p.x, p.y), (100, 50));
        assert_relative_eq!(p.z, DEFAULT_CAMERA_Z);
    }

    #[test]
    fn fov_scale_matches_pinhole_formula() {
        // 90 degree FOV: 1/tan(45 deg) == 1, so scale is width/2.
        let engine = Engine::new(640, 480).unwrap();
        let p = engine.project(Vec3::new(1.0, 0.0, -2.5));
        // view_z = 1.0, so x lands a full half-width right of center
        // (within one pixel of float slop in tan).
        assert!((p.x - 640).abs() <= 1, "p.x = {}", p.x);
    }

    #[test]
    fn rendering_a_triangle_touches_the_buffer() {
        let mut engine = Engine::new(64, 64).unwrap();
        engine.set_mesh(Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Tri::new(0, 1, 2, (255, 0, 0))],
            Vec::new(),
        ));
        engine.render();
        let background = pack_color(10, 10, 30);
        assert!(engine.pixels().iter().any(|&c| c != background));
    }

    #[test]
    fn face_turned_away_from_light_renders_black() {
        let mut engine = Engine::new(64, 64).unwrap();
        // Normal is +Z, the default light comes from (-1, 0, -0.5):
        // the dot product is negative, so shade clamps to zero.
        engine.set_mesh(Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Tri::new(0, 1, 2, (255, 255, 255))],
            Vec::new(),
        ));
        engine.render();
        let black = pack_color(0, 0, 0);
        assert!(engine.pixels().contains(&black));
    }

    #[test]
    fn camera_distance_feeds_the_view_depth() {
        let mut engine = Engine::new(16, 16).unwrap();
        engine.set_camera_z(4.0);
        let p = engine.project(Vec3::ZERO);
        assert_relative_eq!(p.z, 4.0);
    }

    #[test]
    fn wire_cube_selection_renders_edges_from_farther_back() {
        let mut engine = Engine::new(64, 64).unwrap();
        let shape = Shape::from_index(5);
        assert_eq!(shape, Shape::WireCube);
        engine.load(&shape).unwrap();
        engine.set_camera_z(shape.camera_z());
        engine.render();
        assert!(engine.pixels().contains(&colors::WIREFRAME));
        assert_relative_eq!(engine.project(Vec3::ZERO).z, 4.0);
    }

    #[test]
    fn wire_mesh_draws_unshaded_lines() {
        let mut engine = Engine::new(64, 64).unwrap();
        engine.set_mesh(Mesh::new(
            vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            Vec::new(),
            vec![Edge::new(0, 1)],
        ));
        engine.render();
        assert!(engine.pixels().contains(&colors::WIREFRAME));
    }

    #[test]
    fn degenerate_face_renders_without_panic() {
        let mut engine = Engine::new(32, 32).unwrap();
        engine.set_mesh(Mesh::new(
            vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
            vec![Tri::new(0, 1, 2, (255, 255, 255))],
            Vec::new(),
        ));
        engine.render();
        let background = pack_color(10, 10, 30);
        assert!(engine.pixels().iter().all(|&c| c == background));
    }
}
