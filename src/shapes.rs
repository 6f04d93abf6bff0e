//! Built-in shape generators.
//!
//! Procedural vertex/index tables for the demo shapes, all exposed through
//! the [`MeshSource`] capability so the viewer switches between them and
//! file-backed meshes uniformly.

use crate::math::vec3::Vec3;
use crate::mesh::{Edge, LoadError, Mesh, MeshSource, Tri};

/// The built-in demo shapes, selectable with keys 1-6 in the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Cube,
    Tetrahedron,
    Icosahedron,
    Helix,
    Ent,
    /// Unit cube drawn as 12 unshaded edges instead of filled faces.
    WireCube,
}

impl Shape {
    /// Maps a 0-based selection index onto the built-in shapes.
    pub fn from_index(index: usize) -> Self {
        match index % 6 {
            0 => Shape::Cube,
            1 => Shape::Tetrahedron,
            2 => Shape::Icosahedron,
            3 => Shape::Helix,
            4 => Shape::Ent,
            _ => Shape::WireCube,
        }
    }

    /// Camera distance the shape is authored for. The wire cube sits a
    /// little farther back so all twelve edges stay on screen.
    pub fn camera_z(&self) -> f32 {
        match self {
            Shape::WireCube => 4.0,
            _ => 3.5,
        }
    }

    pub fn mesh(&self) -> Mesh {
        match self {
            Shape::Cube => cube(),
            Shape::Tetrahedron => tetrahedron(),
            Shape::Icosahedron => icosahedron(),
            Shape::Helix => helix(100),
            Shape::Ent => ent(),
            Shape::WireCube => wire_cube(),
        }
    }
}

impl MeshSource for Shape {
    fn build(&self) -> Result<Mesh, LoadError> {
        Ok(self.mesh())
    }
}

fn cube() -> Mesh {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    let tris = vec![
        Tri::new(0, 1, 2, (220, 220, 220)),
        Tri::new(0, 2, 3, (220, 220, 220)),
        Tri::new(4, 6, 5, (200, 200, 200)),
        Tri::new(4, 7, 6, (200, 200, 200)),
        Tri::new(0, 5, 1, (180, 180, 180)),
        Tri::new(0, 4, 5, (180, 180, 180)),
        Tri::new(2, 6, 7, (180, 180, 180)),
        Tri::new(2, 7, 3, (180, 180, 180)),
        Tri::new(1, 5, 6, (160, 160, 160)),
        Tri::new(1, 6, 2, (160, 160, 160)),
        Tri::new(0, 3, 7, (160, 160, 160)),
        Tri::new(0, 7, 4, (160, 160, 160)),
    ];
    Mesh::new(vertices, tris, Vec::new())
}

fn tetrahedron() -> Mesh {
    let vertices = vec![
        Vec3::new(0.0, 0.0, 1.2),
        Vec3::new(1.0, 0.0, -0.4),
        Vec3::new(-0.5, 0.87, -0.4),
        Vec3::new(-0.5, -0.87, -0.4),
    ];
    let tris = vec![
        Tri::new(0, 1, 2, (220, 180, 180)),
        Tri::new(0, 2, 3, (180, 220, 180)),
        Tri::new(0, 3, 1, (180, 180, 220)),
        Tri::new(1, 3, 2, (220, 220, 180)),
    ];
    Mesh::new(vertices, tris, Vec::new())
}

fn icosahedron() -> Mesh {
    let phi = (1.0 + 5.0f32.sqrt()) * 0.5;
    let vertices: Vec<Vec3> = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ]
    .iter()
    .map(|v| v.normalize())
    .collect();
    // Top cap only; enough faces to show shading across the sphere.
    let tris = vec![
        Tri::new(0, 11, 5, (200, 200, 255)),
        Tri::new(0, 5, 1, (200, 255, 200)),
        Tri::new(0, 1, 7, (255, 200, 200)),
        Tri::new(0, 7, 10, (220, 220, 180)),
        Tri::new(0, 10, 11, (180, 220, 220)),
    ];
    Mesh::new(vertices, tris, Vec::new())
}

fn helix(n: usize) -> Mesh {
    let mut vertices = Vec::with_capacity(n);
    let mut tris = Vec::new();
    for i in 0..n {
        let t = i as f32 * 0.2;
        vertices.push(Vec3::new(t.cos(), t.sin(), t * 0.1));
        if i >= 2 {
            tris.push(Tri::new(i - 2, i - 1, i, (200, 180, 255)));
        }
    }
    Mesh::new(vertices, tris, Vec::new())
}

/// A simple trunk + leafy top.
fn ent() -> Mesh {
    let vertices = vec![
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.3, 0.0, 0.0),
        Vec3::new(-0.3, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.3),
        Vec3::new(0.0, 0.0, -0.3),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.6, 1.3, 0.0),
        Vec3::new(-0.6, 1.3, 0.0),
        Vec3::new(0.0, 1.3, 0.6),
        Vec3::new(0.0, 1.3, -0.6),
    ];
    const TRUNK: (u8, u8, u8) = (120, 80, 40);
    const LEAVES: (u8, u8, u8) = (30, 120, 30);
    let tris = vec![
        Tri::new(0, 1, 2, TRUNK),
        Tri::new(0, 2, 3, TRUNK),
        Tri::new(0, 3, 4, TRUNK),
        Tri::new(0, 4, 1, TRUNK),
        Tri::new(1, 5, 2, TRUNK),
        Tri::new(2, 5, 3, TRUNK),
        Tri::new(3, 5, 4, TRUNK),
        Tri::new(4, 5, 1, TRUNK),
        Tri::new(5, 6, 7, LEAVES),
        Tri::new(5, 7, 8, LEAVES),
        Tri::new(5, 8, 9, LEAVES),
        Tri::new(5, 9, 6, LEAVES),
    ];
    Mesh::new(vertices, tris, Vec::new())
}

fn wire_cube() -> Mesh {
    let vertices = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 0),
        Edge::new(4, 5),
        Edge::new(5, 6),
        Edge::new(6, 7),
        Edge::new(7, 4),
        Edge::new(0, 4),
        Edge::new(1, 5),
        Edge::new(2, 6),
        Edge::new(3, 7),
    ];
    Mesh::new(vertices, Vec::new(), edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_has_full_index_tables() {
        let mesh = Shape::Cube.mesh();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.tris.len(), 12);
        assert!(mesh.edges.is_empty());
    }

    #[test]
    fn icosahedron_vertices_lie_on_unit_sphere() {
        for v in Shape::Icosahedron.mesh().vertices {
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn helix_strips_consecutive_triangles() {
        let mesh = Shape::Helix.mesh();
        assert_eq!(mesh.vertices.len(), 100);
        assert_eq!(mesh.tris.len(), 98);
        assert_eq!(mesh.tris[0], Tri::new(0, 1, 2, (200, 180, 255)));
    }

    #[test]
    fn wire_cube_has_edges_only() {
        let mesh = Shape::WireCube.mesh();
        assert_eq!(mesh.edges.len(), 12);
        assert!(mesh.tris.is_empty());
    }

    #[test]
    fn all_indices_are_in_range() {
        for shape in [
            Shape::Cube,
            Shape::Tetrahedron,
            Shape::Icosahedron,
            Shape::Helix,
            Shape::Ent,
            Shape::WireCube,
        ] {
            let mesh = shape.mesh();
            let n = mesh.vertices.len();
            for t in &mesh.tris {
                assert!(t.a < n && t.b < n && t.c < n);
            }
            for e in &mesh.edges {
                assert!(e.a < n && e.b < n);
            }
        }
    }

    #[test]
    fn from_index_covers_every_shape_and_wraps() {
        assert_eq!(Shape::from_index(0), Shape::Cube);
        assert_eq!(Shape::from_index(4), Shape::Ent);
        assert_eq!(Shape::from_index(5), Shape::WireCube);
        assert_eq!(Shape::from_index(6), Shape::Cube);
    }

    #[test]
    fn wire_cube_is_authored_for_a_farther_camera() {
        assert_eq!(Shape::WireCube.camera_z(), 4.0);
        assert_eq!(Shape::Cube.camera_z(), 3.5);
    }
}
