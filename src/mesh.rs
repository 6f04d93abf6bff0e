//! Mesh primitives and mesh sources.
//!
//! A [`Mesh`] is a vertex array plus index lists: triangles carrying a flat
//! RGB color, and bare edges for wireframe shapes. The core reads meshes
//! but never mutates them during a frame; where they come from is behind
//! the [`MeshSource`] capability so built-in shape tables and OBJ files
//! plug in the same way.

use std::fmt;
use std::path::Path;

use crate::math::vec3::Vec3;

/// A triangle face: three indices into the mesh vertex array plus a flat
/// RGB color applied to the whole face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tri {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub color: (u8, u8, u8),
}

impl Tri {
    pub const fn new(a: usize, b: usize, c: usize, color: (u8, u8, u8)) -> Self {
        Self { a, b, c, color }
    }
}

/// An edge between two vertices, drawn as an unshaded line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A renderable mesh: vertices plus triangle and/or edge index lists.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub tris: Vec<Tri>,
    pub edges: Vec<Edge>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, tris: Vec<Tri>, edges: Vec<Edge>) -> Self {
        Self {
            vertices,
            tris,
            edges,
        }
    }

    /// Load a mesh from an OBJ file, triangulating faces as needed.
    ///
    /// OBJ carries no per-face color, so every face gets the given flat
    /// color.
    pub fn from_obj<P: AsRef<Path>>(path: P, color: (u8, u8, u8)) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(
            path.as_ref(),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut tris = Vec::new();
        for model in &models {
            let base = vertices.len();
            let mesh = &model.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            tris.extend(mesh.indices.chunks_exact(3).map(|i| {
                Tri::new(
                    base + i[0] as usize,
                    base + i[1] as usize,
                    base + i[2] as usize,
                    color,
                )
            }));
        }

        if vertices.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::new(vertices, tris, Vec::new()))
    }
}

/// Errors produced while loading a mesh from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The underlying OBJ parser failed (missing file, malformed data).
    Obj(tobj::LoadError),
    /// The file parsed but contained no geometry.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to load OBJ: {}", e),
            LoadError::Empty => write!(f, "OBJ file contained no vertices"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

/// Capability to produce a mesh on demand.
///
/// One seam covers both the built-in shape tables and file-backed meshes,
/// so the frame pipeline never cares where geometry comes from.
pub trait MeshSource {
    fn build(&self) -> Result<Mesh, LoadError>;
}

/// A mesh source backed by an OBJ file on disk.
pub struct ObjSource {
    path: std::path::PathBuf,
    color: (u8, u8, u8),
}

impl ObjSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            color: (200, 200, 200),
        }
    }
}

impl MeshSource for ObjSource {
    fn build(&self) -> Result<Mesh, LoadError> {
        Mesh::from_obj(&self.path, self.color)
    }
}
