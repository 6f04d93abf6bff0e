//! A CPU-based software 3D rasterizer.
//!
//! This crate rotates and projects simple meshes and paints them into an
//! ARGB8888 pixel buffer with per-pixel depth testing. SDL2 is used only
//! for window management and display; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use shapeshifter::prelude::*;
//!
//! let mut window = Window::new("Shape Shifter", 800, 600)?;
//! let mut engine = Engine::new(800, 600)?;
//! engine.load(&Shape::Cube)?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod engine;
pub mod export;
pub mod light;
pub mod math;
pub mod mesh;
pub mod shapes;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use engine::Engine;
pub use mesh::{LoadError, Mesh, MeshSource};
pub use render::BufferError;
pub use shapes::Shape;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use shapeshifter::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::Engine;

    // Meshes
    pub use crate::mesh::{Mesh, MeshSource, ObjSource};
    pub use crate::shapes::Shape;

    // Lighting
    pub use crate::light::DirectionalLight;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;

    // Export
    pub use crate::export::FrameRecorder;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        EdgeFunctionRasterizer, FrameBuffer, Rasterizer, Renderer, ScreenVertex, Triangle,
    };
}
