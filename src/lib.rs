//! termrast: a software 3D rasterizer for character grids
//!
//! Renders triangle meshes into a fixed-size ASCII buffer:
//! - Perspective projection through a standard model/view/projection chain
//! - Pineda edge-function triangle fill with incremental stepping
//! - Per-cell z-buffer and glyph-ramp shading
//! - Bresenham line drawing for wireframe overlays
//!
//! The host drives frames by calling [`Renderer::render`] with a time value
//! and printing the returned character grid however it likes.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod rasterizer;
pub mod scene;

pub use config::{ConfigError, RenderConfig};
pub use rasterizer::{
    fill_triangle, glyph, BufferError, FrameTransforms, Projection, RasterSettings, RenderMode,
    Renderer, TextBuffer, GLYPH_RAMP,
};
pub use scene::{shapes, Mesh, MeshError};
