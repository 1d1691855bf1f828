//! Software rasterizer for character grids
//!
//! Pipeline per frame: clear → project every vertex/normal → edge-function
//! triangle fill (or wireframe lines) → glyph-mapped output buffer.

mod buffer;
mod glyph;
mod render;
mod transform;

pub use buffer::{BufferError, TextBuffer};
pub use glyph::{glyph, GLYPH_RAMP};
pub use render::{fill_triangle, RasterSettings, RenderMode, Renderer};
pub use transform::{FrameTransforms, Projection};

/// Default grid dimensions (classic terminal logo size)
pub const DEFAULT_WIDTH: usize = 45;
pub const DEFAULT_HEIGHT: usize = 25;
