//! Triangle rasterization and the per-frame driver

use glam::{IVec2, Vec2, Vec3};
use log::{debug, trace};

use super::buffer::{BufferError, TextBuffer};
use super::transform::{FrameTransforms, Projection};
use crate::config::RenderConfig;
use crate::scene::Mesh;

/// Triangles with less signed area than this are skipped as degenerate.
const AREA_EPSILON: f32 = 1e-7;

/// Brightness used for wireframe edges.
const WIREFRAME_VALUE: f32 = 0.25;

/// Pineda edge function: signed parallelogram area of (b - a) × (c - a).
///
/// Positive when `c` lies on the accepted side of the directed edge a→b
/// in y-down screen space.
fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// How primitives reach the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Edge-function fill with depth test and shading
    #[default]
    Filled,
    /// Depth-free Bresenham edges (debug overlay)
    Wireframe,
}

/// Rasterizer settings
#[derive(Debug, Clone)]
pub struct RasterSettings {
    /// Light direction in view space (unit length)
    pub light_dir: Vec3,
    /// Floor of the shading range, so unlit surfaces stay faintly visible
    pub min_brightness: f32,
    /// Background brightness used by the per-frame clear
    pub background: f32,
    /// Step edge values incrementally across each row instead of
    /// re-evaluating the edge functions per pixel. Both paths produce
    /// the same image.
    pub incremental: bool,
    pub mode: RenderMode,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            light_dir: Vec3::new(0.0, 0.0, -1.0),
            min_brightness: 0.1,
            background: 0.0,
            incremental: true,
            mode: RenderMode::Filled,
        }
    }
}

/// Fill one screen-space triangle.
///
/// `v` carries normalized x,y plus depth; `n` carries view-space normals.
/// A pixel is covered when all three edge values are non-negative, which
/// accepts a single winding order: triangles wound counter-clockwise as
/// seen by the camera. Covered fragments are depth-tested (strict less),
/// backface-culled on the interpolated normal, and shaded by a single
/// directional light.
pub fn fill_triangle(buf: &mut TextBuffer, settings: &RasterSettings, v: [Vec3; 3], n: [Vec3; 3]) {
    let a = v[0].truncate();
    let b = v[1].truncate();
    let c = v[2].truncate();

    let area = edge(a, b, c);
    if area.abs() < AREA_EPSILON {
        return;
    }

    let ca = buf.to_cell(a);
    let cb = buf.to_cell(b);
    let cc = buf.to_cell(c);
    let lo = ca.min(cb).min(cc).max(IVec2::ZERO);
    let hi = ca.max(cb).max(cc).min(IVec2::new(
        buf.width() as i32 - 1,
        buf.height() as i32 - 1,
    ));
    if lo.x > hi.x || lo.y > hi.y {
        return;
    }

    // Per-pixel step of each edge value when x advances one cell
    let x_step = 1.0 / buf.width() as f32;
    let w0_step = (b.y - a.y) * x_step;
    let w1_step = (c.y - b.y) * x_step;
    let w2_step = (a.y - c.y) * x_step;

    for y in lo.y..=hi.y {
        let row_start = buf.to_normalized(IVec2::new(lo.x, y));
        let mut w0 = edge(a, b, row_start);
        let mut w1 = edge(b, c, row_start);
        let mut w2 = edge(c, a, row_start);

        for x in lo.x..=hi.x {
            if !settings.incremental {
                let p = buf.to_normalized(IVec2::new(x, y));
                w0 = edge(a, b, p);
                w1 = edge(b, c, p);
                w2 = edge(c, a, p);
            }

            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                // Dividing by the triangle area normalizes the barycentric
                // weights, not the resulting vector; shading is defined on
                // that area-normalized normal.
                let normal = (n[0] * w0 + n[1] * w1 + n[2] * w2) / area;
                let depth = (v[0].z * w0 + v[1].z * w1 + v[2].z * w2) / area;

                // Cull fragments facing away from (or parallel to) the view
                if normal.z < 0.0 {
                    let lit = normal.dot(settings.light_dir).clamp(0.0, 1.0);
                    let brightness =
                        settings.min_brightness + lit * (1.0 - settings.min_brightness);
                    buf.put_fragment(x as usize, y as usize, depth, brightness);
                }
            }

            w0 += w0_step;
            w1 += w1_step;
            w2 += w2_step;
        }
    }
}

/// One rendering session: mesh, camera, buffers, and per-frame scratch.
///
/// Construction allocates everything the session needs; dropping the
/// renderer releases it. Scratch vectors for projected points and normals
/// are reused across frames, so `render` does not allocate.
pub struct Renderer {
    buffer: TextBuffer,
    mesh: Mesh,
    projection: Projection,
    settings: RasterSettings,
    screen_points: Vec<Vec3>,
    view_normals: Vec<Vec3>,
}

impl Renderer {
    pub fn new(
        width: usize,
        height: usize,
        mesh: Mesh,
        projection: Projection,
        settings: RasterSettings,
    ) -> Result<Self, BufferError> {
        let buffer = TextBuffer::new(width, height)?;
        debug!(
            "render session: {}x{} cells, {} triangles",
            width,
            height,
            mesh.triangle_count()
        );
        let capacity = mesh.vertex_count();
        Ok(Self {
            buffer,
            mesh,
            projection,
            settings,
            screen_points: Vec::with_capacity(capacity),
            view_normals: Vec::with_capacity(capacity),
        })
    }

    pub fn from_config(config: &RenderConfig, mesh: Mesh) -> Result<Self, BufferError> {
        let mut settings = RasterSettings::default();
        if config.wireframe {
            settings.mode = RenderMode::Wireframe;
        }
        Self::new(config.width, config.height, mesh, config.projection, settings)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn settings(&self) -> &RasterSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RasterSettings {
        &mut self.settings
    }

    /// Reallocate both grids. Takes effect from the next `render`.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BufferError> {
        self.buffer = TextBuffer::new(width, height)?;
        Ok(())
    }

    /// Render one frame at the given time and return the finished grid.
    ///
    /// The returned view is overwritten by the next `render` call.
    pub fn render(&mut self, time: f32) -> &TextBuffer {
        self.buffer.clear(self.settings.background, f32::MAX);

        let transforms = FrameTransforms::at(time, &self.projection);
        self.screen_points.clear();
        self.view_normals.clear();
        for (position, normal) in self.mesh.vertices() {
            self.screen_points.push(transforms.project_point(position));
            self.view_normals.push(transforms.transform_normal(normal));
        }
        trace!(
            "frame time={time}: projecting {} vertices",
            self.screen_points.len()
        );

        for i in (0..self.screen_points.len()).step_by(3) {
            let v = [
                self.screen_points[i],
                self.screen_points[i + 1],
                self.screen_points[i + 2],
            ];
            match self.settings.mode {
                RenderMode::Filled => {
                    let n = [
                        self.view_normals[i],
                        self.view_normals[i + 1],
                        self.view_normals[i + 2],
                    ];
                    fill_triangle(&mut self.buffer, &self.settings, v, n);
                }
                RenderMode::Wireframe => {
                    self.buffer
                        .draw_line(v[0].truncate(), v[1].truncate(), WIREFRAME_VALUE);
                    self.buffer
                        .draw_line(v[1].truncate(), v[2].truncate(), WIREFRAME_VALUE);
                    self.buffer
                        .draw_line(v[2].truncate(), v[0].truncate(), WIREFRAME_VALUE);
                }
            }
        }

        &self.buffer
    }
}
