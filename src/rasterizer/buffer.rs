//! Character and depth grid storage, plus line drawing
//!
//! `TextBuffer` owns two parallel row-major grids: one byte of glyph per
//! cell and one f32 of depth per cell. Both are allocated once and mutated
//! in place every frame.

use glam::{IVec2, Vec2};
use thiserror::Error;

use super::glyph::glyph;

/// Errors from grid allocation.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("character grid must have non-zero dimensions, got {width}x{height}")]
    Empty { width: usize, height: usize },
    #[error("character grid {width}x{height} is too large to address")]
    TooLarge { width: usize, height: usize },
}

/// Fixed-size glyph grid with a parallel z-buffer.
pub struct TextBuffer {
    chars: Vec<u8>,
    depth: Vec<f32>,
    width: usize,
    height: usize,
}

impl TextBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&n| n < isize::MAX as usize)
            .ok_or(BufferError::TooLarge { width, height })?;
        Ok(Self {
            chars: vec![glyph(0.0); len],
            depth: vec![f32::MAX; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to the background glyph and every depth to `depth`.
    pub fn clear(&mut self, brightness: f32, depth: f32) {
        self.chars.fill(glyph(brightness));
        self.depth.fill(depth);
    }

    /// Glyph at a cell, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.chars[y * self.width + x])
    }

    /// Depth at a cell, or `None` outside the grid.
    pub fn cell_depth(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.depth[y * self.width + x])
    }

    /// The whole grid as one row-major string, no separators.
    pub fn as_text(&self) -> &str {
        // Cells only ever hold ramp glyphs, which are ASCII.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.chars
            .chunks(self.width)
            .map(|row| std::str::from_utf8(row).unwrap_or_default())
    }

    /// Convert a normalized point ([0,1]², y down) to cell coordinates.
    pub fn to_cell(&self, p: Vec2) -> IVec2 {
        IVec2::new(
            (p.x * self.width as f32).round() as i32,
            (p.y * self.height as f32).round() as i32,
        )
    }

    /// Normalized center of a cell column/row pair.
    pub fn to_normalized(&self, cell: IVec2) -> Vec2 {
        Vec2::new(
            cell.x as f32 / self.width as f32,
            cell.y as f32 / self.height as f32,
        )
    }

    /// Bounds-checked glyph write. Out-of-grid writes are dropped.
    fn set(&mut self, x: i32, y: i32, value: f32) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.chars[y as usize * self.width + x as usize] = glyph(value);
        }
    }

    /// Depth-tested fragment write; returns whether the fragment landed.
    ///
    /// A fragment passes only when strictly nearer than the stored depth,
    /// so redrawing identical geometry changes nothing.
    pub(crate) fn put_fragment(&mut self, x: usize, y: usize, depth: f32, brightness: f32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = y * self.width + x;
        if depth < self.depth[i] {
            self.depth[i] = depth;
            self.chars[i] = glyph(brightness);
            true
        } else {
            false
        }
    }

    /// Plot a single normalized point.
    pub fn draw_point(&mut self, p: Vec2, value: f32) {
        let c = self.to_cell(p);
        self.set(c.x, c.y, value);
    }

    /// Draw a line between two normalized points into the character grid.
    ///
    /// Lines are an overlay path: they neither consult nor update the depth
    /// grid. Dispatch order: vertical, horizontal, shallow, steep.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2, value: f32) {
        let a = self.to_cell(p0);
        let b = self.to_cell(p1);

        if a.x == b.x {
            let (y0, y1) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
            self.vertical_run(a.x, y0, y1, value);
            return;
        }

        if a.y == b.y {
            let (x0, x1) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
            self.horizontal_run(a.y, x0, x1, value);
            return;
        }

        if (b.y - a.y).abs() < (b.x - a.x).abs() {
            if a.x < b.x {
                self.bresenham_shallow(a, b, value);
            } else {
                self.bresenham_shallow(b, a, value);
            }
        } else if a.y < b.y {
            self.bresenham_steep(a, b, value);
        } else {
            self.bresenham_steep(b, a, value);
        }
    }

    fn vertical_run(&mut self, x: i32, y0: i32, y1: i32, value: f32) {
        for y in y0..y1 {
            self.set(x, y, value);
        }
    }

    fn horizontal_run(&mut self, y: i32, x0: i32, x1: i32, value: f32) {
        for x in x0..x1 {
            self.set(x, y, value);
        }
    }

    /// Bresenham stepping in x; requires p0.x < p1.x and |dy| < |dx|.
    fn bresenham_shallow(&mut self, p0: IVec2, p1: IVec2, value: f32) {
        let dx = p1.x - p0.x;
        let mut dy = p1.y - p0.y;
        let dir = if dy < 0 { -1 } else { 1 };
        dy *= dir;

        let mut err = 2 * dy - dx;
        let mut y = p0.y;
        for x in p0.x..p1.x {
            self.set(x, y, value);
            if err > 0 {
                y += dir;
                err += 2 * (dy - dx);
            } else {
                err += 2 * dy;
            }
        }
    }

    /// Bresenham stepping in y; requires p0.y < p1.y and |dx| <= |dy|.
    fn bresenham_steep(&mut self, p0: IVec2, p1: IVec2, value: f32) {
        let dy = p1.y - p0.y;
        let mut dx = p1.x - p0.x;
        let dir = if dx < 0 { -1 } else { 1 };
        dx *= dir;

        let mut err = 2 * dx - dy;
        let mut x = p0.x;
        for y in p0.y..p1.y {
            self.set(x, y, value);
            if err > 0 {
                x += dir;
                err += 2 * (dx - dy);
            } else {
                err += 2 * dx;
            }
        }
    }
}
