//! Software rasterizer: table pixels down to a grid of terminal cells.
//!
//! Each cell covers `scale`×`scale` table pixels. Rectangles paint every cell
//! they overlap; round shapes and lines sample the cell center.

use game_core::Rect;
use glam::IVec2;

use super::resources::Rgb;
use super::Canvas;
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    scale: i32,
    cols: usize,
    rows: usize,
    cells: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: i32, height: i32, scale: i32) -> Self {
        let scale = scale.max(1);
        let cols = ((width + scale - 1) / scale).max(0) as usize;
        let rows = ((height + scale - 1) / scale).max(0) as usize;
        Self {
            width,
            height,
            scale,
            cols,
            rows,
            cells: vec![Rgb::BLACK; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Rgb> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn cell_center(&self, col: usize, row: usize) -> (i64, i64) {
        let s = self.scale as i64;
        (col as i64 * s + s / 2, row as i64 * s + s / 2)
    }

    /// Column and row ranges of cells touched by a table-pixel box
    fn span(&self, left: i32, top: i32, right: i32, bottom: i32) -> (usize, usize, usize, usize) {
        let s = self.scale;
        let clamp_col = |v: i32| (v.max(0) as usize).min(self.cols);
        let clamp_row = |v: i32| (v.max(0) as usize).min(self.rows);
        (
            clamp_col(left.div_euclid(s)),
            clamp_col((right + s - 1).div_euclid(s)),
            clamp_row(top.div_euclid(s)),
            clamp_row((bottom + s - 1).div_euclid(s)),
        )
    }

    fn paint_where(
        &mut self,
        bounds: (i32, i32, i32, i32),
        color: Rgb,
        inside: impl Fn(i64, i64) -> bool,
    ) {
        let (c0, c1, r0, r1) = self.span(bounds.0, bounds.1, bounds.2, bounds.3);
        for row in r0..r1 {
            for col in c0..c1 {
                let (x, y) = self.cell_center(col, row);
                if inside(x, y) {
                    self.cells[row * self.cols + col] = color;
                }
            }
        }
    }
}

impl Canvas for PixelBuffer {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let (c0, c1, r0, r1) = self.span(rect.left(), rect.top(), rect.right(), rect.bottom());
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * self.cols + col] = color;
            }
        }
    }

    fn circle(&mut self, center: IVec2, radius: i32, width: i32, color: Rgb) {
        if radius <= 0 {
            return;
        }
        let (cx, cy) = (center.x as i64, center.y as i64);
        let outer = (radius as i64).pow(2);
        // Rings thinner than a cell would vanish between sample points
        let inner = if width > 0 {
            (radius - width.max(self.scale)).max(0) as i64
        } else {
            0
        };
        let inner = inner * inner;
        let bounds = (
            center.x - radius,
            center.y - radius,
            center.x + radius + 1,
            center.y + radius + 1,
        );
        self.paint_where(bounds, color, |x, y| {
            let d = (x - cx).pow(2) + (y - cy).pow(2);
            d <= outer && (width <= 0 || d >= inner)
        });
    }

    fn ellipse(&mut self, rect: Rect, color: Rgb) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let cx = rect.x as f32 + rect.width as f32 / 2.0;
        let cy = rect.y as f32 + rect.height as f32 / 2.0;
        let rx = rect.width as f32 / 2.0;
        let ry = rect.height as f32 / 2.0;
        let bounds = (rect.left(), rect.top(), rect.right(), rect.bottom());
        self.paint_where(bounds, color, |x, y| {
            let nx = (x as f32 - cx) / rx;
            let ny = (y as f32 - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
    }

    fn line(&mut self, from: IVec2, to: IVec2, width: i32, color: Rgb) {
        let half = (width.max(self.scale) / 2) as f32;
        let (ax, ay) = (from.x as f32, from.y as f32);
        let (bx, by) = (to.x as f32, to.y as f32);
        let (dx, dy) = (bx - ax, by - ay);
        let len2 = dx * dx + dy * dy;
        let pad = half as i32 + 1;
        let bounds = (
            from.x.min(to.x) - pad,
            from.y.min(to.y) - pad,
            from.x.max(to.x) + pad,
            from.y.max(to.y) + pad,
        );
        self.paint_where(bounds, color, |x, y| {
            let (px, py) = (x as f32, y as f32);
            let t = if len2 > 0.0 {
                (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (qx, qy) = (ax + t * dx, ay + t * dy);
            (px - qx).powi(2) + (py - qy).powi(2) <= half * half
        });
    }

    fn present(&mut self) -> Result<(), ClientError> {
        Ok(())
    }
}
