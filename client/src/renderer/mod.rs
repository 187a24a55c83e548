pub mod draw;
pub mod init;
pub mod raster;
pub mod resources;

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::style::{Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use game_core::Rect;
use glam::IVec2;

use crate::error::ClientError;
use raster::PixelBuffer;
use resources::{glyph, text_width, Rgb, GLYPH_HEIGHT, GLYPH_WIDTH, TEXT_PIXEL};

pub use draw::draw_frame;
pub use init::{install_panic_hook, TerminalSession};

/// Smallest and largest table pixels per terminal cell
pub const MIN_SCALE: i32 = 10;
pub const MAX_SCALE: i32 = 40;

/// Drawing surface in table pixel coordinates
pub trait Canvas {
    /// Drawable surface, always the full table
    fn size(&self) -> (i32, i32);

    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Disc when `width` is 0, otherwise a ring `width` thick drawn inward
    fn circle(&mut self, center: IVec2, radius: i32, width: i32, color: Rgb);

    /// Filled ellipse bounded by `rect`
    fn ellipse(&mut self, rect: Rect, color: Rgb);

    fn line(&mut self, from: IVec2, to: IVec2, width: i32, color: Rgb);

    /// Digits centered horizontally on `anchor.x`, top edge at `anchor.y`
    fn text(&mut self, anchor: IVec2, text: &str, color: Rgb) {
        let p = TEXT_PIXEL;
        let mut x = anchor.x - text_width(text) / 2;
        for bitmap in text.chars().filter_map(glyph) {
            for (row, bits) in bitmap.iter().enumerate().take(GLYPH_HEIGHT as usize) {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        let cell = Rect::new(x + col * p, anchor.y + row as i32 * p, p, p);
                        self.fill_rect(cell, color);
                    }
                }
            }
            x += (GLYPH_WIDTH + 1) * p;
        }
    }

    /// Show the finished frame
    fn present(&mut self) -> Result<(), ClientError>;
}

/// Pick the finest scale at which the table and status line fit the terminal
pub fn fit_scale(width: i32, height: i32, cols: u16, rows: u16) -> Result<i32, ClientError> {
    for scale in MIN_SCALE..=MAX_SCALE {
        let (need_cols, need_rows) = terminal_footprint(width, height, scale);
        if need_cols <= cols && need_rows <= rows {
            return Ok(scale);
        }
    }
    let (need_cols, need_rows) = terminal_footprint(width, height, MAX_SCALE);
    Err(ClientError::TerminalTooSmall {
        cols,
        rows,
        need_cols,
        need_rows,
    })
}

/// Terminal columns and rows used at a scale: two cell rows per text row,
/// plus one status line
pub fn terminal_footprint(width: i32, height: i32, scale: i32) -> (u16, u16) {
    let cols = (width + scale - 1) / scale;
    let cell_rows = (height + scale - 1) / scale;
    let rows = (cell_rows + 1) / 2 + 1;
    (cols as u16, rows as u16)
}

/// Terminal renderer: rasterizes into a [`PixelBuffer`] and flushes it with
/// upper-half-block glyphs, foreground for the top cell and background for
/// the bottom one.
///
/// Output is cropped to the viewport, so a terminal smaller than the table
/// shows its top-left corner instead of wrapping.
pub struct Renderer<W: Write> {
    out: W,
    buffer: PixelBuffer,
    viewport: Option<(usize, usize)>,
    status: String,
    needs_clear: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, width: i32, height: i32, scale: i32) -> Self {
        Self {
            out,
            buffer: PixelBuffer::new(width, height, scale),
            viewport: None,
            status: String::new(),
            needs_clear: true,
        }
    }

    /// Terminal size in columns and rows, status line included
    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.viewport = Some((cols as usize, rows as usize));
        self.needs_clear = true;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Re-rasterize at a new scale, e.g. after a terminal resize
    pub fn rescale(&mut self, scale: i32) {
        let (width, height) = self.buffer.size();
        self.buffer = PixelBuffer::new(width, height, scale);
        self.needs_clear = true;
    }
}

impl<W: Write> Canvas for Renderer<W> {
    fn size(&self) -> (i32, i32) {
        self.buffer.size()
    }

    fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.buffer.fill_rect(rect, color);
    }

    fn circle(&mut self, center: IVec2, radius: i32, width: i32, color: Rgb) {
        self.buffer.circle(center, radius, width, color);
    }

    fn ellipse(&mut self, rect: Rect, color: Rgb) {
        self.buffer.ellipse(rect, color);
    }

    fn line(&mut self, from: IVec2, to: IVec2, width: i32, color: Rgb) {
        self.buffer.line(from, to, width, color);
    }

    fn present(&mut self) -> Result<(), ClientError> {
        if self.needs_clear {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
            self.needs_clear = false;
        }

        let (max_cols, max_rows) = self.viewport.unwrap_or((usize::MAX, usize::MAX));
        let cols = self.buffer.cols().min(max_cols);
        let text_rows = ((self.buffer.rows() + 1) / 2).min(max_rows.saturating_sub(1));
        for text_row in 0..text_rows {
            queue!(self.out, MoveTo(0, text_row as u16))?;
            let mut current: Option<(Rgb, Rgb)> = None;
            for col in 0..cols {
                let top = self.buffer.cell(col, text_row * 2).unwrap_or(Rgb::BLACK);
                let bottom = self.buffer.cell(col, text_row * 2 + 1).unwrap_or(Rgb::BLACK);
                if current != Some((top, bottom)) {
                    queue!(self.out, SetColors(Colors::new(top.into(), bottom.into())))?;
                    current = Some((top, bottom));
                }
                queue!(self.out, Print('▀'))?;
            }
            queue!(self.out, ResetColor)?;
        }

        let status_width = self.viewport.map_or(cols, |(viewport_cols, _)| viewport_cols);
        let status: String = self.status.chars().take(status_width).collect();
        queue!(
            self.out,
            MoveTo(0, text_rows as u16),
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()?;
        Ok(())
    }
}
