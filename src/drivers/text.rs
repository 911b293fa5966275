// Text rendering with the built-in 8x13 font
//
// Two strategies:
//   sparse (draw_char / draw_string): one window per ink pixel, the
//     background is left alone; cost grows with ink, supports scaling.
//   dense (draw_fast_char / draw_fast_string): one window per cell,
//     every cell pixel streamed as fg or bg; fixed cost of 104 pixels.
//
// Both check the whole string (glyphs and bounds policy) before the
// first byte goes out.

use embedded_graphics_core::geometry::Point;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_hal::digital::OutputPin;

use super::error::Error;
use super::ili9225::Display;
use super::interface::Interface;
use crate::fonts::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, Glyph};
use crate::geometry::Rect;

// text after an embedded NUL is ignored
fn until_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

// character count, or the first character the font lacks
fn check_glyphs(text: &str) -> Result<usize, char> {
    let mut n = 0;
    for ch in text.chars() {
        if fonts::glyph(ch).is_none() {
            return Err(ch);
        }
        n += 1;
    }
    Ok(n)
}

// area touched by `chars` sparse glyphs at `scale`; column offsets run
// 1..=8, so the cell is one advance wide. `None` for zero scale.
fn sparse_extent(p: Point, chars: usize, scale: u32) -> Option<Rect> {
    let scale = u64::from(scale);
    Rect::spanning(
        p.x.into(),
        p.y.into(),
        (chars as u64).saturating_mul(u64::from(ADVANCE) * scale),
        u64::from(GLYPH_HEIGHT) * scale,
    )
}

// pen positions are i64 so long or heavily scaled runs walk off the
// screen instead of wrapping around it
fn dense_cell(x: i64, y: i64) -> Rect {
    Rect::from_wide(
        x,
        y,
        x + i64::from(GLYPH_WIDTH) - 1,
        y + i64::from(GLYPH_HEIGHT) - 1,
    )
}

impl<I, RST> Display<I, RST>
where
    I: Interface,
    RST: OutputPin,
{
    /// Draw `ch` with its top-left at `p`, touching only ink pixels.
    /// Each ink pixel becomes a `scale`×`scale` block.
    pub fn draw_char(
        &mut self,
        p: Point,
        ch: char,
        color: Rgb565,
        scale: u32,
    ) -> Result<(), Error<I::Error>> {
        let Some(glyph) = fonts::glyph(ch) else {
            return Err(Error::InvalidGlyph(ch));
        };
        let Some(extent) = sparse_extent(p, 1, scale) else {
            return Ok(());
        };
        if self.visible(extent)?.is_none() {
            return Ok(());
        }
        self.sparse_glyph(p.x.into(), p.y.into(), glyph, color, scale)
    }

    /// Sparse text, advancing `9 * scale` per character. Stops at the
    /// end of `text` or the first NUL. No wrapping.
    pub fn draw_string(
        &mut self,
        p: Point,
        color: Rgb565,
        scale: u32,
        text: &str,
    ) -> Result<(), Error<I::Error>> {
        let text = until_nul(text);
        let n = check_glyphs(text).map_err(Error::InvalidGlyph)?;
        let Some(extent) = sparse_extent(p, n, scale) else {
            return Ok(());
        };
        if self.visible(extent)?.is_none() {
            return Ok(());
        }

        let advance = i64::from(ADVANCE) * i64::from(scale);
        let mut pen = i64::from(p.x);
        for ch in text.chars() {
            if let Some(glyph) = fonts::glyph(ch) {
                self.sparse_glyph(pen, p.y.into(), glyph, color, scale)?;
            }
            pen += advance;
        }
        Ok(())
    }

    /// Draw `ch` as a solid 8x13 cell: `fg` on ink, `bg` elsewhere.
    pub fn draw_fast_char(
        &mut self,
        p: Point,
        ch: char,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), Error<I::Error>> {
        let Some(glyph) = fonts::glyph(ch) else {
            return Err(Error::InvalidGlyph(ch));
        };
        let cell = dense_cell(p.x.into(), p.y.into());
        let Some(visible) = self.visible(cell)? else {
            return Ok(());
        };
        self.dense_glyph(cell, visible, glyph, fg, bg)
    }

    /// Dense text on a fixed 9 pixel pitch. Stops at the end of `text`
    /// or the first NUL.
    pub fn draw_fast_string(
        &mut self,
        p: Point,
        fg: Rgb565,
        bg: Rgb565,
        text: &str,
    ) -> Result<(), Error<I::Error>> {
        let text = until_nul(text);
        let n = check_glyphs(text).map_err(Error::InvalidGlyph)?;
        if n == 0 {
            return Ok(());
        }
        let extent = dense_cell(p.x.into(), p.y.into());
        let last = i64::from(p.x) + (n as i64 - 1) * i64::from(ADVANCE);
        let extent = Rect::new(extent.start, dense_cell(last, p.y.into()).end);
        if self.visible(extent)?.is_none() {
            return Ok(());
        }

        let screen = self.orientation().screen();
        let mut pen = i64::from(p.x);
        for ch in text.chars() {
            let cell = dense_cell(pen, p.y.into());
            if let (Some(glyph), Some(visible)) = (fonts::glyph(ch), cell.intersection(screen)) {
                self.dense_glyph(cell, visible, glyph, fg, bg)?;
            }
            pen += i64::from(ADVANCE);
        }
        Ok(())
    }

    // Bit j of a row (LSB = 0) lands at column offset 8 - j.
    // Off-screen blocks are skipped without logging; callers have
    // already applied the bounds policy to the whole extent.
    fn sparse_glyph(
        &mut self,
        x: i64,
        y: i64,
        glyph: &Glyph,
        color: Rgb565,
        scale: u32,
    ) -> Result<(), Error<I::Error>> {
        let s = i64::from(scale);
        let screen = self.orientation().screen();
        for i in 0..GLYPH_HEIGHT {
            let bits = glyph.row_from_top(i as usize);
            for j in 0..8 {
                if bits & (1 << j) == 0 {
                    continue;
                }
                let bx = x + (8 - j) * s;
                let by = y + i64::from(i) * s;
                let Some(block) = Rect::from_wide(bx, by, bx + s - 1, by + s - 1)
                    .intersection(screen)
                else {
                    continue;
                };
                if scale == 1 {
                    self.draw_pixel(block.start, color)?;
                } else {
                    self.fill_rectangle(block, color)?;
                }
            }
        }
        Ok(())
    }

    fn dense_glyph(
        &mut self,
        cell: Rect,
        visible: Rect,
        glyph: &Glyph,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), Error<I::Error>> {
        self.stream_area(cell, visible, |col, row| {
            if glyph.is_set(col, row) {
                fg
            } else {
                bg
            }
        })
    }
}
