// RGB565 raster blits
//
// Images are word slices laid out as [width, height, pixels...], row-major.
// The whole scaled destination is one window; each source pixel is
// repeated scale x scale times (nearest neighbour).

use embedded_graphics_core::geometry::Point;
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_hal::digital::OutputPin;

use super::error::{Error, MalformedBitmap};
use super::ili9225::Display;
use super::interface::Interface;
use crate::colors::from_raw;
use crate::geometry::Rect;

const HEADER_WORDS: usize = 2;

/// Borrowed, validated view of a `[width, height, pixels...]` image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u16,
    height: u16,
    pixels: &'a [u16],
}

impl<'a> Bitmap<'a> {
    pub fn parse(words: &'a [u16]) -> Result<Self, MalformedBitmap> {
        let [width, height, pixels @ ..] = words else {
            return Err(MalformedBitmap {
                expected: HEADER_WORDS,
                actual: words.len(),
            });
        };
        let expected = HEADER_WORDS + *width as usize * *height as usize;
        if words.len() != expected {
            return Err(MalformedBitmap {
                expected,
                actual: words.len(),
            });
        }
        Ok(Self {
            width: *width,
            height: *height,
            pixels,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixel(&self, x: u16, y: u16) -> Rgb565 {
        from_raw(self.pixels[y as usize * self.width as usize + x as usize])
    }
}

impl<I, RST> Display<I, RST>
where
    I: Interface,
    RST: OutputPin,
{
    /// Parse `data` and blit it with its top-left at `origin`.
    pub fn draw_bitmap(
        &mut self,
        origin: Point,
        scale: u32,
        data: &[u16],
    ) -> Result<(), Error<I::Error>> {
        let bitmap = Bitmap::parse(data)?;
        self.draw_image(origin, scale, &bitmap)
    }

    /// Blit an already parsed bitmap. Zero scale or an empty image is a
    /// no-op.
    pub fn draw_image(
        &mut self,
        origin: Point,
        scale: u32,
        bitmap: &Bitmap<'_>,
    ) -> Result<(), Error<I::Error>> {
        if scale == 0 || bitmap.is_empty() {
            return Ok(());
        }
        let scaled = |n: u16| u64::from(n) * u64::from(scale);
        let Some(area) = Rect::spanning(
            origin.x.into(),
            origin.y.into(),
            scaled(bitmap.width),
            scaled(bitmap.height),
        ) else {
            return Ok(());
        };
        let Some(visible) = self.visible(area)? else {
            return Ok(());
        };
        self.stream_area(area, visible, |col, row| {
            bitmap.pixel((col / scale) as u16, (row / scale) as u16)
        })
    }
}
