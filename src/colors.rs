// Named RGB565 colours, same values the panel vendors ship in their headers.

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};

/// Build a colour from its packed 5-6-5 word.
pub const fn from_raw(word: u16) -> Rgb565 {
    Rgb565::new(
        (word >> 11) as u8,
        ((word >> 5) & 0x3F) as u8,
        (word & 0x1F) as u8,
    )
}

/// Packed 5-6-5 word, as it goes on the wire.
#[inline]
pub fn to_raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

pub const BLACK: Rgb565 = from_raw(0x0000);
pub const WHITE: Rgb565 = from_raw(0xFFFF);
pub const RED: Rgb565 = from_raw(0xF800);
pub const GREEN: Rgb565 = from_raw(0x07E0);
pub const BLUE: Rgb565 = from_raw(0x001F);
pub const NAVY: Rgb565 = from_raw(0x000F);
pub const DARKBLUE: Rgb565 = from_raw(0x0011);
pub const DARKGREEN: Rgb565 = from_raw(0x03E0);
pub const DARKCYAN: Rgb565 = from_raw(0x03EF);
pub const CYAN: Rgb565 = from_raw(0x07FF);
pub const DARKRED: Rgb565 = from_raw(0x8000);
pub const OLIVE: Rgb565 = from_raw(0x7BE0);
pub const GRAY: Rgb565 = from_raw(0x8410);
pub const DARKGRAY: Rgb565 = from_raw(0x7BEF);
pub const LIGHTGRAY: Rgb565 = from_raw(0xC618);
pub const SKYBLUE: Rgb565 = from_raw(0x867D);
pub const LIGHTBLUE: Rgb565 = from_raw(0xAEDC);
pub const LIGHTGREEN: Rgb565 = from_raw(0x9772);
pub const BROWN: Rgb565 = from_raw(0xA145);
pub const VIOLET: Rgb565 = from_raw(0xEC1D);
pub const MAGENTA: Rgb565 = from_raw(0xF81F);
pub const ORANGE: Rgb565 = from_raw(0xFD20);
pub const GOLD: Rgb565 = from_raw(0xFEA0);
pub const YELLOW: Rgb565 = from_raw(0xFFE0);
