// Streaming driver for ILI9225 176x220 RGB565 TFT panels (4-wire SPI)
//
// No framebuffer: every primitive programs one GRAM window on the panel
// and streams its pixels in a single burst. The library builds for the
// host so it can be tested there; board support lives behind `esp32c3`.

#![cfg_attr(not(test), no_std)]

pub mod colors;
pub mod config;
pub mod drivers;
pub mod fonts;
pub mod geometry;

#[cfg(all(feature = "esp32c3", target_arch = "riscv32"))]
pub mod board;

#[cfg(test)]
mod testing;

pub use config::{Bounds, Config};
pub use drivers::bitmap::Bitmap;
pub use drivers::error::Error;
pub use drivers::ili9225::{Display, NoResetPin, Window};
pub use drivers::interface::{Interface, Mode, SpiInterface, SpiInterfaceError};
pub use drivers::shared::{Busy, SharedDisplay};
pub use geometry::{Orientation, Rect};
