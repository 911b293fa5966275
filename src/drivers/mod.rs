// Panel driver and everything that feeds it.
//
// ili9225 owns the register protocol and the window/stream primitives;
// text and bitmap add higher-level drawing on top of the same Display.
// Nothing here knows about pins or boards (see board/).

pub mod bitmap;
pub mod error;
pub mod ili9225;
pub mod interface;
pub mod shared;
pub mod text;
