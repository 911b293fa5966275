// Panel geometry, timing constants and per-display configuration.

use crate::geometry::Orientation;

/// Physical panel width (columns, portrait).
pub const PANEL_WIDTH: u16 = 176;
/// Physical panel height (rows, portrait).
pub const PANEL_HEIGHT: u16 = 220;

/// RESET held low, then high, for this long each during `init`.
pub const RESET_DELAY_MS: u32 = 500;

pub const SPI_FREQ_MHZ: u32 = 8;

/// What to do with drawing that falls partly or fully off screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bounds {
    /// Clip to the screen and draw the visible part.
    #[default]
    Clamp,
    /// Fail with `Error::OutOfBounds` before touching the panel.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub orientation: Orientation,
    pub bounds: Bounds,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            orientation: Orientation::Portrait,
            bounds: Bounds::Clamp,
        }
    }

    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub const fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }
}
