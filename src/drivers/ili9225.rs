// ILI9225 TFT driver (board-independent)
// 176x220 RGB565 panel on a 4-wire serial link. No framebuffer: every
// primitive programs a GRAM window and streams colours straight into
// it. Landscape is handled by mapping logical areas onto the physical
// window and walking the window in the panel's own scan order.

use core::convert::Infallible;
use core::iter;

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, Error as _, OutputPin};
use log::{debug, trace, warn};

use super::error::Error;
use super::interface::{Interface, Mode};
use crate::colors::to_raw;
use crate::config::{Bounds, Config, RESET_DELAY_MS};
use crate::geometry::{Orientation, Rect};

// bytes per burst_write during a pixel stream (32 pixels)
const STREAM_CHUNK: usize = 64;

// ILI9225 registers
pub mod reg {
    pub const DRIVER_OUTPUT_CTRL: u16 = 0x01;
    pub const LCD_AC_DRIVING_CTRL: u16 = 0x02;
    pub const ENTRY_MODE: u16 = 0x03;
    pub const DISP_CTRL1: u16 = 0x07;
    pub const BLANK_PERIOD_CTRL1: u16 = 0x08;
    pub const FRAME_CYCLE_CTRL: u16 = 0x0B;
    pub const INTERFACE_CTRL: u16 = 0x0C;
    pub const OSC_CTRL: u16 = 0x0F;
    pub const POWER_CTRL1: u16 = 0x10;
    pub const POWER_CTRL2: u16 = 0x11;
    pub const POWER_CTRL3: u16 = 0x12;
    pub const POWER_CTRL4: u16 = 0x13;
    pub const POWER_CTRL5: u16 = 0x14;
    pub const VCI_RECYCLING: u16 = 0x15;
    pub const RAM_ADDR_SET1: u16 = 0x20; // x cursor
    pub const RAM_ADDR_SET2: u16 = 0x21; // y cursor
    pub const GRAM_DATA_REG: u16 = 0x22;
    pub const GATE_SCAN_CTRL: u16 = 0x30;
    pub const VERTICAL_SCROLL_CTRL1: u16 = 0x31;
    pub const VERTICAL_SCROLL_CTRL2: u16 = 0x32;
    pub const VERTICAL_SCROLL_CTRL3: u16 = 0x33;
    pub const PARTIAL_DRIVING_POS1: u16 = 0x34;
    pub const PARTIAL_DRIVING_POS2: u16 = 0x35;
    pub const HORIZONTAL_WINDOW_ADDR1: u16 = 0x36; // end
    pub const HORIZONTAL_WINDOW_ADDR2: u16 = 0x37; // start
    pub const VERTICAL_WINDOW_ADDR1: u16 = 0x38; // end
    pub const VERTICAL_WINDOW_ADDR2: u16 = 0x39; // start
    pub const GAMMA_CTRL1: u16 = 0x50;
    pub const GAMMA_CTRL2: u16 = 0x51;
    pub const GAMMA_CTRL3: u16 = 0x52;
    pub const GAMMA_CTRL4: u16 = 0x53;
    pub const GAMMA_CTRL5: u16 = 0x54;
    pub const GAMMA_CTRL6: u16 = 0x55;
    pub const GAMMA_CTRL7: u16 = 0x56;
    pub const GAMMA_CTRL8: u16 = 0x57;
    pub const GAMMA_CTRL9: u16 = 0x58;
    pub const GAMMA_CTRL10: u16 = 0x59;
}

// display control 1 values
const DISPLAY_ON: u16 = 0x1017;
const DISPLAY_OFF: u16 = 0x0000;

#[derive(Clone, Copy, Debug)]
enum Step {
    Write(u16, u16),
    WaitMs(u32),
}

// power-up, panel setup and gamma; runs after the hardware reset pulse
const INIT_SEQUENCE: &[Step] = &[
    // power off, then ramp
    Step::Write(reg::POWER_CTRL1, 0x0000),
    Step::Write(reg::POWER_CTRL2, 0x0000),
    Step::Write(reg::POWER_CTRL3, 0x0000),
    Step::Write(reg::POWER_CTRL4, 0x0000),
    Step::Write(reg::POWER_CTRL5, 0x0000),
    Step::WaitMs(10),
    Step::Write(reg::POWER_CTRL2, 0x0018),
    Step::Write(reg::POWER_CTRL3, 0x6121),
    Step::Write(reg::POWER_CTRL4, 0x006F),
    Step::Write(reg::POWER_CTRL5, 0x495F),
    Step::Write(reg::POWER_CTRL1, 0x0800),
    Step::WaitMs(10),
    Step::Write(reg::POWER_CTRL2, 0x103B),
    Step::WaitMs(50),
    // 176x220, source shift S528 -> S1, gate G1 -> G528
    Step::Write(reg::DRIVER_OUTPUT_CTRL, 0x011C),
    Step::Write(reg::LCD_AC_DRIVING_CTRL, 0x0100),
    // BGR, horizontal-first, x and y increment
    Step::Write(reg::ENTRY_MODE, 0x1030),
    Step::Write(reg::DISP_CTRL1, 0x0000),
    Step::Write(reg::BLANK_PERIOD_CTRL1, 0x0808),
    Step::Write(reg::FRAME_CYCLE_CTRL, 0x1100),
    Step::Write(reg::INTERFACE_CTRL, 0x0000),
    Step::Write(reg::OSC_CTRL, 0x0D01),
    Step::Write(reg::VCI_RECYCLING, 0x0020),
    Step::Write(reg::RAM_ADDR_SET1, 0x0000),
    Step::Write(reg::RAM_ADDR_SET2, 0x0000),
    // no scroll, no partial driving, window = whole panel
    Step::Write(reg::GATE_SCAN_CTRL, 0x0000),
    Step::Write(reg::VERTICAL_SCROLL_CTRL1, 0x00DB),
    Step::Write(reg::VERTICAL_SCROLL_CTRL2, 0x0000),
    Step::Write(reg::VERTICAL_SCROLL_CTRL3, 0x0000),
    Step::Write(reg::PARTIAL_DRIVING_POS1, 0x00DB),
    Step::Write(reg::PARTIAL_DRIVING_POS2, 0x0000),
    Step::Write(reg::HORIZONTAL_WINDOW_ADDR1, 0x00AF),
    Step::Write(reg::HORIZONTAL_WINDOW_ADDR2, 0x0000),
    Step::Write(reg::VERTICAL_WINDOW_ADDR1, 0x00DB),
    Step::Write(reg::VERTICAL_WINDOW_ADDR2, 0x0000),
    // gamma curve
    Step::Write(reg::GAMMA_CTRL1, 0x0000),
    Step::Write(reg::GAMMA_CTRL2, 0x0808),
    Step::Write(reg::GAMMA_CTRL3, 0x080A),
    Step::Write(reg::GAMMA_CTRL4, 0x000A),
    Step::Write(reg::GAMMA_CTRL5, 0x0A08),
    Step::Write(reg::GAMMA_CTRL6, 0x0808),
    Step::Write(reg::GAMMA_CTRL7, 0x0000),
    Step::Write(reg::GAMMA_CTRL8, 0x0A00),
    Step::Write(reg::GAMMA_CTRL9, 0x0710),
    Step::Write(reg::GAMMA_CTRL10, 0x0710),
    // gate on, then display on
    Step::Write(reg::DISP_CTRL1, 0x0012),
    Step::WaitMs(50),
    Step::Write(reg::DISP_CTRL1, DISPLAY_ON),
];

/// Stand-in for boards that tie RESET to the MCU reset line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResetPin;

impl digital::ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct Display<I, RST = NoResetPin> {
    iface: I,
    rst: RST,
    config: Config,
}

fn write_register<I: Interface>(iface: &mut I, addr: u16, value: u16) -> Result<(), I::Error> {
    let [ah, al] = addr.to_be_bytes();
    let [vh, vl] = value.to_be_bytes();
    iface.write_byte(ah, Mode::Command)?;
    iface.write_byte(al, Mode::Command)?;
    iface.write_byte(vh, Mode::Data)?;
    iface.write_byte(vl, Mode::Data)
}

// window end/start pairs, cursor at the top-left, then the GRAM index
// with no parameter so the data that follows lands in memory
fn program_window<I: Interface>(iface: &mut I, r: Rect) -> Result<(), I::Error> {
    let (x1, y1) = (r.start.x as u16, r.start.y as u16);
    let (x2, y2) = (r.end.x as u16, r.end.y as u16);
    write_register(iface, reg::HORIZONTAL_WINDOW_ADDR1, x2)?;
    write_register(iface, reg::HORIZONTAL_WINDOW_ADDR2, x1)?;
    write_register(iface, reg::VERTICAL_WINDOW_ADDR1, y2)?;
    write_register(iface, reg::VERTICAL_WINDOW_ADDR2, y1)?;
    write_register(iface, reg::RAM_ADDR_SET1, x1)?;
    write_register(iface, reg::RAM_ADDR_SET2, y1)?;
    let [gh, gl] = reg::GRAM_DATA_REG.to_be_bytes();
    iface.write_byte(gh, Mode::Command)?;
    iface.write_byte(gl, Mode::Command)
}

impl<I, RST> Display<I, RST>
where
    I: Interface,
    RST: OutputPin,
{
    pub fn new(iface: I, rst: RST, config: Config) -> Self {
        Self { iface, rst, config }
    }

    /// Hardware reset followed by the full register bring-up.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        debug!("ili9225: reset");
        self.rst
            .set_low()
            .map_err(|e| Error::ResetPin(e.kind()))?;
        delay.delay_ms(RESET_DELAY_MS);
        self.rst
            .set_high()
            .map_err(|e| Error::ResetPin(e.kind()))?;
        delay.delay_ms(RESET_DELAY_MS);

        for step in INIT_SEQUENCE {
            match *step {
                Step::Write(addr, value) => self.write_register(addr, value)?,
                Step::WaitMs(ms) => delay.delay_ms(ms),
            }
        }
        debug!("ili9225: init done, {:?}", self.config.orientation);
        Ok(())
    }

    /// Register index on the command lines, value on the data lines.
    pub fn write_register(&mut self, addr: u16, value: u16) -> Result<(), Error<I::Error>> {
        write_register(&mut self.iface, addr, value).map_err(Error::Transport)
    }

    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I::Error>> {
        debug!("ili9225: display {}", if on { "on" } else { "off" });
        let value = if on { DISPLAY_ON } else { DISPLAY_OFF };
        self.write_register(reg::DISP_CTRL1, value)
    }

    // ── Configuration ───────────────────────────────────────────────

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Takes effect from the next primitive; GRAM is not redrawn.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.config.orientation {
            debug!("ili9225: orientation {:?}", orientation);
        }
        self.config.orientation = orientation;
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.config.bounds = bounds;
    }

    /// Logical screen size for the current orientation.
    pub fn size(&self) -> Size {
        self.config.orientation.size()
    }

    pub fn interface(&self) -> &I {
        &self.iface
    }

    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.iface
    }

    pub fn release(self) -> (I, RST) {
        (self.iface, self.rst)
    }

    // ── Window addressing ───────────────────────────────────────────

    /// Program the GRAM window and cursor for a physical rectangle and
    /// open GRAM access. Corners may come in any order.
    pub fn set_window(&mut self, r: Rect) -> Result<Window<'_, I>, Error<I::Error>> {
        let r = r.normalized();
        if !Orientation::Portrait.screen().contains_rect(r) {
            warn!("ili9225: window {:?} outside the panel", r);
            return Err(Error::OutOfBounds(r));
        }
        trace!(
            "ili9225: window ({},{})-({},{})",
            r.start.x, r.start.y, r.end.x, r.end.y
        );

        program_window(&mut self.iface, r).map_err(Error::Transport)?;

        Ok(Window {
            iface: &mut self.iface,
            cells: r.area(),
        })
    }

    // ── Bounds policy ───────────────────────────────────────────────

    /// Part of a logical area that is on screen. `Ok(None)` when nothing
    /// is visible under `Bounds::Clamp`; an error under `Bounds::Reject`
    /// unless the whole area fits.
    pub(crate) fn visible(&self, area: Rect) -> Result<Option<Rect>, Error<I::Error>> {
        let area = area.normalized();
        let screen = self.config.orientation.screen();
        if screen.contains_rect(area) {
            return Ok(Some(area));
        }
        match self.config.bounds {
            Bounds::Reject => {
                warn!("ili9225: rejected off-screen area {:?}", area);
                Err(Error::OutOfBounds(area))
            }
            Bounds::Clamp => {
                let clipped = area.intersection(screen);
                match clipped {
                    Some(c) => warn!("ili9225: clipped {:?} to {:?}", area, c),
                    None => warn!("ili9225: {:?} entirely off screen", area),
                }
                Ok(clipped)
            }
        }
    }

    /// Stream the visible part of a logical `area` in one window.
    ///
    /// `color_at` receives each cell's column and row offset from the
    /// top-left of the full (unclipped) area. Cells are visited in
    /// physical scan order, so under Landscape the area is read column
    /// by column, bottom-up.
    pub(crate) fn stream_area<F>(
        &mut self,
        area: Rect,
        visible: Rect,
        mut color_at: F,
    ) -> Result<(), Error<I::Error>>
    where
        F: FnMut(u32, u32) -> Rgb565,
    {
        let o = self.config.orientation;
        let origin = area.top_left();
        let phys = o.rect_to_physical(visible).normalized();
        let (x1, y1, x2, y2) = (phys.start.x, phys.start.y, phys.end.x, phys.end.y);

        let window = self.set_window(phys)?;
        // visible cells never lie left of or above the origin
        let cells = (y1..=y2)
            .flat_map(move |py| (x1..=x2).map(move |px| Point::new(px, py)))
            .map(|p| {
                let l = o.to_logical(p);
                color_at(l.x.abs_diff(origin.x), l.y.abs_diff(origin.y))
            });
        window.stream(cells)
    }

    // ── Primitives ──────────────────────────────────────────────────

    /// Solid fill of a logical rectangle (inclusive corners, any order).
    pub fn fill_rectangle(&mut self, r: Rect, color: Rgb565) -> Result<(), Error<I::Error>> {
        let Some(visible) = self.visible(r)? else {
            return Ok(());
        };
        let phys = self.config.orientation.rect_to_physical(visible);
        self.set_window(phys)?.stream(iter::repeat(color))
    }

    pub fn draw_pixel(&mut self, p: Point, color: Rgb565) -> Result<(), Error<I::Error>> {
        if self.visible(Rect::point(p))?.is_none() {
            return Ok(());
        }
        let phys = self.config.orientation.to_physical(p);
        self.set_window(Rect::point(phys))?
            .stream(iter::once(color))
    }

    pub fn clear(&mut self, color: Rgb565) -> Result<(), Error<I::Error>> {
        self.fill_rectangle(self.config.orientation.screen(), color)
    }
}

/// Open GRAM window. Holding one is proof that the window and cursor
/// registers were just programmed and nothing else has touched the
/// controller since.
pub struct Window<'a, I: Interface> {
    iface: &'a mut I,
    cells: u32,
}

impl<I: Interface> Window<'_, I> {
    /// Cells in the window; `stream` writes at most this many.
    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Write colours into the window in one burst, high byte first.
    /// Input beyond the window size is ignored. The burst is always
    /// closed, even when a write fails.
    pub fn stream<C>(self, colors: C) -> Result<(), Error<I::Error>>
    where
        C: IntoIterator<Item = Rgb565>,
    {
        let Window { iface, cells } = self;
        iface.begin_burst().map_err(Error::Transport)?;
        let res = push_colors(&mut *iface, cells, colors);
        let end = iface.end_burst().map_err(Error::Transport);
        let sent = res?;
        end?;
        if sent < cells {
            warn!("ili9225: stream ended after {} of {} pixels", sent, cells);
        }
        Ok(())
    }
}

fn push_colors<I, C>(iface: &mut I, cells: u32, colors: C) -> Result<u32, Error<I::Error>>
where
    I: Interface,
    C: IntoIterator<Item = Rgb565>,
{
    let mut buf = [0u8; STREAM_CHUNK];
    let mut len = 0;
    let mut sent = 0;
    for color in colors.into_iter().take(cells as usize) {
        let [hi, lo] = to_raw(color).to_be_bytes();
        buf[len] = hi;
        buf[len + 1] = lo;
        len += 2;
        sent += 1;
        if len == buf.len() {
            iface.burst_write(&buf).map_err(Error::Transport)?;
            len = 0;
        }
    }
    if len > 0 {
        iface.burst_write(&buf[..len]).map_err(Error::Transport)?;
    }
    Ok(sent)
}

// ── embedded-graphics ───────────────────────────────────────────────────

impl<I, RST> OriginDimensions for Display<I, RST>
where
    I: Interface,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        self.config.orientation.size()
    }
}

impl<I, RST> DrawTarget for Display<I, RST>
where
    I: Interface,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = Error<I::Error>;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let screen = self.config.orientation.screen();
        for Pixel(p, color) in pixels {
            if screen.contains(p) {
                self.draw_pixel(p, color)?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<C>(&mut self, area: &Rectangle, colors: C) -> Result<(), Self::Error>
    where
        C: IntoIterator<Item = Self::Color>,
    {
        let Some(r) = Rect::with_size(area.top_left, area.size) else {
            return Ok(());
        };
        let screen = self.config.orientation.screen();
        if self.config.orientation == Orientation::Portrait && screen.contains_rect(r) {
            return self.set_window(r)?.stream(colors);
        }

        // landscape or partly off screen: per pixel, row-major as given.
        // Positions are tracked in i64 so areas reaching past the i32
        // range still skip their off-screen part instead of wrapping.
        let w = u64::from(area.size.width);
        let cells = w * u64::from(area.size.height);
        let (x0, y0) = (i64::from(area.top_left.x), i64::from(area.top_left.y));
        let mut n = 0u64;
        for color in colors {
            if n == cells {
                break;
            }
            let x = x0 + (n % w) as i64;
            let y = y0 + (n / w) as i64;
            n += 1;
            let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                continue;
            };
            let p = Point::new(x, y);
            if screen.contains(p) {
                self.draw_pixel(p, color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Some(r) = Rect::with_size(area.top_left, area.size) else {
            return Ok(());
        };
        match r.intersection(self.config.orientation.screen()) {
            Some(visible) => self.fill_rectangle(visible, color),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_rectangle(self.config.orientation.screen(), color)
    }
}
