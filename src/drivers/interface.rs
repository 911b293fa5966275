// Byte-level transport to the panel controller
//
// The controller latches D/C with every byte: low selects the register
// index (command), high selects a parameter or pixel data. Single bytes
// are framed by their own chip-select pulse; a burst holds CS low in
// data mode across any number of `burst_write` calls so pixel runs go
// out without per-byte framing.

use core::fmt;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Command,
    Data,
}

pub trait Interface {
    type Error: fmt::Debug;

    fn write_byte(&mut self, value: u8, mode: Mode) -> Result<(), Self::Error>;

    /// Open a data-mode burst.
    fn begin_burst(&mut self) -> Result<(), Self::Error>;

    /// Only valid between `begin_burst` and `end_burst`.
    fn burst_write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Close the burst. Must be safe to call after a failed `burst_write`.
    fn end_burst(&mut self) -> Result<(), Self::Error>;
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    #[inline]
    fn write_byte(&mut self, value: u8, mode: Mode) -> Result<(), Self::Error> {
        T::write_byte(self, value, mode)
    }

    #[inline]
    fn begin_burst(&mut self) -> Result<(), Self::Error> {
        T::begin_burst(self)
    }

    #[inline]
    fn burst_write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::burst_write(self, bytes)
    }

    #[inline]
    fn end_burst(&mut self) -> Result<(), Self::Error> {
        T::end_burst(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpiInterfaceError {
    Spi(spi::ErrorKind),
    Pin(digital::ErrorKind),
}

impl fmt::Display for SpiInterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiInterfaceError::Spi(kind) => write!(f, "spi: {}", kind),
            SpiInterfaceError::Pin(kind) => write!(f, "cs/dc pin: {}", kind),
        }
    }
}

fn spi_err<E: spi::Error>(e: E) -> SpiInterfaceError {
    SpiInterfaceError::Spi(e.kind())
}

fn pin_err<E: digital::Error>(e: E) -> SpiInterfaceError {
    SpiInterfaceError::Pin(e.kind())
}

/// 4-wire serial link: SPI bus plus software chip-select and D/C lines.
///
/// Owns the whole `SpiBus`; CS stays asserted for the full length of a
/// pixel burst, across as many `burst_write` calls as the caller makes.
pub struct SpiInterface<SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
}

impl<SPI, CS, DC> SpiInterface<SPI, CS, DC>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    pub fn new(spi: SPI, cs: CS, dc: DC) -> Self {
        Self { spi, cs, dc }
    }

    pub fn release(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), SpiInterfaceError> {
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
        .map_err(pin_err)
    }
}

impl<SPI, CS, DC> Interface for SpiInterface<SPI, CS, DC>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    type Error = SpiInterfaceError;

    fn write_byte(&mut self, value: u8, mode: Mode) -> Result<(), Self::Error> {
        self.set_mode(mode)?;
        self.cs.set_low().map_err(pin_err)?;
        let res = self
            .spi
            .write(&[value])
            .and_then(|()| self.spi.flush())
            .map_err(spi_err);
        // release CS even if the bus failed
        let cs = self.cs.set_high().map_err(pin_err);
        res.and(cs)
    }

    fn begin_burst(&mut self) -> Result<(), Self::Error> {
        self.set_mode(Mode::Data)?;
        self.cs.set_low().map_err(pin_err)
    }

    fn burst_write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(spi_err)
    }

    fn end_burst(&mut self) -> Result<(), Self::Error> {
        let res = self.spi.flush().map_err(spi_err);
        let cs = self.cs.set_high().map_err(pin_err);
        res.and(cs)
    }
}
