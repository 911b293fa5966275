//! ESP32-C3 board support for an ILI9225 breakout
//!
//! Maps the panel wiring in `pins` onto esp-hal peripherals so the demo
//! binary never touches GPIO numbers. The pin table and the GPIO fields
//! used below must agree.

pub mod pins;

use esp_hal::{
    Blocking,
    gpio::{Level, Output, OutputConfig},
    peripherals::Peripherals,
    spi::{
        self,
        master::{ConfigError, Spi},
    },
    time::Rate,
};

use crate::config::{Config, SPI_FREQ_MHZ};
use crate::drivers::ili9225::Display;
use crate::drivers::interface::SpiInterface;

// Type Aliases
pub type SpiBus = Spi<'static, Blocking>;
pub type TftInterface = SpiInterface<SpiBus, Output<'static>, Output<'static>>;
pub type Tft = Display<TftInterface, Output<'static>>;

/// Complete board hardware, ready for `Tft::init`.
pub struct Board {
    pub tft: Tft,
}

impl Board {
    pub fn init(p: Peripherals, config: Config) -> Result<Self, ConfigError> {
        Ok(Board {
            tft: Self::init_tft(p, config)?,
        })
    }

    fn init_tft(p: Peripherals, config: Config) -> Result<Tft, ConfigError> {
        // CS idles high; RST high so the panel is out of reset until init
        let cs = Output::new(p.GPIO21, Level::High, OutputConfig::default());
        let rs = Output::new(p.GPIO4, Level::High, OutputConfig::default());
        let rst = Output::new(p.GPIO5, Level::High, OutputConfig::default());

        let spi_cfg = spi::master::Config::default()
            .with_frequency(Rate::from_mhz(SPI_FREQ_MHZ))
            .with_mode(spi::Mode::_0);
        let spi_bus = Spi::new(p.SPI2, spi_cfg)?
            .with_sck(p.GPIO8)
            .with_mosi(p.GPIO10);

        let iface = SpiInterface::new(spi_bus, cs, rs);
        Ok(Display::new(iface, rst, config))
    }
}
