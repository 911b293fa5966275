//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  4   | TFT RS (D/C)    | Low = register index, high = data
//!  5   | TFT RST         | Reset (active low)
//!  8   | SPI2 SCK        | Panel clock
//! 10   | SPI2 MOSI       | Panel data in (panel is write-only, no MISO)
//! 21   | TFT CS          | Panel chip select (active low)

// ----- TFT panel -----
pub const TFT_CS: u8 = 21;
pub const TFT_RS: u8 = 4;
pub const TFT_RST: u8 = 5;

// ----- SPI bus -----
pub const SPI_SCK: u8 = 8;
pub const SPI_MOSI: u8 = 10;
