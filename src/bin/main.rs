// ili9225 demo: test pattern on an ESP32-C3
//
// Boot: logger -> clocks -> board -> panel init -> clear to black.
// Loop: full-screen fill with a border, "Hello World" at growing text
// scales, one second per frame. Drawing errors are logged and the loop
// carries on.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::{error, info};

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_core::pixelcolor::Rgb565;

use ili9225::board::{Board, Tft};
use ili9225::colors;
use ili9225::{Config, Error, SpiInterfaceError};

esp_bootloader_esp_idf::esp_app_desc!();

const FRAME_MS: u32 = 1000;
const TEXT_ORIGIN: Point = Point::new(64, 64);

// background and text scale of each test frame
const PATTERN: [(Rgb565, u32); 3] = [
    (colors::LIGHTBLUE, 1),
    (colors::RED, 2),
    (colors::GREEN, 3),
];

fn frame(tft: &mut Tft, bg: Rgb565, scale: u32) -> Result<(), Error<SpiInterfaceError>> {
    tft.clear(bg)?;
    Rectangle::new(Point::zero(), tft.size())
        .into_styled(PrimitiveStyle::with_stroke(colors::BLACK, 2))
        .draw(tft)?;
    tft.draw_string(TEXT_ORIGIN, colors::BLACK, scale, "Hello World")
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let board = match Board::init(peripherals, Config::default()) {
        Ok(board) => board,
        Err(e) => panic!("spi config rejected: {:?}", e),
    };
    let mut tft = board.tft;
    let mut delay = Delay::new();

    info!("hardware initialized.");

    if let Err(e) = tft.init(&mut delay) {
        panic!("panel init failed: {}", e);
    }
    if let Err(e) = tft.clear(colors::BLACK) {
        error!("clear: {}", e);
    }

    info!("panel ready, {}x{}", tft.size().width, tft.size().height);

    loop {
        for &(bg, scale) in &PATTERN {
            if let Err(e) = frame(&mut tft, bg, scale) {
                error!("frame (scale {}): {}", scale, e);
            }
            delay.delay_millis(FRAME_MS);
        }
    }
}
