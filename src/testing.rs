// Host-side test doubles: a transport that records every byte, decoders
// that turn the byte log back into register writes and GRAM frames, and
// a small GRAM model that replays frames the way the controller does.

use embedded_graphics_core::geometry::Point;

use crate::config::{Config, PANEL_HEIGHT, PANEL_WIDTH};
use crate::drivers::ili9225::{Display, NoResetPin};
use crate::drivers::interface::{Interface, Mode};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Command(u8),
    Data(u8),
    BurstBegin,
    BurstEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fault;

#[derive(Default)]
pub struct RecordingInterface {
    pub events: Vec<Event>,
    /// Fail every write once this many bytes have gone out.
    pub fail_after: Option<usize>,
    bytes: usize,
    in_burst: bool,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(bytes: usize) -> Self {
        Self {
            fail_after: Some(bytes),
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn count(&mut self) -> Result<(), Fault> {
        if self.fail_after.is_some_and(|n| self.bytes >= n) {
            return Err(Fault);
        }
        self.bytes += 1;
        Ok(())
    }

    pub fn registers(&self) -> Vec<(u16, u16)> {
        decode(&self.events)
            .into_iter()
            .filter_map(|op| match op {
                Op::Register(addr, value) => Some((addr, value)),
                _ => None,
            })
            .collect()
    }

    pub fn frames(&self) -> Vec<Frame> {
        let mut regs = [0u16; 0x40];
        let mut frames = Vec::new();
        for op in decode(&self.events) {
            match op {
                Op::Register(addr, value) if (addr as usize) < regs.len() => {
                    regs[addr as usize] = value;
                }
                Op::Register(..) => {}
                Op::Gram(pixels) => frames.push(Frame {
                    window: Rect::from_coords(
                        regs[0x37] as i32,
                        regs[0x39] as i32,
                        regs[0x36] as i32,
                        regs[0x38] as i32,
                    ),
                    cursor: Point::new(regs[0x20] as i32, regs[0x21] as i32),
                    pixels,
                }),
            }
        }
        frames
    }

    /// Number of burst openings and closings seen.
    pub fn bursts(&self) -> (usize, usize) {
        let open = self.events.iter().filter(|e| **e == Event::BurstBegin).count();
        let close = self.events.iter().filter(|e| **e == Event::BurstEnd).count();
        (open, close)
    }
}

impl Interface for RecordingInterface {
    type Error = Fault;

    fn write_byte(&mut self, value: u8, mode: Mode) -> Result<(), Fault> {
        assert!(!self.in_burst, "single byte written inside a burst");
        self.count()?;
        self.events.push(match mode {
            Mode::Command => Event::Command(value),
            Mode::Data => Event::Data(value),
        });
        Ok(())
    }

    fn begin_burst(&mut self) -> Result<(), Fault> {
        assert!(!self.in_burst, "nested burst");
        self.in_burst = true;
        self.events.push(Event::BurstBegin);
        Ok(())
    }

    fn burst_write(&mut self, bytes: &[u8]) -> Result<(), Fault> {
        assert!(self.in_burst, "burst data outside a burst");
        for &b in bytes {
            self.count()?;
            self.events.push(Event::Data(b));
        }
        Ok(())
    }

    fn end_burst(&mut self) -> Result<(), Fault> {
        assert!(self.in_burst, "burst closed twice");
        self.in_burst = false;
        self.events.push(Event::BurstEnd);
        Ok(())
    }
}

/// One GRAM write as seen on the wire: the window and cursor registers in
/// force when it started, and the pixel words that followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub window: Rect,
    pub cursor: Point,
    pub pixels: Vec<u16>,
}

#[derive(Debug)]
enum Op {
    Register(u16, u16),
    Gram(Vec<u16>),
}

fn decode(events: &[Event]) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut i = 0;
    while i < events.len() {
        let (Event::Command(hi), Some(Event::Command(lo))) = (events[i], events.get(i + 1).copied())
        else {
            panic!("expected a command pair at event {}: {:?}", i, &events[i..]);
        };
        let addr = u16::from_be_bytes([hi, lo]);
        i += 2;
        match events.get(i) {
            Some(Event::BurstBegin) => {
                i += 1;
                let mut bytes = Vec::new();
                while let Some(Event::Data(b)) = events.get(i) {
                    bytes.push(*b);
                    i += 1;
                }
                assert_eq!(events.get(i), Some(&Event::BurstEnd), "unterminated burst");
                i += 1;
                assert_eq!(bytes.len() % 2, 0, "odd byte count in pixel burst");
                let pixels = bytes
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                ops.push(Op::Gram(pixels));
            }
            Some(Event::Data(vh)) => {
                let Some(Event::Data(vl)) = events.get(i + 1) else {
                    panic!("register {:#06x} missing low data byte", addr);
                };
                ops.push(Op::Register(addr, u16::from_be_bytes([*vh, *vl])));
                i += 2;
            }
            other => panic!("unexpected {:?} after command {:#06x}", other, addr),
        }
    }
    ops
}

/// GRAM contents after replaying frames with the controller's
/// horizontal-first auto-increment inside the window.
pub struct Panel {
    gram: Vec<u16>,
}

impl Panel {
    pub fn new(fill: u16) -> Self {
        Self {
            gram: vec![fill; PANEL_WIDTH as usize * PANEL_HEIGHT as usize],
        }
    }

    pub fn apply(&mut self, frames: &[Frame]) {
        for f in frames {
            let w = f.window;
            let (mut x, mut y) = (f.cursor.x, f.cursor.y);
            for &px in &f.pixels {
                self.gram[(y * PANEL_WIDTH as i32 + x) as usize] = px;
                x += 1;
                if x > w.end.x {
                    x = w.start.x;
                    y += 1;
                    if y > w.end.y {
                        y = w.start.y;
                    }
                }
            }
        }
    }

    /// Physical pixel.
    pub fn at(&self, x: i32, y: i32) -> u16 {
        self.gram[(y * PANEL_WIDTH as i32 + x) as usize]
    }
}

pub type TestDisplay = Display<RecordingInterface, NoResetPin>;

pub fn display(config: Config) -> TestDisplay {
    Display::new(RecordingInterface::new(), NoResetPin, config)
}
