// Display shared between owners (main loop, interrupt handlers)
//
// A primitive is "program window, then stream", and the panel cursor
// is shared state between those two steps. The lock covers a whole
// closure so any number of primitives run back to back with nobody
// else touching the bus in between.

use core::cell::RefCell;
use core::fmt;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Returned when `lock` is re-entered from inside its own closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Busy;

impl fmt::Display for Busy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("display already locked")
    }
}

pub struct SharedDisplay<M: RawMutex, D> {
    inner: Mutex<M, RefCell<D>>,
}

impl<M: RawMutex, D> SharedDisplay<M, D> {
    pub const fn new(display: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display.
    pub fn lock<R>(&self, f: impl FnOnce(&mut D) -> R) -> Result<R, Busy> {
        self.inner.lock(|cell| {
            let Ok(mut display) = cell.try_borrow_mut() else {
                log::warn!("ili9225: nested display lock");
                return Err(Busy);
            };
            Ok(f(&mut display))
        })
    }

    pub fn get_mut(&mut self) -> &mut D {
        self.inner.get_mut().get_mut()
    }

    pub fn into_inner(self) -> D {
        self.inner.into_inner().into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::config::Config;
    use crate::drivers::error::Error;
    use crate::geometry::{Orientation, Rect};
    use crate::testing::{self, Fault, TestDisplay};
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn primitives_run_inside_the_lock() {
        let shared: SharedDisplay<CriticalSectionRawMutex, TestDisplay> =
            SharedDisplay::new(testing::display(Config::default()));
        shared
            .lock(|d| -> Result<(), Error<Fault>> {
                d.set_orientation(Orientation::Landscape);
                d.fill_rectangle(Rect::from_coords(0, 0, 3, 3), colors::RED)?;
                d.draw_fast_char(Point::new(10, 10), 'A', colors::WHITE, colors::BLACK)
            })
            .unwrap()
            .unwrap();

        let d = shared.into_inner();
        assert_eq!(d.orientation(), Orientation::Landscape);
        let frames = d.interface().frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].pixels.len(), 16);
        assert_eq!(frames[1].pixels.len(), 104);
    }

    #[test]
    fn nested_lock_reports_busy() {
        let shared: SharedDisplay<NoopRawMutex, TestDisplay> =
            SharedDisplay::new(testing::display(Config::default()));
        let inner = shared.lock(|_| shared.lock(|_| ())).unwrap();
        assert_eq!(inner, Err(Busy));
        // usable again once the outer lock is gone
        assert!(shared.lock(|_| ()).is_ok());
    }

    #[test]
    fn get_mut_bypasses_the_lock() {
        let mut shared: SharedDisplay<NoopRawMutex, TestDisplay> =
            SharedDisplay::new(testing::display(Config::default()));
        shared.get_mut().set_orientation(Orientation::Landscape);
        assert_eq!(shared.lock(|d| d.orientation()), Ok(Orientation::Landscape));
    }
}
