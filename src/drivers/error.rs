// Driver error taxonomy
//
// Validation errors are raised before any byte reaches the panel.
// Transport errors carry whatever the interface reports.

use core::fmt;

use embedded_hal::digital;

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Drawing area leaves the logical screen (only with `Bounds::Reject`).
    OutOfBounds(Rect),
    /// Character outside the printable ASCII range of the built-in font.
    InvalidGlyph(char),
    /// Bitmap header disagrees with the slice length; counts are in
    /// words, header included.
    MalformedBitmap { expected: usize, actual: usize },
    Transport(E),
    ResetPin(digital::ErrorKind),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds(r) => write!(
                f,
                "area ({},{})-({},{}) is off screen",
                r.start.x, r.start.y, r.end.x, r.end.y
            ),
            Error::InvalidGlyph(ch) => write!(f, "no glyph for {:?}", ch),
            Error::MalformedBitmap { expected, actual } => write!(
                f,
                "bitmap needs {} words, got {}",
                expected, actual
            ),
            Error::Transport(e) => write!(f, "transport: {:?}", e),
            Error::ResetPin(kind) => write!(f, "reset pin: {}", kind),
        }
    }
}

/// Header/payload mismatch found while parsing a bitmap; independent of
/// the transport so it can be produced before a display is involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MalformedBitmap {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for MalformedBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bitmap needs {} words, got {}",
            self.expected, self.actual
        )
    }
}

impl<E> From<MalformedBitmap> for Error<E> {
    fn from(m: MalformedBitmap) -> Self {
        Error::MalformedBitmap {
            expected: m.expected,
            actual: m.actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e: Error<()> = Error::InvalidGlyph('\u{7f}');
        assert_eq!(e.to_string(), "no glyph for '\\u{7f}'");

        let e: Error<()> = Error::OutOfBounds(Rect::from_coords(-1, 0, 3, 4));
        assert_eq!(e.to_string(), "area (-1,0)-(3,4) is off screen");
    }

    #[test]
    fn malformed_bitmap_converts() {
        let e: Error<()> = MalformedBitmap {
            expected: 4,
            actual: 3,
        }
        .into();
        assert_eq!(
            e,
            Error::MalformedBitmap {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(e.to_string(), "bitmap needs 4 words, got 3");
    }
}
