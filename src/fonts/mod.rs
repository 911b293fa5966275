// Built-in 8x13 bitmap font, printable ASCII only.
// Table lives in flash; lookup is a bounds check and an index.

mod font8x13;

pub const FIRST_CHAR: u8 = 0x20;
pub const LAST_CHAR: u8 = 0x7E;
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize; // 95

pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 13;
/// Horizontal pitch between characters: glyph width plus one blank column.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    pub(crate) const fn new(rows: [u8; GLYPH_HEIGHT as usize]) -> Self {
        Self { rows }
    }

    /// Scanline `i` counted from the top of the cell.
    #[inline]
    pub const fn row_from_top(&self, i: usize) -> u8 {
        self.rows[GLYPH_HEIGHT as usize - 1 - i]
    }

    /// Whether the pixel at (`col`, `row`) of the cell is ink; origin
    /// top-left, out-of-cell positions read as background.
    #[inline]
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.row_from_top(row as usize) & (0x80 >> col) != 0
    }

    /// Number of ink pixels in the cell.
    pub fn ink(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}

/// Glyph for `ch`, or `None` outside 0x20..=0x7E.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let code = ch as u32;
    if code < FIRST_CHAR as u32 || code > LAST_CHAR as u32 {
        return None;
    }
    Some(&font8x13::GLYPHS[(code - FIRST_CHAR as u32) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ch: char) -> [[bool; 8]; 13] {
        let g = glyph(ch).unwrap();
        let mut out = [[false; 8]; 13];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, px) in line.iter_mut().enumerate() {
                *px = g.is_set(col as u32, row as u32);
            }
        }
        out
    }

    #[test]
    fn printable_range_only() {
        assert!(glyph(' ').is_some());
        assert!(glyph('~').is_some());
        assert!(glyph('\u{1f}').is_none());
        assert!(glyph('\u{7f}').is_none());
        assert!(glyph('é').is_none());
        assert!(glyph('\0').is_none());
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph(' ').unwrap().ink(), 0);
    }

    #[test]
    fn top_row_reads_last_stored_byte() {
        // 'T' has a full bar across the top scanline
        let t = glyph('T').unwrap();
        assert_eq!(t.row_from_top(0), 0xFF);
        assert!((0..8).all(|c| t.is_set(c, 0)));
        // and two blank descender rows at the bottom
        assert_eq!(t.row_from_top(11), 0);
        assert_eq!(t.row_from_top(12), 0);
    }

    #[test]
    fn msb_is_leftmost_column() {
        // 'L' is a left stem with a foot
        let l = render('L');
        for row in l.iter().take(11) {
            assert!(row[0]);
        }
        assert!(!l[0][7]);
        assert!(l[10][7]);
    }

    #[test]
    fn ink_counts_for_known_glyphs() {
        assert_eq!(glyph('O').unwrap().ink(), 52);
        assert_eq!(glyph('K').unwrap().ink(), 43);
    }

    #[test]
    fn out_of_cell_reads_blank() {
        let g = glyph('|').unwrap();
        assert!(!g.is_set(8, 0));
        assert!(!g.is_set(0, 13));
    }
}
