// Logical <-> physical coordinate maths
//
// Physical space is the panel's own GRAM addressing: 176 columns by 220
// rows, origin top-left in portrait. Landscape is portrait rotated -90°,
// logical (lx, ly) lands on physical (ly, 219 - lx).
// Rectangles are mapped corner by corner and only normalised afterwards;
// normalising first breaks rectangles whose corners cross when reflected.

use embedded_graphics_core::geometry::{Point, Size};

use crate::config::{PANEL_HEIGHT, PANEL_WIDTH};

// reflection axis for landscape; the landscape logical width minus one
const LAST_ROW: i32 = PANEL_HEIGHT as i32 - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Logical screen size seen by callers.
    pub const fn size(self) -> Size {
        match self {
            Orientation::Portrait => Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32),
            Orientation::Landscape => Size::new(PANEL_HEIGHT as u32, PANEL_WIDTH as u32),
        }
    }

    /// The whole logical screen as an inclusive rectangle.
    pub const fn screen(self) -> Rect {
        let size = self.size();
        Rect::new(
            Point::zero(),
            Point::new(size.width as i32 - 1, size.height as i32 - 1),
        )
    }

    #[inline]
    pub const fn to_physical(self, p: Point) -> Point {
        match self {
            Orientation::Portrait => p,
            Orientation::Landscape => Point::new(p.y, LAST_ROW - p.x),
        }
    }

    #[inline]
    pub const fn to_logical(self, p: Point) -> Point {
        match self {
            Orientation::Portrait => p,
            Orientation::Landscape => Point::new(LAST_ROW - p.y, p.x),
        }
    }

    /// Maps both corners; the result is NOT normalised.
    pub const fn rect_to_physical(self, r: Rect) -> Rect {
        Rect::new(self.to_physical(r.start), self.to_physical(r.end))
    }
}

/// Two inclusive corners. Callers may pass them in any order;
/// `normalized()` orders each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub start: Point,
    pub end: Point,
}

impl Rect {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Single-cell rectangle.
    pub const fn point(p: Point) -> Self {
        Self::new(p, p)
    }

    /// `None` when either dimension is zero.
    pub fn with_size(origin: Point, size: Size) -> Option<Self> {
        Self::spanning(
            origin.x.into(),
            origin.y.into(),
            size.width.into(),
            size.height.into(),
        )
    }

    /// Corners computed in `i64` and clamped into `i32`. The screen sits
    /// well inside `i32`, so clamping never changes which on-screen cells
    /// a rectangle covers.
    pub fn from_wide(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::from_coords(narrow(x1), narrow(y1), narrow(x2), narrow(y2))
    }

    /// `width`×`height` cells starting at (`x`, `y`), clamped like
    /// `from_wide`. `None` when either dimension is zero.
    pub fn spanning(x: i64, y: i64, width: u64, height: u64) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let far = |start: i64, len: u64| {
            start.saturating_add(i64::try_from(len).unwrap_or(i64::MAX) - 1)
        };
        Some(Self::from_wide(x, y, far(x, width), far(y, height)))
    }

    pub fn normalized(self) -> Self {
        Self::from_coords(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    #[inline]
    pub fn top_left(self) -> Point {
        self.normalized().start
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.start.x.abs_diff(self.end.x).saturating_add(1)
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.start.y.abs_diff(self.end.y).saturating_add(1)
    }

    /// Cell count, saturating at `u32::MAX`.
    #[inline]
    pub const fn area(self) -> u32 {
        self.width().saturating_mul(self.height())
    }

    pub fn contains(self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.start.x && p.x <= r.end.x && p.y >= r.start.y && p.y <= r.end.y
    }

    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Overlap of the two rectangles, normalised; `None` if disjoint.
    pub fn intersection(self, other: Rect) -> Option<Self> {
        let a = self.normalized();
        let b = other.normalized();
        let x1 = a.start.x.max(b.start.x);
        let y1 = a.start.y.max(b.start.y);
        let x2 = a.end.x.min(b.end.x);
        let y2 = a.end.y.min(b.end.y);
        if x1 > x2 || y1 > y2 {
            return None;
        }
        Some(Self::from_coords(x1, y1, x2, y2))
    }

    /// Size of the normalised rectangle.
    pub const fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

fn narrow(v: i64) -> i32 {
    v.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_orders_both_axes() {
        let samples = [-3, 0, 7, 175, 219];
        for &x1 in &samples {
            for &y1 in &samples {
                for &x2 in &samples {
                    for &y2 in &samples {
                        let r = Rect::from_coords(x1, y1, x2, y2).normalized();
                        assert!(r.start.x <= r.end.x);
                        assert!(r.start.y <= r.end.y);
                    }
                }
            }
        }
    }

    #[test]
    fn normalized_keeps_extent() {
        let r = Rect::from_coords(10, 40, 2, 5);
        let n = r.normalized();
        assert_eq!(n, Rect::from_coords(2, 5, 10, 40));
        assert_eq!(r.width(), n.width());
        assert_eq!(r.height(), n.height());
        assert_eq!(n.area(), 9 * 36);
    }

    #[test]
    fn landscape_round_trips_every_point() {
        for o in [Orientation::Portrait, Orientation::Landscape] {
            let size = o.size();
            for y in 0..size.height as i32 {
                for x in 0..size.width as i32 {
                    let p = Point::new(x, y);
                    assert_eq!(o.to_logical(o.to_physical(p)), p);
                }
            }
        }
    }

    #[test]
    fn landscape_maps_onto_the_panel() {
        let o = Orientation::Landscape;
        assert_eq!(o.size(), Size::new(220, 176));
        assert_eq!(o.to_physical(Point::new(0, 0)), Point::new(0, 219));
        assert_eq!(o.to_physical(Point::new(219, 0)), Point::new(0, 0));
        assert_eq!(o.to_physical(Point::new(219, 175)), Point::new(175, 0));
        assert_eq!(o.to_physical(Point::new(0, 175)), Point::new(175, 219));
    }

    #[test]
    fn landscape_screen_covers_whole_panel() {
        let phys = Orientation::Landscape
            .rect_to_physical(Orientation::Landscape.screen())
            .normalized();
        assert_eq!(phys, Orientation::Portrait.screen());
    }

    #[test]
    fn crossing_corners_are_fixed_by_normalising_after_transform() {
        // y grows downward logically but upward physically in landscape
        let r = Rect::from_coords(10, 20, 30, 25);
        let phys = Orientation::Landscape.rect_to_physical(r);
        assert!(phys.start.y > phys.end.y);
        let n = phys.normalized();
        assert_eq!(n, Rect::from_coords(20, 189, 25, 209));
        assert_eq!(n.width(), r.height());
        assert_eq!(n.height(), r.width());
    }

    #[test]
    fn with_size_rejects_empty() {
        assert!(Rect::with_size(Point::zero(), Size::new(0, 5)).is_none());
        let r = Rect::with_size(Point::new(3, 4), Size::new(2, 3)).unwrap();
        assert_eq!(r, Rect::from_coords(3, 4, 4, 6));
    }

    #[test]
    fn intersection_clips_and_detects_disjoint() {
        let screen = Orientation::Portrait.screen();
        let r = Rect::from_coords(-5, 200, 10, 230);
        assert_eq!(
            r.intersection(screen),
            Some(Rect::from_coords(0, 200, 10, 219))
        );
        assert_eq!(Rect::from_coords(176, 0, 200, 5).intersection(screen), None);
        assert!(screen.contains_rect(Rect::from_coords(175, 219, 0, 0)));
    }

    #[test]
    fn huge_sizes_saturate_instead_of_wrapping() {
        let r = Rect::with_size(Point::new(-10, -10), Size::new(u32::MAX, 100_000)).unwrap();
        assert_eq!(r, Rect::from_coords(-10, -10, i32::MAX, 99_989));
        assert_eq!(r.area(), u32::MAX);

        let r = Rect::spanning(i32::MAX as i64 - 2, 0, 8, 13).unwrap();
        assert_eq!(r, Rect::from_coords(i32::MAX - 2, 0, i32::MAX, 12));
        assert_eq!(Rect::spanning(0, 0, u64::MAX, 0), None);

        let full = Rect::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(full.width(), u32::MAX);
        assert_eq!(
            full.intersection(Orientation::Portrait.screen()),
            Some(Orientation::Portrait.screen())
        );
    }

    #[test]
    fn from_wide_keeps_on_screen_cells() {
        let r = Rect::from_wide(-(1 << 40), 5, 1 << 40, 6);
        assert_eq!(r, Rect::from_coords(i32::MIN, 5, i32::MAX, 6));
        assert_eq!(
            r.intersection(Orientation::Portrait.screen()),
            Some(Rect::from_coords(0, 5, 175, 6))
        );
    }
}
