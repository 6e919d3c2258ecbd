use super::{Point, Segment};

/// Axis-aligned integer rectangle described by its edges (top-left origin,
/// +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// The plotter's working area: `[-8192, 8191]` on both axes.
pub const BOUNDING_SQUARE: Rect = Rect::new(-8192, -8192, 8191, 8191);

impl Rect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A rectangle is empty unless `left < right` and `top < bottom`.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Closed containment: `[left, right] × [top, bottom]`.
    ///
    /// Points on any edge, including the right and bottom edges, are inside.
    /// An empty rectangle contains nothing.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        !self.is_empty()
            && p.x >= self.left
            && p.x <= self.right
            && p.y >= self.top
            && p.y <= self.bottom
    }

    #[inline]
    pub const fn corners(self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// The four edges in scan order: left (bottom→top), top (left→right),
    /// right (top→bottom), bottom (right→left).
    pub const fn edges(self) -> [Segment; 4] {
        let [top_left, top_right, bottom_right, bottom_left] = self.corners();
        [
            Segment::new(bottom_left, top_left),
            Segment::new(top_left, top_right),
            Segment::new(top_right, bottom_right),
            Segment::new(bottom_right, bottom_left),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(left: i32, top: i32, right: i32, bottom: i32) -> Rect { Rect::new(left, top, right, bottom) }
    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(0, 0, 5, 0).is_empty());
    }

    #[test]
    fn is_empty_inverted() {
        assert!(r(10, 0, 0, 10).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0, 0, 1, 1).is_empty());
        assert!(!BOUNDING_SQUARE.is_empty());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(p(5, 5)));
    }

    #[test]
    fn contains_all_corners_inclusive() {
        let rect = r(0, 0, 10, 10);
        for corner in rect.corners() {
            assert!(rect.contains(corner), "{corner:?} should be inside");
        }
    }

    #[test]
    fn contains_right_and_bottom_edges() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains(p(10, 4)));
        assert!(rect.contains(p(4, 10)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0, 0, 10, 10);
        assert!(!rect.contains(p(-1, 5)));
        assert!(!rect.contains(p(5, -1)));
        assert!(!rect.contains(p(11, 5)));
        assert!(!rect.contains(p(5, 11)));
    }

    #[test]
    fn degenerate_contains_nothing() {
        assert!(!r(3, 0, 3, 10).contains(p(3, 5)));
        assert!(!r(0, 3, 10, 3).contains(p(5, 3)));
    }

    #[test]
    fn bounding_square_limits() {
        assert!(BOUNDING_SQUARE.contains(p(-8192, -8192)));
        assert!(BOUNDING_SQUARE.contains(p(8191, 8191)));
        assert!(!BOUNDING_SQUARE.contains(p(8192, 0)));
        assert!(!BOUNDING_SQUARE.contains(p(0, -8193)));
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_scan_order() {
        let [left, top, right, bottom] = r(0, 0, 10, 10).edges();
        assert_eq!(left, Segment::new(p(0, 10), p(0, 0)));
        assert_eq!(top, Segment::new(p(0, 0), p(10, 0)));
        assert_eq!(right, Segment::new(p(10, 0), p(10, 10)));
        assert_eq!(bottom, Segment::new(p(10, 10), p(0, 10)));
    }
}
