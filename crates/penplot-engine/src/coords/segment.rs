use super::{Point, Rect};

/// Directed line segment between two integer points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// `dy / dx`, or `+∞` for a vertical segment.
    #[inline]
    pub fn slope(&self) -> f32 {
        if self.is_vertical() {
            f32::INFINITY
        } else {
            (self.end.y - self.start.y) as f32 / (self.end.x - self.start.x) as f32
        }
    }

    /// The `b` in `y = mx + b`, or NaN for a vertical segment (even at `x = 0`).
    #[inline]
    pub fn y_intercept(&self) -> f32 {
        if self.is_vertical() {
            f32::NAN
        } else {
            self.start.y as f32 - self.slope() * self.start.x as f32
        }
    }

    /// Whether `p` lies inside this segment's bounding box (edges included).
    #[inline]
    pub fn bounds_contain(&self, p: Point) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }

    /// The point where this segment crosses `other`, rounded to integers.
    ///
    /// Parallel segments never intersect, even when they are colinear and
    /// overlap. Two vertical segments are always parallel.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let point = match (self.is_vertical(), other.is_vertical()) {
            (true, true) => return None,
            (true, false) => other.at_x(self.start.x),
            (false, true) => self.at_x(other.start.x),
            (false, false) => {
                let (m1, m2) = (self.slope(), other.slope());
                if m1 == m2 {
                    return None;
                }
                let (b1, b2) = (self.y_intercept(), other.y_intercept());
                let x = (b2 - b1) / (m1 - m2);
                let y = m1 * x + b1;
                Point::new(round_half_up(x), round_half_up(y))
            }
        };

        (self.bounds_contain(point) && other.bounds_contain(point)).then_some(point)
    }

    /// Point on this (non-vertical) segment's line at `x`.
    fn at_x(&self, x: i32) -> Point {
        let y = self.slope() * x as f32 + self.y_intercept();
        Point::new(x, round_half_up(y))
    }

    /// The part of this segment that lies within `rect`.
    ///
    /// - Both endpoints inside: the segment itself.
    /// - One endpoint inside: from that endpoint to the boundary crossing.
    ///   An inside endpoint lying on an edge is not counted as the crossing
    ///   unless no other crossing exists.
    /// - Both outside, crossing twice: between the two crossings, ordered by
    ///   the edge scan (left, top, right, bottom), not by direction of travel.
    /// - Otherwise (no crossing, or a single tangential touch): `None`.
    pub fn clip(&self, rect: Rect) -> Option<Segment> {
        let start_inside = rect.contains(self.start);
        let end_inside = rect.contains(self.end);
        if start_inside && end_inside {
            return Some(*self);
        }

        let [first, second] = self.crossings(rect);
        if start_inside {
            let exit = other_than(self.start, first?, second);
            return Some(Segment::new(self.start, exit));
        }
        if end_inside {
            let entry = other_than(self.end, first?, second);
            return Some(Segment::new(entry, self.end));
        }
        match (first, second) {
            (Some(p1), Some(p2)) => Some(Segment::new(p1, p2)),
            _ => None,
        }
    }

    /// Up to two distinct points where this segment meets the edges of
    /// `rect`, in edge scan order.
    fn crossings(&self, rect: Rect) -> [Option<Point>; 2] {
        // A convex rectangle meets a finite segment in at most two points.
        let mut first: Option<Point> = None;
        for edge in rect.edges() {
            let Some(hit) = self.intersection(&edge) else { continue };
            match first {
                None => first = Some(hit),
                // Crossing exactly at a corner shows up on both edges.
                Some(seen) if seen == hit => {}
                Some(_) => return [first, Some(hit)],
            }
        }
        [first, None]
    }
}

/// `first`, unless it is `endpoint` and a second crossing exists.
#[inline]
fn other_than(endpoint: Point, first: Point, second: Option<Point>) -> Point {
    match second {
        Some(p) if first == endpoint => p,
        _ => first,
    }
}

/// Rounds to the nearest integer, halves toward `+∞`.
#[inline]
fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }
    fn s(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment { Segment::new(p(x1, y1), p(x2, y2)) }
    fn square() -> Rect { Rect::new(0, 0, 10, 10) }

    // ── slope / intercept ─────────────────────────────────────────────────

    #[test]
    fn slope_of_diagonal() {
        assert_eq!(s(0, 0, 4, 2).slope(), 0.5);
        assert_eq!(s(0, 3, 4, 1).y_intercept(), 3.0);
    }

    #[test]
    fn vertical_sentinels() {
        let v = s(0, 0, 0, 9);
        assert!(v.is_vertical());
        assert_eq!(v.slope(), f32::INFINITY);
        assert!(v.y_intercept().is_nan());
    }

    #[test]
    fn rounding_halves_go_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    // ── intersection ──────────────────────────────────────────────────────

    #[test]
    fn crossing_diagonals() {
        assert_eq!(s(0, 0, 10, 10).intersection(&s(0, 10, 10, 0)), Some(p(5, 5)));
    }

    #[test]
    fn vertical_with_diagonal() {
        assert_eq!(s(5, 0, 5, 10).intersection(&s(0, 0, 10, 10)), Some(p(5, 5)));
        assert_eq!(s(0, 0, 10, 10).intersection(&s(5, 0, 5, 10)), Some(p(5, 5)));
    }

    #[test]
    fn vertical_crossing_is_rounded() {
        assert_eq!(s(0, 0, 3, 1).intersection(&s(1, 0, 1, 5)), Some(p(1, 0)));
    }

    #[test]
    fn lines_cross_outside_the_segments() {
        assert_eq!(s(0, 0, 1, 1).intersection(&s(10, 0, 9, 1)), None);
    }

    #[test]
    fn vertical_misses_short_segment() {
        assert_eq!(s(0, 0, 4, 4).intersection(&s(8, 0, 8, 10)), None);
    }

    #[test]
    fn horizontal_parallels_never_meet() {
        assert_eq!(s(0, 0, 10, 0).intersection(&s(0, 5, 10, 5)), None);
    }

    #[test]
    fn colinear_overlap_is_not_an_intersection() {
        assert_eq!(s(0, 0, 10, 0).intersection(&s(5, 0, 15, 0)), None);
        assert_eq!(s(0, 0, 5, 5).intersection(&s(2, 2, 8, 8)), None);
    }

    #[test]
    fn colinear_verticals_never_meet() {
        assert_eq!(s(3, 0, 3, 10).intersection(&s(3, 5, 3, 15)), None);
    }

    // ── clip ──────────────────────────────────────────────────────────────

    #[test]
    fn clip_inside_returns_copy() {
        let seg = s(1, 1, 9, 9);
        assert_eq!(seg.clip(square()), Some(seg));
    }

    #[test]
    fn clip_on_boundary_is_inside() {
        let seg = s(0, 0, 10, 10);
        assert_eq!(seg.clip(square()), Some(seg));
    }

    #[test]
    fn clip_outside_returns_none() {
        assert_eq!(s(20, 20, 30, 25).clip(square()), None);
    }

    #[test]
    fn clip_exit_keeps_inside_start() {
        assert_eq!(s(5, 5, 15, 5).clip(square()), Some(s(5, 5, 10, 5)));
    }

    #[test]
    fn clip_entry_keeps_inside_end() {
        assert_eq!(s(5, -7, 5, 5).clip(square()), Some(s(5, 0, 5, 5)));
    }

    #[test]
    fn clip_pass_through_returns_both_crossings() {
        assert_eq!(s(-5, 5, 15, 5).clip(square()), Some(s(0, 5, 10, 5)));
    }

    #[test]
    fn clip_pass_through_uses_edge_scan_order() {
        // Travelling right-to-left still yields the left-edge crossing first.
        assert_eq!(s(15, 5, -5, 5).clip(square()), Some(s(0, 5, 10, 5)));
    }

    #[test]
    fn clip_exit_from_an_edge_reaches_the_far_crossing() {
        // Start on the left edge, leaving through the top.
        let seg = s(0, 4, 6, -2);
        assert_eq!(seg.clip(square()), Some(s(0, 4, 4, 0)));
        let back = s(6, -2, 0, 4);
        assert_eq!(back.clip(square()), Some(s(4, 0, 0, 4)));
    }

    #[test]
    fn clip_exit_straight_off_an_edge_is_a_point() {
        assert_eq!(s(10, 5, 15, 5).clip(square()), Some(s(10, 5, 10, 5)));
    }

    #[test]
    fn clip_through_corners_reports_distinct_points() {
        assert_eq!(s(-5, -5, 15, 15).clip(square()), Some(s(0, 0, 10, 10)));
    }

    #[test]
    fn clip_tangent_corner_touch_is_dropped() {
        assert_eq!(s(-5, 5, 5, -5).clip(square()), None);
    }

    #[test]
    fn clip_against_bounding_square() {
        use crate::coords::BOUNDING_SQUARE;
        assert_eq!(
            s(4000, 0, 10000, 0).clip(BOUNDING_SQUARE),
            Some(s(4000, 0, 8191, 0))
        );
        assert_eq!(
            s(10000, 0, 4000, 0).clip(BOUNDING_SQUARE),
            Some(s(8191, 0, 4000, 0))
        );
        assert_eq!(
            s(-8192, -8000, -7992, -8300).clip(BOUNDING_SQUARE),
            Some(s(-8192, -8000, -8064, -8192))
        );
        assert_eq!(
            s(-7992, -8300, -8192, -8000).clip(BOUNDING_SQUARE),
            Some(s(-8064, -8192, -8192, -8000))
        );
    }
}
