use crate::coords::Point;
use crate::paint::Color;

/// Everything the interpreter remembers between commands.
///
/// Two views of the pen are kept: the current one, which follows every
/// command even while the pen is outside the bounding square, and the last
/// one observed while inside. The gap between them decides which synthetic
/// commands are emitted when the pen comes back into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenState {
    /// Absolute position; may lie outside the bounding square.
    pub position: Point,
    pub pen_down: bool,
    /// Pen state as last set while inside the bounding square.
    pub last_visible_pen_down: bool,
    pub color: Color,
    /// Color as last set (or replayed) while inside the bounding square.
    pub last_visible_color: Color,
    /// The next move token opens a new trace line.
    pub begin_new_line: bool,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            position: Point::origin(),
            pen_down: false,
            last_visible_pen_down: false,
            color: Color::zero(),
            last_visible_color: Color::zero(),
            begin_new_line: true,
        }
    }
}

impl PenState {
    /// Returns to the baseline: origin, pen up, zero color.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
