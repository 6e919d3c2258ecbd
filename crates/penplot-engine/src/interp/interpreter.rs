use penplot_wire::{decode_stream, Command, ParseError};

use crate::coords::{Point, Segment, BOUNDING_SQUARE};
use crate::paint::Color;

use super::keywords::Keywords;
use super::state::PenState;
use super::trace::Trace;

/// Turns instruction strings into human-readable traces.
///
/// Pen and color commands are only traced while the pen is inside the
/// bounding square. Moves are clipped to the square; where a path leaves or
/// re-enters it, synthetic pen and color commands keep the trace consistent
/// with what a plotter confined to the square would draw.
///
/// State persists across calls to [`parse`](Self::parse) and is only reset
/// by a clear command (or [`reset`](Self::reset)).
pub struct Interpreter<K> {
    keywords: K,
    state: PenState,
}

impl<K: Keywords> Interpreter<K> {
    pub fn new(keywords: K) -> Self {
        Self::with_state(keywords, PenState::default())
    }

    /// Starts from an explicit state rather than the baseline.
    pub fn with_state(keywords: K, state: PenState) -> Self {
        Self { keywords, state }
    }

    #[inline]
    pub fn state(&self) -> &PenState {
        &self.state
    }

    /// Returns to the baseline state without producing any output.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Decodes `data` and returns the trace of every command in it.
    ///
    /// The whole string is decoded before anything runs, so on error the
    /// state is left exactly as it was.
    pub fn parse(&mut self, data: &str) -> Result<String, ParseError> {
        let frames = decode_stream(data)?;
        log::debug!("decoded {} command(s) from {} characters", frames.len(), data.len());

        let mut trace = Trace::new();
        for frame in &frames {
            log::trace!("offset {}: {:?}", frame.offset, frame.command);
            self.execute(&mut trace, &frame.command);
        }
        Ok(trace.into_string())
    }

    /// Runs already-decoded commands and returns their trace.
    pub fn run(&mut self, commands: &[Command]) -> String {
        let mut trace = Trace::new();
        for command in commands {
            self.execute(&mut trace, command);
        }
        trace.into_string()
    }

    fn execute(&mut self, trace: &mut Trace, command: &Command) {
        match command {
            Command::Clear => self.clear(trace),
            Command::PenUpDown { down } => self.pen(trace, *down, false),
            Command::SetColor { r, g, b, a } => self.color(trace, Color::new(*r, *g, *b, *a), false),
            Command::MovePen(offsets) => self.move_pen(trace, offsets),
        }
    }

    #[inline]
    fn visible(&self) -> bool {
        BOUNDING_SQUARE.contains(self.state.position)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn clear(&mut self, trace: &mut Trace) {
        self.state.reset();
        trace.clear(&self.keywords);
    }

    /// `force` emits the command even when the pen is outside the square.
    fn pen(&mut self, trace: &mut Trace, down: bool, force: bool) {
        self.state.pen_down = down;
        let visible = self.visible();
        if visible {
            self.state.last_visible_pen_down = down;
        }

        if visible || force {
            // Color changes made out of view are replayed just before the
            // pen command that makes them matter.
            if self.state.color != self.state.last_visible_color {
                let color = self.state.color;
                self.state.last_visible_color = color;
                log::debug!("replaying deferred color {color}");
                self.color(trace, color, true);
            }
            trace.pen(&self.keywords, down);
        }
        self.state.begin_new_line = true;
    }

    /// `force` emits the command even when the pen is outside the square.
    fn color(&mut self, trace: &mut Trace, color: Color, force: bool) {
        self.state.color = color;
        let visible = self.visible();
        if visible {
            self.state.last_visible_color = color;
        }
        if visible || force {
            trace.color(&self.keywords, color);
        }
        self.state.begin_new_line = true;
    }

    fn move_pen(&mut self, trace: &mut Trace, offsets: &[(i32, i32)]) {
        let mut needs_terminator = false;

        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            let is_last = i + 1 == offsets.len();
            let from = self.state.position;
            self.state.position = from.offset(dx, dy);

            // With the pen up only the final position is worth reporting.
            if !self.state.pen_down && !is_last {
                continue;
            }

            let segment = Segment::new(from, self.state.position);
            let Some(clipped) = segment.clip(BOUNDING_SQUARE) else {
                log::trace!("{segment:?} misses the bounding square");
                continue;
            };

            let start_kept = clipped.start == segment.start;
            let end_kept = clipped.end == segment.end;
            needs_terminator = end_kept;

            if start_kept && end_kept {
                self.move_token(trace, segment.end);
                continue;
            }

            if !start_kept {
                // Entering the square.
                self.move_token(trace, clipped.start);
                if self.state.last_visible_pen_down || self.state.pen_down {
                    trace.terminate();
                    log::debug!("pen re-enters at {}; putting it down", clipped.start);
                    self.pen(trace, true, true);
                }
            }

            self.move_token(trace, clipped.end);

            if !end_kept {
                // Leaving the square.
                trace.terminate();
                log::debug!("pen leaves at {}; lifting it", clipped.end);
                self.pen(trace, false, true);
            }
        }

        if needs_terminator {
            trace.terminate();
        }
        self.state.begin_new_line = true;
    }

    fn move_token(&mut self, trace: &mut Trace, point: Point) {
        trace.move_to(&self.keywords, point, self.state.begin_new_line);
        self.state.begin_new_line = false;
    }
}
