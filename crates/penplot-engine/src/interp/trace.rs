use std::fmt::Write as _;

use crate::coords::Point;
use crate::paint::Color;

use super::keywords::{Keyword, Keywords};

const TERMINATOR: char = ';';

/// Text output of one `parse` call.
///
/// Every command occupies its own line; lines are separated (not followed)
/// by `\n` and end with `;`. Move lines are built incrementally so a single
/// move command can contribute many ` (x, y)` tokens to one line.
#[derive(Debug, Default)]
pub struct Trace {
    buf: String,
}

impl Trace {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    fn begin_line(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
    }

    pub fn clear(&mut self, words: &impl Keywords) {
        self.begin_line();
        self.buf.push_str(words.keyword(Keyword::Clear));
        self.buf.push(TERMINATOR);
    }

    pub fn pen(&mut self, words: &impl Keywords, down: bool) {
        let state = if down { Keyword::PenDown } else { Keyword::PenUp };
        self.begin_line();
        let _ = write!(self.buf, "{} {}", words.keyword(Keyword::Pen), words.keyword(state));
        self.buf.push(TERMINATOR);
    }

    pub fn color(&mut self, words: &impl Keywords, color: Color) {
        self.begin_line();
        let _ = write!(self.buf, "{} {color}", words.keyword(Keyword::SetColor));
        self.buf.push(TERMINATOR);
    }

    /// Appends a move token, opening a new move line first if asked to.
    pub fn move_to(&mut self, words: &impl Keywords, point: Point, new_line: bool) {
        if new_line {
            self.begin_line();
            self.buf.push_str(words.keyword(Keyword::Move));
        }
        let _ = write!(self.buf, " {point}");
    }

    /// Closes the current move line.
    #[inline]
    pub fn terminate(&mut self) {
        self.buf.push(TERMINATOR);
    }
}
