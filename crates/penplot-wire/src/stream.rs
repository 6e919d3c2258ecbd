use crate::codec::{self, parse_hex_pair};
use crate::command::{Command, Opcode};
use crate::error::{ErrorKind, ParseError};

/// Characters per wire byte.
const BYTE_LENGTH: usize = 2;

// ── Frame ─────────────────────────────────────────────────────────────────

/// A decoded command together with where it started in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Offset of the command byte.
    pub offset: usize,
    pub command: Command,
}

// ── Decoder ───────────────────────────────────────────────────────────────

/// Splits an instruction string into command frames.
///
/// The input is consumed one wire byte (two hex characters) at a time. A
/// command byte closes the command being accumulated and opens a new one;
/// any other byte is half of a parameter and is paired with the next such
/// byte.
pub struct Decoder<'s> {
    src: &'s [u8],
    pos: usize,
    /// Command being accumulated and the offset of its command byte.
    open: Option<(Opcode, usize)>,
    params: Vec<i32>,
    /// High byte of a parameter still waiting for its low byte.
    pending_hi: Option<u8>,
}

impl<'s> Decoder<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
            open: None,
            params: Vec::new(),
            pending_hi: None,
        }
    }

    pub fn decode(mut self) -> Result<Vec<Frame>, ParseError> {
        if self.src.is_empty() {
            return Err(ParseError::new(ErrorKind::Empty, 0));
        }

        let mut frames = Vec::new();
        while self.pos < self.src.len() {
            let byte = self.next_byte()?;
            match Opcode::from_code(byte) {
                Some(opcode) => {
                    if let Some(frame) = self.flush()? {
                        frames.push(frame);
                    }
                    // Parameter bytes seen before the first command are dropped here.
                    self.params.clear();
                    self.open = Some((opcode, self.pos));
                }
                None => match self.pending_hi.take() {
                    None => self.pending_hi = Some(byte),
                    Some(hi) => {
                        let value = codec::decode_bytes(hi, byte)
                            .map_err(|kind| ParseError::new(kind, self.pos))?;
                        self.params.push(value);
                    }
                },
            }
            self.pos += BYTE_LENGTH;
        }

        if let Some(frame) = self.flush()? {
            frames.push(frame);
        }
        Ok(frames)
    }

    /// Reads the two-character byte at `pos` without advancing.
    fn next_byte(&self) -> Result<u8, ParseError> {
        let end = self.pos + BYTE_LENGTH;
        let unit = self.src.get(self.pos..end).unwrap_or(&self.src[self.pos..]);
        parse_hex_pair(unit).ok_or_else(|| {
            let token = String::from_utf8_lossy(unit).into_owned();
            ParseError::new(ErrorKind::MalformedHex { token }, self.pos)
        })
    }

    /// Closes the open command, validating its arity at the current offset.
    fn flush(&mut self) -> Result<Option<Frame>, ParseError> {
        let Some((opcode, offset)) = self.open.take() else {
            return Ok(None);
        };
        let command = Command::from_parts(opcode, &self.params)
            .map_err(|kind| ParseError::new(kind, self.pos))?;
        Ok(Some(Frame { offset, command }))
    }
}

/// Decodes a complete instruction string into command frames.
///
/// ```
/// use penplot_wire::{decode_stream, Command};
///
/// let frames = decode_stream("F0804001").unwrap();
/// assert_eq!(frames[0].command, Command::Clear);
/// assert_eq!(frames[1].command, Command::PenUpDown { down: true });
/// assert_eq!(frames[1].offset, 2);
/// ```
pub fn decode_stream(src: &str) -> Result<Vec<Frame>, ParseError> {
    Decoder::new(src).decode()
}
