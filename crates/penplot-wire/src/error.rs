use std::fmt;

use crate::command::Opcode;

/// What went wrong while encoding, decoding, or framing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The instruction string was empty.
    Empty,
    /// A numeric value fell outside `[min, max]`.
    Range { value: i32, min: i32, max: i32 },
    /// A unit of input was not valid hexadecimal (or was a lone trailing character).
    MalformedHex { token: String },
    /// A command was flushed with the wrong number of parameters.
    Arity { opcode: Opcode, found: usize },
    /// A byte was interpreted as a command code but names no command.
    UnknownCommand(u8),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Empty => write!(f, "empty instruction string"),
            ErrorKind::Range { value, min, max } => {
                write!(f, "value {value} is outside [{min}, {max}]")
            }
            ErrorKind::MalformedHex { token } => write!(f, "malformed hex {token:?}"),
            ErrorKind::Arity { opcode, found } => {
                write!(f, "{} expects {}, got {found}", opcode.name(), opcode.arity_hint())
            }
            ErrorKind::UnknownCommand(code) => write!(f, "unknown command code 0x{code:02X}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A failed parse of an instruction string.
///
/// Every failure, whatever its kind, is reported through this one type with
/// the offset at which it was detected. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 0-based offset into the input where the failure was detected.
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error in input data at offset {}: {}", self.offset, self.kind)
    }
}

// The kind is already part of the message, so it is not exposed as a source.
impl std::error::Error for ParseError {}
