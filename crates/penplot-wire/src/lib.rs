//! Wire format for the pen-plotter instruction stream.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! tooling that only needs to read or write instruction strings, without
//! pulling in the interpreter, logging, or serialization.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | 14-bit signed value ⇄ 4-hex-digit wire form |
//! | [`command`] | `Opcode`, `Command` |
//! | [`error`] | `ErrorKind`, `ParseError` |
//! | [`stream`] | `Decoder`, `Frame`, `decode_stream` entry point |
//! | [`writer`] | `encode_commands` |
//!
//! # Quick start
//!
//! ```rust
//! use penplot_wire::{decode_stream, Command};
//!
//! let frames = decode_stream("F0C040644064").unwrap();
//! assert_eq!(frames[0].command, Command::Clear);
//! assert_eq!(frames[1].command, Command::MovePen(vec![(100, 100)]));
//! ```

pub mod codec;
pub mod command;
pub mod error;
pub mod stream;
pub mod writer;

pub use command::{Command, Opcode};
pub use error::{ErrorKind, ParseError};
pub use stream::{decode_stream, Decoder, Frame};
pub use writer::{encode_commands, encode_move};
