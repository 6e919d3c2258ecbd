//! Penplot engine crate.
//!
//! This crate owns the clipping geometry and the command interpreter that
//! turns a decoded instruction stream into a human-readable trace. The wire
//! format itself lives in `penplot-wire` and is re-exported here.
//!
//! ```rust
//! use penplot_engine::interp::{Interpreter, KeywordTable};
//!
//! let mut interp = Interpreter::new(KeywordTable::default());
//! let trace = interp.parse("F0804001C040644064").unwrap();
//! assert_eq!(trace, "CLR;\nPEN DOWN;\nMV (100, 100);");
//! ```

pub mod coords;
pub mod interp;
pub mod logging;
pub mod paint;

pub use penplot_wire as wire;
pub use penplot_wire::{Command, ParseError};
