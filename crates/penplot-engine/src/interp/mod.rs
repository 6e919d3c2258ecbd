//! Stateful command interpreter.
//!
//! [`Interpreter`] consumes decoded commands, tracks pen position, pen state,
//! and color in a [`PenState`], clips every move against the bounding square,
//! and writes the result as a [`Trace`] using words supplied by a
//! [`Keywords`] provider.

mod interpreter;
mod keywords;
mod state;
mod trace;

pub use interpreter::Interpreter;
pub use keywords::{Keyword, KeywordTable, Keywords};
pub use state::PenState;
pub use trace::Trace;
