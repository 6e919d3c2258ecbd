//! Integer geometry for the plotter's working area.
//!
//! Canonical space:
//! - Plotter units, integer coordinates
//! - Origin at the centre of the bounding square
//! - +X right, +Y down
//!
//! Containment is closed on every edge; see [`Rect::contains`].

mod point;
mod rect;
mod segment;

pub use point::Point;
pub use rect::{Rect, BOUNDING_SQUARE};
pub use segment::Segment;
