//! Pen color.

mod color;

pub use color::Color;
