use core::fmt;

/// Pen color as four integer channels, exactly as received on the wire.
///
/// Channels are not clamped or normalised; any decoded parameter value is
/// carried through to the trace unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl Color {
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// All channels zero. This is the baseline color after a clear.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Formats as the trace parameter list `r, g, b, a`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}
