use crate::error::ErrorKind;

// ── Opcode ────────────────────────────────────────────────────────────────

/// Reserved command bytes of the instruction stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Opcode {
    Clear,
    PenUpDown,
    SetColor,
    MovePen,
}

impl Opcode {
    pub const ALL: [Opcode; 4] = [Opcode::Clear, Opcode::PenUpDown, Opcode::SetColor, Opcode::MovePen];

    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Opcode::Clear => 0xF0,
            Opcode::PenUpDown => 0x80,
            Opcode::SetColor => 0xA0,
            Opcode::MovePen => 0xC0,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Opcode> {
        match code {
            0xF0 => Some(Opcode::Clear),
            0x80 => Some(Opcode::PenUpDown),
            0xA0 => Some(Opcode::SetColor),
            0xC0 => Some(Opcode::MovePen),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Clear => "clear",
            Opcode::PenUpDown => "pen up/down",
            Opcode::SetColor => "set color",
            Opcode::MovePen => "move pen",
        }
    }

    /// Whether `count` parameters is a valid parameter list length.
    pub const fn arity_ok(self, count: usize) -> bool {
        match self {
            Opcode::Clear => count == 0,
            Opcode::PenUpDown => count == 1,
            Opcode::SetColor => count == 4,
            Opcode::MovePen => count != 0 && count % 2 == 0,
        }
    }

    pub(crate) const fn arity_hint(self) -> &'static str {
        match self {
            Opcode::Clear => "no parameters",
            Opcode::PenUpDown => "1 parameter",
            Opcode::SetColor => "4 parameters",
            Opcode::MovePen => "a non-zero, even number of parameters",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = ErrorKind;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Opcode::from_code(code).ok_or(ErrorKind::UnknownCommand(code))
    }
}

// ── Command ───────────────────────────────────────────────────────────────

/// A fully-framed plotter command with validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Clear,
    PenUpDown { down: bool },
    SetColor { r: i32, g: i32, b: i32, a: i32 },
    /// Relative `(dx, dy)` offsets, applied cumulatively.
    MovePen(Vec<(i32, i32)>),
}

impl Command {
    /// Builds a command from its opcode and flat parameter list.
    pub fn from_parts(opcode: Opcode, params: &[i32]) -> Result<Command, ErrorKind> {
        if !opcode.arity_ok(params.len()) {
            return Err(ErrorKind::Arity { opcode, found: params.len() });
        }

        Ok(match (opcode, params) {
            (Opcode::Clear, _) => Command::Clear,
            (Opcode::PenUpDown, [flag]) => Command::PenUpDown { down: *flag != 0 },
            (Opcode::SetColor, &[r, g, b, a]) => Command::SetColor { r, g, b, a },
            (Opcode::MovePen, _) => {
                Command::MovePen(params.chunks_exact(2).map(|p| (p[0], p[1])).collect())
            }
            // Lengths were checked by `arity_ok` above.
            (opcode, params) => return Err(ErrorKind::Arity { opcode, found: params.len() }),
        })
    }

    #[inline]
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Clear => Opcode::Clear,
            Command::PenUpDown { .. } => Opcode::PenUpDown,
            Command::SetColor { .. } => Opcode::SetColor,
            Command::MovePen(_) => Opcode::MovePen,
        }
    }

    /// The flat parameter list as it appears on the wire.
    pub fn params(&self) -> Vec<i32> {
        match self {
            Command::Clear => Vec::new(),
            Command::PenUpDown { down } => vec![*down as i32],
            Command::SetColor { r, g, b, a } => vec![*r, *g, *b, *a],
            Command::MovePen(offsets) => offsets.iter().flat_map(|&(dx, dy)| [dx, dy]).collect(),
        }
    }
}
