use std::fmt::Write as _;

use crate::codec;
use crate::command::Command;
use crate::error::ErrorKind;

/// Renders commands back into an instruction string.
///
/// ```
/// use penplot_wire::{encode_commands, Command};
///
/// let hex = encode_commands(&[Command::Clear, Command::PenUpDown { down: true }]).unwrap();
/// assert_eq!(hex, "F0804001");
/// ```
pub fn encode_commands(commands: &[Command]) -> Result<String, ErrorKind> {
    let mut out = String::new();
    for command in commands {
        let params = command.params();
        let opcode = command.opcode();
        if !opcode.arity_ok(params.len()) {
            return Err(ErrorKind::Arity { opcode, found: params.len() });
        }

        push_byte(&mut out, opcode.code());
        for value in params {
            let _ = write!(out, "{:04X}", codec::encode_word(value)?);
        }
    }
    Ok(out)
}

fn push_byte(out: &mut String, byte: u8) {
    let _ = write!(out, "{byte:02X}");
}

/// Convenience for a single [`Opcode::MovePen`] command.
pub fn encode_move(offsets: &[(i32, i32)]) -> Result<String, ErrorKind> {
    encode_commands(&[Command::MovePen(offsets.to_vec())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Opcode;
    use crate::stream::decode_stream;

    #[test]
    fn encodes_each_command_kind() {
        let hex = encode_commands(&[
            Command::Clear,
            Command::SetColor { r: 0, g: 255, b: 0, a: 255 },
            Command::MovePen(vec![(0, 0)]),
        ])
        .unwrap();
        assert_eq!(hex, "F0A04000417F4000417FC040004000");
    }

    #[test]
    fn empty_move_is_rejected() {
        assert_eq!(
            encode_move(&[]),
            Err(ErrorKind::Arity { opcode: Opcode::MovePen, found: 0 })
        );
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert!(matches!(encode_move(&[(9000, 0)]), Err(ErrorKind::Range { value: 9000, .. })));
    }

    #[test]
    fn decoder_reads_writer_output() {
        let cmds = vec![
            Command::Clear,
            Command::PenUpDown { down: false },
            Command::MovePen(vec![(-8192, 8191), (12, -12)]),
        ];
        let hex = encode_commands(&cmds).unwrap();
        let decoded: Vec<Command> =
            decode_stream(&hex).unwrap().into_iter().map(|f| f.command).collect();
        assert_eq!(decoded, cmds);
    }
}
