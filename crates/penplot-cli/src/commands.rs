use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use penplot_engine::interp::{Interpreter, Keyword, KeywordTable, Keywords};
use penplot_wire::codec;

use crate::cli::{Cli, Commands};

const ALL_KEYWORDS: [Keyword; 6] = [
    Keyword::Clear,
    Keyword::Pen,
    Keyword::PenUp,
    Keyword::PenDown,
    Keyword::SetColor,
    Keyword::Move,
];

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Decode { hex } => {
            let keywords = match cli.keywords.as_deref() {
                Some(path) => load_keywords(path)?,
                None => KeywordTable::default(),
            };
            let mut interp = Interpreter::new(keywords);
            match hex {
                Some(hex) => decode_line(&mut interp, hex.trim(), &mut out),
                None => {
                    let stdin = io::stdin();
                    let lines = decode_lines(&mut interp, stdin.lock(), &mut out)?;
                    if lines == 0 {
                        bail!("no instruction strings on stdin");
                    }
                    Ok(())
                }
            }
        }
        Commands::Encode { values } => encode_values(&values, &mut out),
    }
}

fn load_keywords(path: &Path) -> Result<KeywordTable> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("reading keyword table {}", path.display()))?;
    let table = KeywordTable::from_json(&src)
        .with_context(|| format!("parsing keyword table {}", path.display()))?;

    for key in ALL_KEYWORDS {
        if table.keyword(key).is_empty() {
            log::warn!("keyword {key:?} is empty in {}", path.display());
        }
    }
    log::debug!("loaded keyword table from {}", path.display());
    Ok(table)
}

fn decode_line<K: Keywords>(
    interp: &mut Interpreter<K>,
    hex: &str,
    out: &mut impl Write,
) -> Result<()> {
    let trace = interp.parse(hex)?;
    if !trace.is_empty() {
        writeln!(out, "{trace}")?;
    }
    Ok(())
}

/// Parses every non-blank line with the same interpreter so state carries
/// over. Returns the number of lines parsed.
fn decode_lines<K: Keywords>(
    interp: &mut Interpreter<K>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<usize> {
    let mut parsed = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading stdin")?;
        let hex = line.trim();
        if hex.is_empty() {
            continue;
        }
        decode_line(interp, hex, out).with_context(|| format!("line {}", index + 1))?;
        parsed += 1;
    }
    Ok(parsed)
}

fn encode_values(values: &[i32], out: &mut impl Write) -> Result<()> {
    for &value in values {
        let word = codec::encode(value).with_context(|| format!("encoding {value}"))?;
        writeln!(out, "{word}")?;
    }
    Ok(())
}
