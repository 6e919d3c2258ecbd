use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "penplot",
    version,
    about = "Decode pen-plotter instruction strings into readable traces"
)]
pub struct Cli {
    /// JSON file overriding the trace keywords.
    #[arg(long, global = true, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Log filter in env_logger syntax (falls back to RUST_LOG).
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the trace of an instruction string. Reads stdin line by line when HEX is omitted.
    Decode {
        hex: Option<String>,
    },
    /// Print the four-digit wire form of each value.
    Encode {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_with_inline_hex() {
        let cli = Cli::try_parse_from(["penplot", "decode", "F0"]).unwrap();
        assert!(matches!(cli.command, Commands::Decode { hex: Some(ref h) } if h == "F0"));
        assert!(cli.keywords.is_none());
    }

    #[test]
    fn decode_without_hex_reads_stdin() {
        let cli = Cli::try_parse_from(["penplot", "decode"]).unwrap();
        assert!(matches!(cli.command, Commands::Decode { hex: None }));
    }

    #[test]
    fn encode_accepts_negative_values() {
        let cli = Cli::try_parse_from(["penplot", "encode", "0", "-8192", "8191"]).unwrap();
        match cli.command {
            Commands::Encode { values } => assert_eq!(values, vec![0, -8192, 8191]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn encode_requires_a_value() {
        assert!(Cli::try_parse_from(["penplot", "encode"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "penplot", "decode", "F0", "--keywords", "fr.json", "--log", "debug",
        ])
        .unwrap();
        assert_eq!(cli.keywords, Some(PathBuf::from("fr.json")));
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }
}
