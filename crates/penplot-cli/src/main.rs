mod cli;
mod commands;

use clap::Parser;

use penplot_engine::logging::{init_logging, LoggingConfig};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone() });

    if let Err(err) = commands::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
