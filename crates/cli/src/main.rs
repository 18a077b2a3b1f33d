mod cli;
mod config;
mod fill;
mod logging;
mod lookups;
mod preview;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = if cli.verbose {
        true
    } else {
        logging::env_flag()
    };
    logging::init(verbose);
    let config = config::load_config(&cli.config)?;
    match cli.command {
        Command::Fill(args) => fill::run(args, &config),
        Command::Preview(args) => preview::run(args, &config),
        Command::Lookups(args) => lookups::run(args, &config),
    }
}
