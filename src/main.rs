//! `trek` command-line entry point: Markov-driven walks on the integer lattice.

mod cli;
mod config;
mod convert;
mod inspect_cmd;
mod logging;
mod walk_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(version = env!("CARGO_PKG_VERSION"), "trek starting");

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Walk(args) => walk_cmd::run(args),
        Command::Inspect(args) => inspect_cmd::run(args),
    }
}
