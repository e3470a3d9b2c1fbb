use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trek lattice walk simulator.
#[derive(Parser)]
#[command(
    name = "trek",
    version,
    about = "Markov-driven walks on the integer lattice"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a walk and write the resulting path.
    Walk(WalkArgs),
    /// Print a matrix file and check whether it is a valid transition matrix.
    Inspect(InspectArgs),
}

/// Arguments for the `walk` subcommand.
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the transition matrix file from config.
    #[arg(short, long)]
    pub matrix: Option<PathBuf>,

    /// Override the output path from config (`.txt` or `.dat`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of steps from config.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub steps: Option<i64>,

    /// Override the strategy from config (random, spiral, breadcrumb or 0/1/2).
    #[arg(long)]
    pub strategy: Option<String>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the matrix text file.
    pub matrix: PathBuf,
}
