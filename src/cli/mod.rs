//! Command-line interface wiring for the `barforge` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! per-command submodules.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

pub mod common;
pub mod encode;
pub mod list;
pub mod utils;

/// Parsed CLI entrypoint for the `barforge` binary.
#[derive(Parser, Debug)]
#[command(name = "barforge", version, about = "Barcode symbol encoder")]
pub struct Cli {
    /// Log encoder decisions to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode data into a symbol and print it.
    Encode(encode::EncodeArgs),
    /// List known symbologies and their capabilities.
    List(list::ListArgs),
}

/// Install the stderr subscriber. Warnings only unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::List(args) => list::handle(args),
    }
}
