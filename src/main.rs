//! IDGen command line entry point.
//!
//! Loads `.env`, parses flags and prints identifiers to stdout.

use clap::Parser;
use idgen::cli::Cli;
use idgen::run;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    run(&cli)
}
