//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Orchestrating the fetch / classify / render pipeline
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    args.run()
}
