//! CLI entry point for the enumeration tool

use clap::Parser;
use itergen::io::cli::Cli;

fn main() -> itergen::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
