//! CLI entry point for Peano curve export

use clap::Parser;
use peanotree::io::cli::{Cli, CurveProcessor};

fn main() -> peanotree::Result<()> {
    let cli = Cli::parse();
    let mut processor = CurveProcessor::new(cli);
    processor.process()
}
