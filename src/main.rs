//! CLI entry point for the brick mosaic planner

use brickmosaic::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> brickmosaic::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run()
}
