//! CLI entry point for building a tile grid and printing its layout

use clap::Parser;
use tilegrid::io::cli::{Cli, GridRenderer};

fn main() -> tilegrid::Result<()> {
    let cli = Cli::parse();
    GridRenderer::new(cli).run()
}
