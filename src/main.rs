//! CLI entry point for headless puzzle play and image generation

use clap::Parser;
use jigsnap::io::cli::{Cli, run};
use jigsnap::io::logging::init_logging;

fn main() -> jigsnap::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    run(&cli)
}
