//! CLI entry point for the glyph field renderer

use clap::Parser;
use glyphfield::io::cli::{Cli, FrameProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> glyphfield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = FrameProcessor::new(cli);
    processor.process()
}
