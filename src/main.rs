mod config;
mod generator;
mod maze;
mod render;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;

use crate::config::GenConfig;

/// Generate a labyrinth and draw it to the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(default_value = "config.json")]
    config: PathBuf,
    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Print symbolic tile names instead of drawing tiles
    #[arg(long)]
    labels: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = GenConfig::load(&cli.config)?;
    tracing::info!(
        "[main] generating a {}x{} labyrinth, entry {:?}, destination {:?}",
        config.width,
        config.height,
        config.start,
        config.dest
    );
    let labyrinth = generator::generate(&config, cli.seed);

    let mut stdout = io::stdout().lock();
    if cli.labels {
        let grid = labyrinth.grid();
        for y in 0..grid.height() {
            let row = (0..grid.width())
                .map(|x| grid[(x, y)].tile_name())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(stdout, "{}", row)?;
        }
    } else {
        render::draw(&labyrinth, &mut stdout)?;
    }
    Ok(())
}
