//! cell_life - prints successive Game of Life generations to the console.

use std::io;

use anyhow::{Context, Result};
use cell_life::{Simulation, cli::Cli, rendering};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only boards
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[instrument(skip(cli), fields(iterations = cli.iterations))]
fn run(cli: &Cli) -> Result<()> {
    let board = cli
        .initial_board()
        .context("failed to build the initial board")?;
    let (rows, cols) = board.dimensions();
    let algorithm = cli.algorithm();
    info!(rows, cols, algorithm = algorithm.name(), "starting simulation");

    let simulation = Simulation::new(board, cli.iterations).with_algorithm(algorithm);
    let written = rendering::write_generations(&mut io::stdout().lock(), simulation)
        .context("failed to write generations")?;

    info!(written, "simulation finished");
    Ok(())
}
