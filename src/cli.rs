//! Command-line interface for cell_life.

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{Algorithm, Board, Pattern, Result, presets};

/// Side length used for random boards when --rows/--cols are not given
pub const DEFAULT_RANDOM_SIZE: usize = 10;

/// Conway's Game of Life on a fixed-size board, printed to the console
#[derive(Parser, Debug)]
#[command(name = "cell_life")]
#[command(about = "Conway's Game of Life on a fixed-size board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of generations to compute after the initial board
    #[arg(short = 'n', long, default_value_t = 5)]
    pub iterations: usize,

    /// Starting pattern (ignored with --random)
    #[arg(short, long, value_enum, default_value_t = PatternName::Demo)]
    pub pattern: PatternName,

    /// Board height; defaults to the pattern's framed size
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board width; defaults to the pattern's framed size
    #[arg(long)]
    pub cols: Option<usize>,

    /// Fill the board randomly instead of using a pattern
    #[arg(long)]
    pub random: bool,

    /// Probability of a cell starting alive with --random
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for reproducible random boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute each generation with rows spread over a thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Preset names accepted by --pattern
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternName {
    Demo,
    Blinker,
    Toad,
    Beacon,
    Block,
    Glider,
}

impl PatternName {
    pub fn pattern(self) -> Pattern {
        match self {
            PatternName::Demo => presets::demo(),
            PatternName::Blinker => presets::blinker(),
            PatternName::Toad => presets::toad(),
            PatternName::Beacon => presets::beacon(),
            PatternName::Block => presets::block(),
            PatternName::Glider => presets::glider(),
        }
    }
}

impl Cli {
    /// Build the starting board described by the arguments
    pub fn initial_board(&self) -> Result<Board> {
        if self.random {
            let rows = self.rows.unwrap_or(DEFAULT_RANDOM_SIZE);
            let cols = self.cols.unwrap_or(DEFAULT_RANDOM_SIZE);
            return match self.seed {
                Some(seed) => Board::random(rows, cols, self.density, &mut StdRng::seed_from_u64(seed)),
                None => Board::random(rows, cols, self.density, &mut rand::rng()),
            };
        }

        let pattern = self.pattern.pattern();
        match (self.rows, self.cols) {
            (None, None) => pattern.framed(),
            (rows, cols) => pattern.centered(
                rows.unwrap_or(pattern.height + 2),
                cols.unwrap_or(pattern.width + 2),
            ),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        if self.parallel { Algorithm::Parallel } else { Algorithm::Serial }
    }
}
