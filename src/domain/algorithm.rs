//! Algorithm enum for selecting how a generation step is computed.
//!
//! Both variants produce identical boards; they differ only in whether
//! rows are evaluated on one thread or spread over the rayon pool.

use super::Board;

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, serial processing
    #[default]
    Serial,
    /// Cell-by-cell, rows evaluated in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the generation after `board`
    pub fn step(&self, board: &Board) -> Board {
        match self {
            Algorithm::Serial => board.next_generation(),
            Algorithm::Parallel => board.next_generation_parallel(),
        }
    }
}
