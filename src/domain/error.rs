use thiserror::Error;

/// All kinds of errors raised by the automaton.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LifeError {
    /// The board has no rows, or its first row has no columns.
    #[error("Board must have a positive number of rows and columns, got {rows}x{cols}.")]
    InvalidBoard { rows: usize, cols: usize },
    /// A row differs in length from the first row.
    #[error("Board must be rectangular: row {row} has {found} columns, expected {expected}.")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value is neither 0 (dead) nor 1 (alive).
    #[error("State of cell ({row}, {col}) must be 0 (dead) or 1 (alive), got {value}.")]
    InvalidCellState { row: usize, col: usize, value: i32 },
    /// A pattern placed at an offset spills past the board edge.
    #[error("Pattern {name} ({height}x{width}) does not fit a {rows}x{cols} board at ({row}, {col}).")]
    PatternOutOfBounds {
        name: &'static str,
        width: usize,
        height: usize,
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
    },
    /// Random fill density must be a probability.
    #[error("Density must be between 0 and 1, got {0}.")]
    InvalidDensity(f64),
}

impl LifeError {
    /// True for the invalid-board family (empty or non-rectangular).
    pub const fn is_invalid_board(&self) -> bool {
        matches!(self, LifeError::InvalidBoard { .. } | LifeError::RaggedBoard { .. })
    }
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
