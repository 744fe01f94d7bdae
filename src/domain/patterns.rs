use super::{Board, Cell, LifeError, Result};

/// Represents a pattern that can be stamped onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) of alive cells, relative to the top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Build a `rows` x `cols` board holding this pattern with its top-left corner at (row, col).
    pub fn place(&self, rows: usize, cols: usize, row: usize, col: usize) -> Result<Board> {
        Board::check_dimensions(rows, cols)?;
        if row + self.height > rows || col + self.width > cols {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name,
                width: self.width,
                height: self.height,
                rows,
                cols,
                row,
                col,
            });
        }

        Board::from_fn(rows, cols, |r, c| {
            let alive = r >= row && c >= col && self.cells.contains(&(r - row, c - col));
            Cell::from(alive)
        })
    }

    /// Smallest board holding the pattern with a one-cell dead margin on every side
    pub fn framed(&self) -> Result<Board> {
        self.place(self.height + 2, self.width + 2, 1, 1)
    }

    /// Board of the given size with the pattern centered
    pub fn centered(&self, rows: usize, cols: usize) -> Result<Board> {
        let row = rows.saturating_sub(self.height) / 2;
        let col = cols.saturating_sub(self.width) / 2;
        self.place(rows, cols, row, col)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// T-shaped starter that settles into a beehive after five generations
    pub fn demo() -> Pattern {
        Pattern::new(
            "Demo",
            "T-tetromino, settles into a beehive",
            vec![
                (0, 2),
                (1, 1), (1, 2),
                (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1), (0, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![demo(), blinker(), toad(), beacon(), block(), glider()]
    }

    /// Look a preset up by case-insensitive name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
