use super::{Cell, LifeError, Result};
use rand::Rng;
use rayon::prelude::*;

/// Board is a fixed-size rectangular grid of cells.
/// Boards are never mutated after construction: every step returns a new board.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from integer rows (0 = dead, 1 = alive).
    ///
    /// Validation is eager: an empty board, a ragged row or a value outside
    /// {0, 1} is rejected here, so every `Board` in existence is well-formed.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        Self::check_dimensions(rows.len(), cols)?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LifeError::RaggedBoard {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|_| LifeError::InvalidCellState { row: r, col: c, value })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a board by evaluating `f(row, col)` for every position
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Result<Self> {
        Self::check_dimensions(rows, cols)?;
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Create a board with all cells dead
    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| Cell::Dead)
    }

    /// Randomize a board; each cell is alive with probability `density`
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        Self::from_fn(rows, cols, |_, _| Cell::from(rng.random_bool(density)))
    }

    pub(crate) const fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidBoard { rows, cols });
        }
        Ok(())
    }

    /// Board dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Export as integer rows (0 = dead, 1 = alive)
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| i32::from(cell)).collect())
            .collect()
    }

    /// Count live cells in the 3x3 block around (row, col), excluding the cell itself.
    /// The block is clipped at the board edges; there is no wraparound.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_span = row.saturating_sub(1)..row.saturating_add(2).min(self.rows);
        let col_span = col.saturating_sub(1)..col.saturating_add(2).min(self.cols);

        row_span
            .flat_map(|r| col_span.clone().map(move |c| (r, c)))
            .filter(|&pos| pos != (row, col))
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)].evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional step - returns the next generation (serial)
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Same step computed row-parallel with rayon.
    /// Each output cell reads only the unmodified input board.
    pub fn next_generation_parallel(&self) -> Self {
        let cells = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl TryFrom<Vec<Vec<i32>>> for Board {
    type Error = LifeError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

/// Validate raw integer rows and compute the generation that follows them.
pub fn compute_next_generation<R: AsRef<[i32]>>(rows: &[R]) -> Result<Board> {
    Board::from_rows(rows).map(|board| board.next_generation())
}
