use super::LifeError;

/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Integer encoding used at the I/O boundary (0 = dead, 1 = alive)
    pub const fn as_int(self) -> i32 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }
}

impl TryFrom<i32> for Cell {
    type Error = LifeError;

    /// Decode a boundary integer. Position is unknown here, so it is reported as (0, 0);
    /// `Board::from_rows` attaches the real coordinates.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            value => Err(LifeError::InvalidCellState { row: 0, col: 0, value }),
        }
    }
}

impl From<Cell> for i32 {
    fn from(cell: Cell) -> Self {
        cell.as_int()
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "alive with {n} neighbors");
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead_without_exactly_three() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "dead with {n} neighbors");
        }
    }

    #[test]
    fn test_integer_encoding() {
        assert_eq!(Cell::try_from(0), Ok(Cell::Dead));
        assert_eq!(Cell::try_from(1), Ok(Cell::Alive));
        assert_eq!(i32::from(Cell::Alive), 1);
        assert_eq!(i32::from(Cell::Dead), 0);
    }

    #[test]
    fn test_rejects_values_outside_zero_and_one() {
        for value in [2, -1, 255] {
            assert!(matches!(
                Cell::try_from(value),
                Err(LifeError::InvalidCellState { value: v, .. }) if v == value
            ));
        }
    }
}
