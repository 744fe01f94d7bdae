//! Console text rendering.
//!
//! Boards are written row-major, each cell as its integer value followed by
//! a comma, one line per row.

use std::io::{self, Write};
use crate::domain::Board;

/// Header printed once before the first generation
pub const HEADER: &str = "Cell generation:";

/// Write one board
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        for &cell in row {
            write!(out, "{},", i32::from(cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the header, then every board with a blank line between generations.
/// Returns how many boards were written.
pub fn write_generations<W, I>(out: &mut W, boards: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Board>,
{
    writeln!(out, "{HEADER}")?;
    let mut written = 0;
    for board in boards {
        if written > 0 {
            writeln!(out)?;
        }
        write_board(out, &board)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Render a board to a string
pub fn board_to_string(board: &Board) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_board(&mut buf, board);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Simulation;
    use crate::domain::presets;

    #[test]
    fn test_board_format() {
        let board = Board::from_rows(&[[0, 1, 0], [1, 1, 0]]).unwrap();
        assert_eq!(board_to_string(&board), "0,1,0,\n1,1,0,\n");
    }

    #[test]
    fn test_generations_are_separated_by_blank_lines() {
        let sim = Simulation::new(presets::blinker().framed().unwrap(), 2);
        let mut out = Vec::new();
        let written = write_generations(&mut out, sim).unwrap();
        assert_eq!(written, 3);

        let horizontal = "0,0,0,0,0,\n0,1,1,1,0,\n0,0,0,0,0,\n";
        let vertical = "0,0,1,0,0,\n0,0,1,0,0,\n0,0,1,0,0,\n";
        let expected = format!("Cell generation:\n{horizontal}\n{vertical}\n{horizontal}");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_output_round_trips_values() {
        let board = presets::demo().framed().unwrap();
        let parsed: Vec<Vec<i32>> = board_to_string(&board)
            .lines()
            .map(|line| {
                line.trim_end_matches(',')
                    .split(',')
                    .map(|v| v.parse().unwrap())
                    .collect()
            })
            .collect();
        assert_eq!(Board::from_rows(&parsed).unwrap(), board);
    }
}
