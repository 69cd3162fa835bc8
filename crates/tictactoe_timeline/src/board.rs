//! Effective board derived from the move log.

use super::position::Position;
use super::types::{Mark, Placement};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board as seen at one point in history.
///
/// A board is never stored. It is rebuilt from the move log by keeping
/// only the moves visible at `current_move`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the board visible at `current_move` from a move log.
    pub fn from_log(log: &[Placement], current_move: usize) -> Self {
        let mut board = Self::new();
        for placement in log.iter().filter(|p| p.mv.is_visible_at(current_move)) {
            board.cells[placement.position.index()] = Some(placement.mv.player);
        }
        board
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Text shown for a cell: the mark, or the 1-based key when empty.
    pub fn symbol(&self, pos: Position) -> String {
        match self.get(pos) {
            Some(mark) => mark.to_string(),
            None => (pos.index() + 1).to_string(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in Position::ALL.chunks(3).enumerate() {
            if i > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            let cells: Vec<String> = row.iter().map(|pos| self.symbol(*pos)).collect();
            f.write_str(&cells.join("|"))?;
        }
        Ok(())
    }
}
