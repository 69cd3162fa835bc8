//! Reasons an action was ignored.
//!
//! Rejected actions never change the game state. The error only tells
//! the caller why nothing happened.

use super::position::Position;
use super::types::Mark;

/// Why a `play` call was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell is already occupied on the effective board.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The effective board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for PlayError {}

/// Why a `jump_to` call was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move is past the end of the history.
    #[display("Cannot jump to move {} (history has {} moves)", requested, history_len)]
    OutOfRange {
        /// Move number that was requested.
        requested: usize,
        /// Number of moves in the active timeline.
        history_len: usize,
    },
}

impl std::error::Error for JumpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PlayError::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            PlayError::GameOver(Mark::X).to_string(),
            "Game is already won by X"
        );
        assert_eq!(
            JumpError::OutOfRange { requested: 5, history_len: 3 }.to_string(),
            "Cannot jump to move 5 (history has 3 moves)"
        );
    }
}
