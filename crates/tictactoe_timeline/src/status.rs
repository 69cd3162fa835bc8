//! Read-side values shown to the player.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Game status line.
///
/// There is no draw state: a full board without a winner still
/// reports whose turn would come next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete on the effective board.
    Winner(Mark),
    /// No winner yet; this mark moves next.
    NextPlayer(Mark),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(*mark),
            Status::NextPlayer(_) => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// One navigable point in the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Move number to jump to (0 is the empty board).
    pub move_number: usize,
}

impl HistoryEntry {
    /// Returns true for the "game start" entry.
    pub fn is_start(&self) -> bool {
        self.move_number == 0
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.move_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_history_labels() {
        assert_eq!(HistoryEntry { move_number: 0 }.to_string(), "Go to game start");
        assert_eq!(HistoryEntry { move_number: 4 }.to_string(), "Go to move #4");
    }
}
