//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the mark that plays the move with the given order.
    ///
    /// X makes every even-numbered move, O every odd-numbered one.
    pub fn for_turn(order: usize) -> Self {
        if order % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A move in the active timeline.
///
/// `order` is the 0-based index at which the move was made. A move is
/// visible only while `order < current_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that made the move.
    pub player: Mark,
    /// Index of the move in the timeline.
    pub order: usize,
}

impl Move {
    /// Returns true if the move is visible at the given point in history.
    pub fn is_visible_at(&self, current_move: usize) -> bool {
        self.order < current_move
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.order + 1, self.player)
    }
}

/// One entry of the move log: a move and the cell it was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Cell the mark was placed on.
    pub position: Position,
    /// The move itself.
    pub mv: Move,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mv, self.position.label())
    }
}
