//! The game timeline: an append-only move log with a movable cursor.

use super::board::Board;
use super::error::{JumpError, PlayError};
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::status::{HistoryEntry, Status};
use super::types::{Mark, Move, Placement};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// The log holds every move of the active timeline, and each move's
/// `order` equals its index in the log. `current_move` is how many of
/// those moves are visible. Jumping back only moves the cursor; the
/// abandoned future is pruned by the next successful `play`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Moves of the active timeline, in order.
    pub(crate) log: Vec<Placement>,
    /// Number of visible moves.
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates an empty game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves visible on the board (0 is the empty board).
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Highest move number reachable in the active timeline.
    pub fn history_len(&self) -> usize {
        self.log.len()
    }

    /// The whole move log, including moves past the cursor.
    pub fn log(&self) -> &[Placement] {
        &self.log
    }

    /// Moves visible at the cursor.
    pub fn visible_moves(&self) -> &[Placement] {
        &self.log[..self.current_move.min(self.log.len())]
    }

    /// The board as seen at the cursor.
    pub fn board(&self) -> Board {
        Board::from_log(&self.log, self.current_move)
    }

    /// Mark visible at a cell, or `None` if empty or not on the board.
    ///
    /// A cell whose move lies past the cursor reads as empty.
    pub fn current_value(&self, cell: usize) -> Option<Mark> {
        let pos = Position::from_index(cell)?;
        self.log
            .iter()
            .find(|p| p.position == pos && p.mv.is_visible_at(self.current_move))
            .map(|p| p.mv.player)
    }

    /// Mark that plays next from the cursor.
    pub fn next_player(&self) -> Mark {
        Mark::for_turn(self.current_move)
    }

    /// Winner on the effective board.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.board())
    }

    /// Cells of the completed line on the effective board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board())
    }

    /// Status for the effective board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Status line as text, e.g. `"Next player: X"`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// One entry per navigable point, from game start to `history_len`.
    pub fn history_entries(&self) -> impl Iterator<Item = HistoryEntry> {
        (0..=self.history_len()).map(|move_number| HistoryEntry { move_number })
    }

    /// Places the next mark at `cell`.
    ///
    /// Ignored when the cell is off the board, occupied on the effective
    /// board, or the effective board already has a winner. Otherwise any
    /// moves past the cursor are discarded before the new move is logged.
    ///
    /// Returns the logged placement: the cell and the new move.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was ignored. The state is unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.log.len()))]
    pub fn play(&mut self, cell: usize) -> Result<Placement, PlayError> {
        let pos = Position::from_index(cell).ok_or(PlayError::OutOfBounds(cell))?;
        let board = self.board();

        if let Some(mark) = rules::winner(&board) {
            debug!(%mark, "Ignoring play after win");
            return Err(PlayError::GameOver(mark));
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring play on occupied cell");
            return Err(PlayError::CellOccupied(pos));
        }

        if self.current_move < self.log.len() {
            debug!(
                pruned = self.log.len() - self.current_move,
                "Discarding abandoned future"
            );
            self.log.truncate(self.current_move);
        }

        let placement = Placement::new(pos, Move::new(self.next_player(), self.current_move));
        self.log.push(placement);
        self.current_move += 1;

        debug!(%placement, "Move played");
        assert_invariants(self);
        Ok(placement)
    }

    /// Moves the cursor to `move_number` without touching the log.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if `move_number > history_len`.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.log.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number > self.log.len() {
            return Err(JumpError::OutOfRange {
                requested: move_number,
                history_len: self.log.len(),
            });
        }
        self.current_move = move_number;
        assert_invariants(self);
        Ok(())
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board().cells(),
            status: self.status_text(),
            current_move: self.current_move,
            history_len: self.history_len(),
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Visible cells in row-major order.
    pub cells: [Option<Mark>; 9],
    /// Status line.
    pub status: String,
    /// Cursor position in history.
    pub current_move: usize,
    /// Highest reachable move number.
    pub history_len: usize,
}
