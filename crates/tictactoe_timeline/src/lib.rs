//! Tic-tac-toe with move history and time travel.
//!
//! The whole game is one [`GameState`]: an append-only move log plus a
//! cursor. Every other value (board, next player, winner, status text,
//! history list) is derived from it on demand.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns the log and implements `play` and `jump_to`
//! - **Rules**: [`winner`] scans the eight lines in a fixed order
//! - **Store**: [`GameStore`] wraps the state and notifies subscribed views
//! - **Invariants**: checked after every successful action in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4] {
//!     game.play(cell).unwrap();
//! }
//!
//! // Go back two moves and branch: the old moves 3 and 4 are discarded.
//! game.jump_to(2).unwrap();
//! game.play(5).unwrap();
//! assert_eq!(game.history_len(), 3);
//! assert_eq!(game.current_value(5), Some(Mark::X));
//! assert_eq!(game.status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod position;
mod rules;
mod state;
mod status;
mod store;
mod types;

pub use board::Board;
pub use error::{JumpError, PlayError};
pub use invariants::{
    AlternatingMarks, CursorInRange, DistinctCells, Invariant, InvariantSet, InvariantViolation,
    OrderMatchesIndex, TimelineInvariants,
};
pub use position::Position;
pub use rules::{LINES, winner, winning_line};
pub use state::{GameState, Snapshot};
pub use status::{HistoryEntry, Status};
pub use store::{GameEvent, GameStore, Observer, SubscriptionId};
pub use types::{Mark, Move, Placement};
