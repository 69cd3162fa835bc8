//! Observable state container for views.
//!
//! Views subscribe once and are told about every change. Actions that
//! were ignored notify nobody.

use super::error::{JumpError, PlayError};
use super::position::Position;
use super::state::GameState;
use super::types::{Move, Placement};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A change applied to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    Played {
        /// Cell the mark was placed on.
        position: Position,
        /// The new move.
        mv: Move,
    },
    /// The history cursor moved.
    Jumped {
        /// Previous cursor.
        from: usize,
        /// New cursor.
        to: usize,
    },
}

/// Receives change notifications from a [`GameStore`].
pub trait Observer {
    /// Called after a change has been applied.
    fn on_change(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_change(&mut self, event: &GameEvent, state: &GameState) {
        (*self)(event, state)
    }
}

/// Handle returned by [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription-{}", _0)]
pub struct SubscriptionId(u64);

/// Game state plus its subscribers.
#[derive(Default)]
pub struct GameStore {
    state: GameState,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
    next_id: u64,
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameStore {
    /// Creates a store holding an empty game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers an observer.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if the id was unknown.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Plays at `cell` and notifies observers on success.
    ///
    /// # Errors
    ///
    /// Forwards the reason the move was ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) -> Result<Placement, PlayError> {
        let placement = self.state.play(cell)?;
        self.notify(GameEvent::Played {
            position: placement.position,
            mv: placement.mv,
        });
        Ok(placement)
    }

    /// Jumps to `move_number` and notifies observers on success.
    ///
    /// # Errors
    ///
    /// Forwards `JumpError::OutOfRange`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        let from = self.state.current_move();
        self.state.jump_to(move_number)?;
        self.notify(GameEvent::Jumped { from, to: move_number });
        Ok(())
    }

    fn notify(&mut self, event: GameEvent) {
        debug!(?event, observers = self.observers.len(), "Notifying observers");
        for (_, observer) in &mut self.observers {
            observer.on_change(&event, &self.state);
        }
    }
}
