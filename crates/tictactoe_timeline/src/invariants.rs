//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold after every
//! successful action. They are checked in debug builds and can be
//! tested independently.

use super::state::GameState;
use super::types::Mark;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Invariant: every logged move's order equals its index in the log.
pub struct OrderMatchesIndex;

impl Invariant<GameState> for OrderMatchesIndex {
    fn holds(state: &GameState) -> bool {
        state
            .log()
            .iter()
            .enumerate()
            .all(|(i, p)| p.mv.order == i)
    }

    fn description() -> &'static str {
        "Move order matches its position in the log"
    }
}

/// Invariant: X makes even-numbered moves, O odd-numbered ones.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(state: &GameState) -> bool {
        state
            .log()
            .iter()
            .all(|p| p.mv.player == Mark::for_turn(p.mv.order))
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: no cell appears twice in the log.
pub struct DistinctCells;

impl Invariant<GameState> for DistinctCells {
    fn holds(state: &GameState) -> bool {
        let mut seen = [false; 9];
        state.log().iter().all(|p| {
            let idx = p.position.index();
            !std::mem::replace(&mut seen[idx], true)
        })
    }

    fn description() -> &'static str {
        "Each cell holds at most one move"
    }
}

/// Invariant: the cursor never passes the end of the history.
pub struct CursorInRange;

impl Invariant<GameState> for CursorInRange {
    fn holds(state: &GameState) -> bool {
        state.current_move() <= state.history_len()
    }

    fn description() -> &'static str {
        "Current move is within the history"
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (OrderMatchesIndex, AlternatingMarks, DistinctCells, CursorInRange);

/// Asserts that all timeline invariants hold (panics in debug builds).
pub fn assert_invariants(state: &GameState) {
    let result = TimelineInvariants::check_all(state);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = violation.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Invariants violated: {:?}", result);
}
