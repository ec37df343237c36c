//! Properties every [`Game`] satisfies between moves.
//!
//! Each invariant lives in its own module and can be checked alone;
//! [`check_game`] runs them all. [`crate::contracts::MoveContract`] calls it
//! after every move in debug builds.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::Game;
use derive_more::Display;

/// A property of a state `S`.
pub trait Invariant<S> {
    /// True if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property says.
    fn description() -> &'static str;
}

/// An invariant that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The broken invariant's description.
    pub description: &'static str,
}

fn check<I: Invariant<Game>>(game: &Game, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(game) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

/// Checks every game invariant, collecting all that fail.
pub fn check_game(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    check::<MonotonicBoardInvariant>(game, &mut violations);
    check::<AlternatingTurnInvariant>(game, &mut violations);
    check::<HistoryConsistentInvariant>(game, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
