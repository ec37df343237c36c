//! History consistency invariant: history length matches occupied squares.

use super::super::Game;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().filled()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
