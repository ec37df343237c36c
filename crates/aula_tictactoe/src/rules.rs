//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game engine and the search share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: the winner, a draw, or `None` while play continues.
///
/// A completed line takes precedence over a full board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        Some(Outcome::Winner(winner))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
