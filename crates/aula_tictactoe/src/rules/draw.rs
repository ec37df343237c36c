//! Full boards.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// No empty square left.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}

/// Full and nobody has a line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
