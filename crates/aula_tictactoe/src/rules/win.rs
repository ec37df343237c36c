//! Three in a row.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

use Position::*;

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [TopLeft, TopCenter, TopRight],
    [MiddleLeft, Center, MiddleRight],
    [BottomLeft, BottomCenter, BottomRight],
    [TopLeft, MiddleLeft, BottomLeft],
    [TopCenter, Center, BottomCenter],
    [TopRight, MiddleRight, BottomRight],
    [TopLeft, Center, BottomRight],
    [TopRight, Center, BottomLeft],
];

/// The first completed line in [`LINES`] order, with its owner.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|pos| board.get(pos));
        match a {
            Square::Occupied(player) if a == b && b == c => Some((player, line)),
            _ => None,
        }
    })
}

/// The owner of a completed line, if any.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
