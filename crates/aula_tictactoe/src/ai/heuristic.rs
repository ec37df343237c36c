//! Static evaluation for positions where the search ran out of depth.

use crate::rules::LINES;
use crate::{Board, Player, Square};

/// Scores a board from `maximizer`'s point of view.
///
/// Each of the 8 lines contributes ±100 for three in a line, ±10 for two
/// with the third empty and ±1 for one with the other two empty. Positive
/// totals favour `maximizer`.
pub fn evaluate(board: &Board, maximizer: Player) -> i32 {
    LINES
        .iter()
        .map(|line| evaluate_line(line.map(|pos| board.get(pos)), maximizer))
        .sum()
}

/// Scores a single line of three squares.
pub fn evaluate_line(line: [Square; 3], maximizer: Player) -> i32 {
    let mine = line
        .iter()
        .filter(|s| **s == Square::Occupied(maximizer))
        .count();
    let theirs = line
        .iter()
        .filter(|s| **s == Square::Occupied(maximizer.opponent()))
        .count();
    let empty = line.iter().filter(|s| **s == Square::Empty).count();

    side_score(mine, empty) - side_score(theirs, empty)
}

fn side_score(count: usize, empty: usize) -> i32 {
    match (count, empty) {
        (3, _) => 100,
        (2, 1) => 10,
        (1, 2) => 1,
        _ => 0,
    }
}
