//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search never touches the caller's board: every candidate is played
//! on a copy (`Board` is `Copy`), so there is nothing to restore.

use super::heuristic::evaluate;
use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position};
use tracing::{instrument, trace};

/// Base score for a decided game.
///
/// A win found with `d` plies of depth still remaining scores
/// `WIN_SCORE + d`, so faster wins and slower losses rank higher.
pub const WIN_SCORE: i32 = 10;

/// A candidate move with its search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// The empty square considered.
    pub position: Position,
    /// Score from the maximizer's point of view.
    pub score: i32,
}

/// Scores every empty square for `maximizer`, in index order.
///
/// Each candidate is searched independently with a fresh alpha-beta window,
/// with the opponent to move and `depth` plies remaining.
pub fn score_moves(board: &Board, maximizer: Player, depth: u8) -> Vec<ScoredMove> {
    board
        .empty_positions()
        .into_iter()
        .map(|position| {
            let child = board.with(position, maximizer);
            let score = search(&child, maximizer, depth, false, i32::MIN, i32::MAX);
            ScoredMove { position, score }
        })
        .collect()
}

/// Returns the highest-scoring empty square for `maximizer`.
///
/// Ties go to the lowest index. Returns `None` when the board is full.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn best_move(board: &Board, maximizer: Player, depth: u8) -> Option<Position> {
    let mut best: Option<ScoredMove> = None;
    for candidate in score_moves(board, maximizer, depth) {
        trace!(position = %candidate.position, score = candidate.score, "Scored candidate");
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best.map(|b| b.position)
}

fn search(
    board: &Board,
    maximizer: Player,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_winner(board) {
        let score = WIN_SCORE + i32::from(depth);
        return if winner == maximizer { score } else { -score };
    }
    if is_full(board) {
        return 0;
    }
    if depth == 0 {
        return evaluate(board, maximizer);
    }

    let mover = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };

    if maximizing {
        let mut best = i32::MIN;
        for pos in board.empty_positions() {
            let score = search(&board.with(pos, mover), maximizer, depth - 1, false, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.empty_positions() {
            let score = search(&board.with(pos, mover), maximizer, depth - 1, true, alpha, beta);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
