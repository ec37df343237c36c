//! The computer player.

use super::difficulty::Difficulty;
use super::minimax::best_move;
use crate::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the opponent arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Picked uniformly among the empty squares.
    Random(Position),
    /// Picked by minimax search.
    Searched(Position),
}

impl Decision {
    /// The chosen square.
    pub fn position(self) -> Position {
        match self {
            Decision::Random(pos) | Decision::Searched(pos) => pos,
        }
    }

    /// True for a random pick.
    pub fn is_random(self) -> bool {
        matches!(self, Decision::Random(_))
    }
}

/// A computer opponent playing one mark at a fixed difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    mark: Player,
    difficulty: Difficulty,
}

impl Opponent {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Player, difficulty: Difficulty) -> Self {
        Self { mark, difficulty }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a move on `board`.
    ///
    /// With probability `random_chance` a uniformly random empty square is
    /// played; otherwise the minimax result at the difficulty's depth.
    /// Returns `None` when the board is full. The board is never modified.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark, difficulty = %self.difficulty))]
    pub fn decide<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Decision> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return None;
        }

        let params = self.difficulty.params();
        let decision = if rng.random::<f64>() < params.random_chance {
            Decision::Random(moves[rng.random_range(0..moves.len())])
        } else {
            Decision::Searched(best_move(board, self.mark, params.depth)?)
        };

        debug!(?decision, "Opponent chose move");
        Some(decision)
    }

    /// Convenience wrapper returning only the position.
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        self.decide(board, rng).map(Decision::position)
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(Player::O, Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_yields_nothing() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Opponent::default().decide(&board, &mut rng), None);
    }

    #[test]
    fn test_hard_always_searches() {
        let opponent = Opponent::new(Player::O, Difficulty::Hard);
        let board: Board = "XX./.O./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let decision = opponent.decide(&board, &mut rng).unwrap();
            assert_eq!(decision, Decision::Searched(Position::TopRight));
        }
    }

    #[test]
    fn test_random_moves_are_legal() {
        let opponent = Opponent::new(Player::O, Difficulty::Easy);
        let board: Board = "XO./.X./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let pos = opponent.choose_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }
}
