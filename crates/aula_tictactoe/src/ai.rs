//! Computer opponent.
//!
//! [`minimax`] is a depth-limited alpha-beta search that falls back to the
//! line-counting [`heuristic`] when depth runs out. [`Opponent`] wraps the
//! search with a [`Difficulty`] that sometimes swaps the searched move for a
//! random one.

pub mod difficulty;
pub mod heuristic;
pub mod minimax;
pub mod opponent;

pub use difficulty::{Difficulty, SearchParams};
pub use minimax::{ScoredMove, WIN_SCORE, best_move, score_moves};
pub use opponent::{Decision, Opponent};
