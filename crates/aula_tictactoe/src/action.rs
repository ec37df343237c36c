//! Moves and the ways they can be refused.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A mark placed by `player` at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{} at {}", player, position)]
pub struct Move {
    /// Who moved.
    pub player: Player,
    /// Where.
    pub position: Position,
}

impl Move {
    /// Creates a move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Square already holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// Index outside 0..=8.
    #[display("No square at index {} (expected 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The game has been won or drawn.
    #[display("The game has already ended")]
    GameOver,

    /// Out-of-turn move.
    #[display("Player {} is not to move", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// A postcondition failed after the move was applied.
    #[display("Broken game state: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
