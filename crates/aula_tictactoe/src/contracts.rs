//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`.
//! Preconditions are always checked; postconditions run in debug builds.

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::check_game;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameActive;

impl GameActive {
    /// Fails with [`MoveError::GameOver`] on a finished game.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] on a taken square.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] out of turn.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameActive::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: game active, square empty, player's turn.
/// Postconditions: [`check_game`] passes.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        check_game(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.try_place(Position::Center).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.try_place(Position::Center).unwrap();
        after.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
