//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns, starting with X.
///
/// While the game is in progress the player to move is the one the
/// alternation predicts.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if game.is_over() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_alternation_holds() {
        let game = Game::replay(&[Position::Center, Position::TopLeft]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = Game::replay(&[Position::Center]).unwrap();
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
