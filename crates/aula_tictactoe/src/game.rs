//! Tic-tac-toe game state machine.
//!
//! A [`Game`] is an explicit value owned by whoever drives play. Moves
//! advance it through `InProgress → InProgress | Won | Drawn`; terminal
//! states accept nothing until [`Game::reset`].
//!
//! Two entry points exist for moves. [`Game::try_place`] validates and
//! reports a [`MoveError`]. [`Game::place`] and [`Game::place_index`]
//! silently drop illegal input, which is what interactive front ends want
//! for stray clicks and key presses.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::{GameStatus, Outcome};
use super::{Board, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Returns the empty positions, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Places the current player's mark, validating the move.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has ended
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.to_move, pos);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Square::Occupied(action.player));
        self.history.push(action);
        self.status = rules::outcome(&self.board).into();
        if !self.status.is_over() {
            self.to_move = self.to_move.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        debug!(%action, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Like [`Game::try_place`], taking a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as
    /// [`Game::try_place`].
    pub fn try_place_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_place(pos)
    }

    /// Places the current player's mark, ignoring illegal moves.
    ///
    /// Returns `true` if the move was applied.
    pub fn place(&mut self, pos: Position) -> bool {
        self.try_place(pos)
            .inspect_err(|e| debug!(error = %e, position = %pos, "Ignoring illegal move"))
            .is_ok()
    }

    /// Places at a raw board index, ignoring illegal or out-of-range input.
    pub fn place_index(&mut self, index: usize) -> bool {
        self.try_place_index(index)
            .inspect_err(|e| debug!(error = %e, index, "Ignoring illegal move"))
            .is_ok()
    }

    /// Returns to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.try_place(*pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new();
        game.try_place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.try_place(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.try_place(Position::Center).unwrap();
        assert_eq!(
            game.try_place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        assert_eq!(game.try_place_index(9), Err(MoveError::OutOfBounds(9)));
        assert!(!game.place_index(42));
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn test_lenient_place_ignores_illegal_moves() {
        let mut game = Game::new();
        assert!(game.place(Position::Center));
        let snapshot = game.clone();
        assert!(!game.place(Position::Center));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_won_game_rejects_moves() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(game.try_place(Position::BottomRight), Err(MoveError::GameOver));
        assert!(!game.place(Position::BottomRight));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_reset_after_finish() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .unwrap();
        game.reset();
        assert_eq!(game, Game::new());
        assert!(game.place(Position::Center));
    }
}
