//! Tic-tac-toe rules and a computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`] and named [`Position`]s
//! - **Rules**: pure win/draw detection over the 8 lines
//! - **Game**: the [`Game`] state machine with move history
//! - **Contracts**: pre/postconditions checked around every move
//! - **AI**: minimax [`Opponent`] with three [`Difficulty`] levels
//!
//! # Example
//!
//! ```
//! use aula_tictactoe::{Difficulty, Game, Opponent, Player, Position};
//! use rand::SeedableRng;
//!
//! let mut game = Game::new();
//! game.try_place(Position::Center)?;
//!
//! let opponent = Opponent::new(Player::O, Difficulty::Hard);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! if let Some(pos) = opponent.choose_move(game.board(), &mut rng) {
//!     game.try_place(pos)?;
//! }
//! assert_eq!(game.moves_played(), 2);
//! # Ok::<(), aula_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
pub mod contracts;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{Decision, Difficulty, Opponent, ScoredMove, best_move};
pub use game::Game;
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use types::{Board, ParseBoardError, Player, Square};
